//! Engine API for host applications.
//!
//! Hosts either use the global lexicon and settings through the top-level
//! functions here, or build an [`IpaEngine`] from their own configuration
//! and share it across threads.

mod engine;
mod types;

pub use engine::IpaEngine;
pub use types::EngineError;

use std::fs;
use std::path::Path;

use ipa_core::lexicon::Lexicon;
use ipa_core::{settings, Segment};

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Register a custom syllable table for the global lexicon. Must run before
/// the first global segmentation.
pub fn lexicon_load_config(path: &Path) -> Result<(), EngineError> {
    let content = read_config(path)?;
    Lexicon::init_custom(content).map_err(EngineError::invalid_data)
}

/// Register custom mark settings for the global segmenter. Must run before
/// the first global segmentation.
pub fn settings_load_config(path: &Path) -> Result<(), EngineError> {
    let content = read_config(path)?;
    settings::init_custom(content).map_err(EngineError::invalid_data)
}

/// Write JSON traces of segmentation to `log_dir`. Does nothing unless the
/// crate is built with the `trace` feature.
pub fn trace_init(log_dir: &Path) -> Result<(), EngineError> {
    crate::trace_init::init_tracing(log_dir)
}

/// Segment `text` with the global lexicon and settings.
pub fn segment(text: &str) -> Vec<Segment> {
    ipa_core::segment(text)
}

pub(crate) fn read_config(path: &Path) -> Result<String, EngineError> {
    fs::read_to_string(path).map_err(|e| EngineError::Io {
        msg: format!("{}: {e}", path.display()),
    })
}
