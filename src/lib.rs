//! Pinyin-to-IPA engine facade for host applications.
//!
//! Wraps `ipa-core` with owned, shareable engine handles, file-based
//! configuration loading and tracing setup.

pub mod api;
mod trace_init;

pub use api::{EngineError, IpaEngine};
pub use ipa_core::{Segment, SegmentKind};
