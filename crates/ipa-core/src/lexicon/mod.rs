//! Syllable lexicon for Pinyin-to-IPA conversion.
//!
//! Syllables are stored in a ternary search tree that supports exact lookup
//! and longest-prefix matching ("munching") over partially typed input.

mod config;
mod table;
mod tree;

pub use config::{parse_lexicon_toml, LexiconConfigError};
pub use table::default_toml;
pub use tree::{Lexicon, Munch};
