use serde::Deserialize;

use crate::unicode::is_syllable_char;

#[derive(Deserialize)]
struct LexiconConfig {
    syllables: Vec<(String, String)>,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("syllables table is empty")]
    Empty,
    #[error("empty syllable key")]
    EmptyKey,
    #[error("invalid character in syllable key: {0}")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("lexicon already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into `(syllable, ipa)` pairs, keeping table order.
///
/// Duplicate keys are kept; the lexicon resolves them last-writer-wins.
pub fn parse_lexicon_toml(toml_str: &str) -> Result<Vec<(String, String)>, LexiconConfigError> {
    let config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| LexiconConfigError::Parse(e.to_string()))?;

    if config.syllables.is_empty() {
        return Err(LexiconConfigError::Empty);
    }

    for (key, value) in &config.syllables {
        if key.is_empty() {
            return Err(LexiconConfigError::EmptyKey);
        }
        if !key.chars().all(is_syllable_char) {
            return Err(LexiconConfigError::InvalidKey(key.clone()));
        }
        if value.is_empty() {
            return Err(LexiconConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(config.syllables)
}
