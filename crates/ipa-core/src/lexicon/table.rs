pub(super) const DEFAULT_TOML: &str = include_str!("default_lexicon.toml");

/// Returns the embedded default syllable table.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
