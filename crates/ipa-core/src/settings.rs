//! Global mark settings loaded from TOML, following the same OnceLock pattern
//! as the lexicon.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    tones: BTreeMap<String, String>,
    pub erhua: ErhuaSettings,
    /// Parsed tones: digit → mark.
    #[serde(skip)]
    tones_parsed: Vec<(char, String)>,
}

impl Settings {
    /// Tone mark for a tone digit, if the digit is configured.
    pub fn tone_mark(&self, digit: char) -> Option<&str> {
        self.tones_parsed
            .iter()
            .find_map(|(d, mark)| (*d == digit).then_some(mark.as_str()))
    }

    /// Configured tone digits in ascending order.
    pub fn tone_digits(&self) -> impl Iterator<Item = char> + '_ {
        self.tones_parsed.iter().map(|(d, _)| *d)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErhuaSettings {
    pub rhotic: String,
    pub nasalized_rhotic: String,
    pub nasals: Vec<char>,
}

impl ErhuaSettings {
    pub fn is_nasal(&self, c: char) -> bool {
        self.nasals.contains(&c)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.tones_parsed = parse_tones(&s.tones)?;
    Ok(s)
}

fn parse_tones(raw: &BTreeMap<String, String>) -> Result<Vec<(char, String)>, SettingsError> {
    let mut result = Vec::new();
    for (key, mark) in raw {
        let mut chars = key.chars();
        let digit = match (chars.next(), chars.next()) {
            (Some(d), None) if d.is_ascii_digit() => d,
            _ => {
                return Err(SettingsError::InvalidValue {
                    field: format!("tones.{}", key),
                    reason: "tone key must be a single digit".to_string(),
                })
            }
        };
        if mark.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("tones.{}", key),
                reason: "tone mark must not be empty".to_string(),
            });
        }
        result.push((digit, mark.clone()));
    }
    Ok(result)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(erhua.rhotic);
    check_non_empty!(erhua.nasalized_rhotic);
    check_non_empty!(erhua.nasals);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.tone_mark('1'), Some("˥"));
        assert_eq!(s.tone_mark('2'), Some("˧˥"));
        assert_eq!(s.tone_mark('3'), Some("˨˩˦"));
        assert_eq!(s.tone_mark('4'), Some("˥˩"));
        assert_eq!(s.tone_mark('5'), None);
        assert_eq!(s.erhua.rhotic, "ɻ");
        assert_eq!(s.erhua.nasalized_rhotic, "\u{303}ɻ");
        assert!(s.erhua.is_nasal('ŋ'));
        assert!(!s.erhua.is_nasal('m'));
    }

    #[test]
    fn tone_digits_sorted() {
        let digits: String = settings().tone_digits().collect();
        assert_eq!(digits, "1234");
    }

    #[test]
    fn custom_neutral_tone() {
        let toml = r#"
[tones]
1 = "55"
5 = "0"

[erhua]
rhotic = "r"
nasalized_rhotic = "~r"
nasals = ["n"]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.tone_mark('5'), Some("0"));
        assert_eq!(s.tone_mark('2'), None);
    }

    #[test]
    fn error_multi_char_tone_key() {
        let toml = r#"
[tones]
12 = "x"

[erhua]
rhotic = "ɻ"
nasalized_rhotic = "ɻ"
nasals = ["n"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "tones.12")
        );
    }

    #[test]
    fn error_non_digit_tone_key() {
        let toml = r#"
[tones]
a = "x"

[erhua]
rhotic = "ɻ"
nasalized_rhotic = "ɻ"
nasals = ["n"]
"#;
        assert!(matches!(
            parse_settings_toml(toml).unwrap_err(),
            SettingsError::InvalidValue { .. }
        ));
    }

    #[test]
    fn error_empty_tone_mark() {
        let toml = r#"
[tones]
1 = ""

[erhua]
rhotic = "ɻ"
nasalized_rhotic = "ɻ"
nasals = ["n"]
"#;
        assert!(matches!(
            parse_settings_toml(toml).unwrap_err(),
            SettingsError::InvalidValue { .. }
        ));
    }

    #[test]
    fn error_empty_nasals() {
        let toml = r#"
[tones]
1 = "˥"

[erhua]
rhotic = "ɻ"
nasalized_rhotic = "ɻ"
nasals = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "erhua.nasals")
        );
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[tones]\n1 = \"˥\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
