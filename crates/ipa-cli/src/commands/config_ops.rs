use std::fs;

use super::die;

pub fn lexicon_export() {
    print!("{}", ipa_core::lexicon::default_toml());
}

pub fn lexicon_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let pairs = die!(ipa_core::lexicon::parse_lexicon_toml(&content), "Error: {}");
    let lexicon = ipa_core::Lexicon::from_pairs(pairs.iter().map(|(k, v)| (k, v.as_str())));
    let duplicates = pairs.len() - lexicon.len();
    println!(
        "OK: {} syllables ({} duplicate entries)",
        lexicon.len(),
        duplicates
    );
}

pub fn settings_export() {
    print!("{}", ipa_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        ipa_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    let tones: String = s.tone_digits().collect();
    println!(
        "OK: tones=[{}], erhua.rhotic={}, erhua.nasals={}",
        tones,
        s.erhua.rhotic,
        s.erhua.nasals.iter().collect::<String>()
    );
}
