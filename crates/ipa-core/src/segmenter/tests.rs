use proptest::prelude::*;

use super::*;

fn matched(text: &str, phonetic: &str) -> Segment {
    Segment {
        kind: SegmentKind::Matched,
        text: text.to_string(),
        phonetic: Some(phonetic.to_string()),
    }
}

fn partial(text: &str) -> Segment {
    Segment {
        kind: SegmentKind::Partial,
        text: text.to_string(),
        phonetic: None,
    }
}

fn unknown(text: &str) -> Segment {
    Segment {
        kind: SegmentKind::Unknown,
        text: text.to_string(),
        phonetic: None,
    }
}

#[test]
fn test_single_syllable() {
    assert_eq!(segment("ma"), vec![matched("ma", "mɑ")]);
}

#[test]
fn test_two_syllables() {
    assert_eq!(
        segment("nihao"),
        vec![matched("ni", "ni"), matched("hao", "xɑɔ")]
    );
}

#[test]
fn test_empty_input() {
    assert!(segment("").is_empty());
}

#[test]
fn test_coda_reassigned_xining() {
    assert_eq!(
        segment("xining"),
        vec![matched("xi", "ɕi"), matched("ning", "nɪŋ")]
    );
}

#[test]
fn test_coda_reassigned_danao() {
    assert_eq!(
        segment("danao"),
        vec![matched("da", "tɑ"), matched("nao", "nɑɔ")]
    );
}

#[test]
fn test_coda_kept_zhongguo() {
    assert_eq!(
        segment("zhongguo"),
        vec![matched("zhong", "tʂoŋ"), matched("guo", "kuɔ")]
    );
}

#[test]
fn test_tone_marks() {
    assert_eq!(segment("ma1"), vec![matched("ma1", "mɑ˥")]);
    assert_eq!(segment("ma2"), vec![matched("ma2", "mɑ˧˥")]);
    assert_eq!(segment("ma3"), vec![matched("ma3", "mɑ˨˩˦")]);
    assert_eq!(segment("ma4"), vec![matched("ma4", "mɑ˥˩")]);
}

#[test]
fn test_tone_sequence() {
    assert_eq!(
        segment("ni3hao3"),
        vec![matched("ni3", "ni˨˩˦"), matched("hao3", "xɑɔ˨˩˦")]
    );
}

#[test]
fn test_unrecognized_digit_left_alone() {
    assert_eq!(segment("ma5"), vec![matched("ma", "mɑ"), unknown("5")]);
}

#[test]
fn test_erhua() {
    assert_eq!(segment("huar"), vec![matched("huar", "xuɑɻ")]);
}

#[test]
fn test_erhua_after_nasal() {
    assert_eq!(segment("wanr"), vec![matched("wanr", "wa\u{303}ɻ")]);
    assert_eq!(segment("yangr"), vec![matched("yangr", "jɑ\u{303}ɻ")]);
}

#[test]
fn test_erhua_then_tone() {
    assert_eq!(segment("huar4"), vec![matched("huar4", "xuɑɻ˥˩")]);
}

#[test]
fn test_erhua_mid_word() {
    assert_eq!(
        segment("huarhao"),
        vec![matched("huar", "xuɑɻ"), matched("hao", "xɑɔ")]
    );
}

#[test]
fn test_r_initial_syllable_is_not_erhua() {
    assert_eq!(
        segment("heren"),
        vec![matched("he", "xə"), matched("ren", "ʐən")]
    );
}

#[test]
fn test_partial_syllable() {
    assert_eq!(segment("zh"), vec![partial("zh")]);
    assert_eq!(segment("nihaozh"), {
        let mut v = segment("nihao");
        v.push(partial("zh"));
        v
    });
}

#[test]
fn test_unknown_characters() {
    assert_eq!(segment("?"), vec![unknown("?")]);
    assert_eq!(
        segment("ni hao!"),
        vec![
            matched("ni", "ni"),
            unknown(" "),
            matched("hao", "xɑɔ"),
            unknown("!"),
        ]
    );
}

#[test]
fn test_case_preserved_in_text() {
    assert_eq!(
        segment("NiHao3"),
        vec![matched("Ni", "ni"), matched("Hao3", "xɑɔ˨˩˦")]
    );
}

#[test]
fn test_umlaut() {
    assert_eq!(segment("nü3"), vec![matched("nü3", "ny˨˩˦")]);
}

#[test]
fn test_display() {
    let segments = segment("ni3zh?");
    let shown: String = segments.iter().map(Segment::display).collect();
    assert_eq!(shown, "ni˨˩˦zh?");
}

#[test]
fn test_custom_lexicon_and_settings() {
    let lexicon = Lexicon::from_pairs([("ka", "kʰa")]);
    let settings = crate::settings::parse_settings_toml(
        r#"
[tones]
5 = "⁰"

[erhua]
rhotic = "r"
nasalized_rhotic = "~r"
nasals = ["n"]
"#,
    )
    .unwrap();
    let segmenter = Segmenter::new(&lexicon, &settings);
    assert_eq!(
        segmenter.segment("ka5ka1"),
        vec![matched("ka5", "kʰa⁰"), matched("ka", "kʰa"), unknown("1")]
    );
}

proptest! {
    #[test]
    fn texts_reconstruct_input(input in "[a-zA-Z0-9 ?'ü]{0,24}") {
        let segments = segment(&input);
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(joined, input);
    }

    #[test]
    fn segments_are_well_formed(input in "[a-z0-9 r]{0,24}") {
        for s in segment(&input) {
            prop_assert!(!s.text.is_empty());
            match s.kind {
                SegmentKind::Matched => prop_assert!(s.phonetic.is_some()),
                SegmentKind::Partial => prop_assert!(s.phonetic.is_none()),
                SegmentKind::Unknown => {
                    prop_assert!(s.phonetic.is_none());
                    prop_assert_eq!(s.text.chars().count(), 1);
                }
            }
        }
    }
}
