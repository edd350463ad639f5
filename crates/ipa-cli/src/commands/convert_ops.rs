use std::io::{self, BufRead, Write};

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use ipa_core::unicode::fold_ascii;
use ipa_core::{Segment, SegmentKind};

use super::{die, open_engine};

#[derive(Debug, Serialize)]
struct ConvertReport<'a> {
    input: &'a str,
    ipa: String,
    segments: &'a [Segment],
}

pub fn convert_cmd(text: &str, json: bool, lexicon: Option<&str>, settings: Option<&str>) {
    let engine = open_engine(lexicon, settings);
    let segments = engine.segment(text);
    let ipa = join_display(&segments);

    if json {
        let report = ConvertReport {
            input: text,
            ipa,
            segments: &segments,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
    } else {
        println!("{ipa}");
        print!("{}", format_table(&segments));
    }
}

/// Read lines from stdin and print each line's transcription.
pub fn repl_cmd(lexicon: Option<&str>, settings: Option<&str>) {
    let engine = open_engine(lexicon, settings);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = die!(line, "Failed to read line: {}");
        die!(
            writeln!(stdout, "{}", engine.transcribe(&line)),
            "Failed to write: {}"
        );
    }
}

pub fn lookup_cmd(key: &str, lexicon: Option<&str>) {
    let engine = open_engine(lexicon, None);
    let chars = lookup_chars(key);
    let lexicon = engine.lexicon();

    match lexicon.find_exact(&chars, 0) {
        Some(ipa) => println!("exact: {ipa}"),
        None => println!("exact: (none)"),
    }
    let m = lexicon.munch(&chars, 0);
    let matched: String = chars[..m.until].iter().collect();
    println!(
        "munch: {matched:?} until={} phonetic={}",
        m.until,
        m.phonetic.unwrap_or("(none)")
    );
}

/// Fold a lookup key the same way the segmenter folds its input.
fn lookup_chars(key: &str) -> Vec<char> {
    let chars: Vec<char> = key.chars().collect();
    fold_ascii(&chars)
}

/// Segments joined the way a renderer shows them.
pub fn join_display(segments: &[Segment]) -> String {
    segments.iter().map(Segment::display).collect()
}

fn kind_label(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Matched => "pinyin",
        SegmentKind::Partial => "incomplete",
        SegmentKind::Unknown => "ignore",
    }
}

/// One row per segment: kind, typed text, IPA. Columns are aligned by
/// display width, since IPA carries combining marks.
pub fn format_table(segments: &[Segment]) -> String {
    let rows: Vec<[&str; 3]> = segments
        .iter()
        .map(|s| {
            [
                kind_label(s.kind),
                s.text.as_str(),
                s.phonetic.as_deref().unwrap_or("-"),
            ]
        })
        .collect();

    let mut widths = [0usize; 2];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    for [kind, text, ipa] in rows {
        out.push_str(&pad(kind, widths[0]));
        out.push_str("  ");
        out.push_str(&pad(text, widths[1]));
        out.push_str("  ");
        out.push_str(ipa);
        out.push('\n');
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_display() {
        let segments = ipa_core::segment("ni3hao zh?");
        assert_eq!(join_display(&segments), "ni˨˩˦xɑɔ zh?");
    }

    #[test]
    fn test_format_table() {
        let segments = ipa_core::segment("Huar4?");
        let table = format_table(&segments);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "pinyin  Huar4  xuɑɻ˥˩");
        assert_eq!(lines[1], "ignore  ?      -");
    }

    #[test]
    fn test_pad_uses_display_width() {
        // Combining tilde takes no columns.
        assert_eq!(pad("a\u{303}", 3), "a\u{303}  ");
        assert_eq!(pad("abcd", 2), "abcd");
    }

    #[test]
    fn test_report_json_shape() {
        let segments = ipa_core::segment("ma?");
        let report = ConvertReport {
            input: "ma?",
            ipa: join_display(&segments),
            segments: &segments,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["ipa"], "mɑ?");
        assert_eq!(value["segments"][0]["kind"], "matched");
        assert_eq!(value["segments"][0]["phonetic"], "mɑ");
        assert_eq!(value["segments"][1]["kind"], "unknown");
        assert!(value["segments"][1].get("phonetic").is_none());
    }

    #[test]
    fn lookup_folds_like_segmenter() {
        assert_eq!(lookup_chars("NI3"), vec!['n', 'i', '3']);
        // Non-ASCII capitals are left alone, as in segmentation.
        assert_eq!(lookup_chars("NÜ"), vec!['n', 'Ü']);

        let lexicon = ipa_core::Lexicon::global();
        let upper = lookup_chars("NÜ");
        assert_eq!(lexicon.find_exact(&upper, 0), None);
        assert!(ipa_core::segment("NÜ")
            .iter()
            .all(|s| s.kind != SegmentKind::Matched));

        let mixed = lookup_chars("Nü");
        let segments = ipa_core::segment("Nü");
        assert_eq!(lexicon.find_exact(&mixed, 0), segments[0].phonetic.as_deref());
        assert!(segments[0].phonetic.is_some());
    }
}
