use std::collections::BTreeMap;
use std::fs;
use std::process;

use serde::{Deserialize, Serialize};

use ipa_engine::IpaEngine;

use super::{die, open_engine};

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub input: String,
    pub expected: String,
    pub category: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub status: AccuracyStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

pub fn parse_corpus(content: &str) -> Result<AccuracyCorpus, toml::de::Error> {
    toml::from_str(content)
}

/// Run every case (optionally only one category) through `engine`.
pub fn run_corpus(
    engine: &IpaEngine,
    corpus: &AccuracyCorpus,
    category: Option<&str>,
) -> AccuracyReport {
    let results: Vec<AccuracyResult> = corpus
        .cases
        .iter()
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .map(|case| {
            let (actual, status) = if case.skip {
                (String::new(), AccuracyStatus::Skip)
            } else {
                let actual = engine.transcribe(&case.input);
                let status = if actual == case.expected {
                    AccuracyStatus::Pass
                } else {
                    AccuracyStatus::Fail
                };
                (actual, status)
            };
            AccuracyResult {
                input: case.input.clone(),
                expected: case.expected.clone(),
                actual,
                status,
                category: case.category.clone(),
                note: case.note.clone(),
            }
        })
        .collect();

    let count = |status| results.iter().filter(|r| r.status == status).count();
    let total = results.len();
    let pass = count(AccuracyStatus::Pass);
    let fail = count(AccuracyStatus::Fail);
    let skip = count(AccuracyStatus::Skip);
    let tested = total - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };

    AccuracyReport {
        results,
        summary: AccuracySummary {
            total,
            pass,
            fail,
            skip,
            pass_rate: format!("{:.1}%", rate),
        },
    }
}

pub fn format_text(report: &AccuracyReport, verbose: bool) -> String {
    let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
    for r in &report.results {
        grouped.entry(&r.category).or_default().push(r);
    }

    let mut out = String::new();
    for (cat, group) in &grouped {
        out.push_str(&format!("\n=== {} ({} cases) ===\n", cat, group.len()));
        for r in group {
            match r.status {
                AccuracyStatus::Pass if verbose => {
                    out.push_str(&format!("  \u{2713} {} \u{2192} {}\n", r.input, r.expected));
                }
                AccuracyStatus::Pass => {}
                AccuracyStatus::Fail => {
                    out.push_str(&format!(
                        "  \u{2717} {} \u{2192} {} (got: {})\n",
                        r.input, r.expected, r.actual
                    ));
                }
                AccuracyStatus::Skip => {
                    let reason = r.note.as_deref().unwrap_or("known failure");
                    out.push_str(&format!("  - {} (skipped: {})\n", r.input, reason));
                }
            }
        }
    }

    let s = &report.summary;
    out.push_str(&format!(
        "\nTotal: {}  Pass: {}  Fail: {}  Skip: {}  ({})\n",
        s.total, s.pass, s.fail, s.skip, s.pass_rate
    ));
    out
}

pub fn accuracy_cmd(
    corpus_file: &str,
    category: Option<&str>,
    verbose: bool,
    json: bool,
    lexicon: Option<&str>,
    settings: Option<&str>,
) {
    let engine = open_engine(lexicon, settings);
    let content = die!(
        fs::read_to_string(corpus_file),
        "Failed to read corpus file {corpus_file}: {}"
    );
    let corpus = die!(parse_corpus(&content), "Failed to parse corpus TOML: {}");

    let report = run_corpus(&engine, &corpus, category);
    if report.results.is_empty() {
        eprintln!("No cases match the given filters");
        process::exit(1);
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
    } else {
        print!("{}", format_text(&report, verbose));
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}
