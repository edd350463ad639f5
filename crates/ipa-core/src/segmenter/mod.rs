//! Splits romanized input into syllables and composes their IPA.
//!
//! The input is walked left to right. At each position the longest syllable
//! is munched from the lexicon; complete syllables then go through the
//! boundary passes in `rules` (coda reassignment, erhua, tone) using one
//! syllable of lookahead. Every input character ends up in exactly one
//! segment, so concatenating segment texts gives back the input.

mod rules;
#[cfg(test)]
mod tests;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::lexicon::{Lexicon, Munch};
use crate::settings::{settings, Settings};
use crate::unicode::fold_ascii;

use rules::Syllable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// A complete syllable, including any erhua or tone suffix.
    Matched,
    /// A prefix of some syllable that is not complete yet.
    Partial,
    /// A single character that does not start any syllable.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// The slice of the original input covered by this segment.
    pub text: String,
    /// IPA transcription; only set for `Matched`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
}

impl Segment {
    fn new(kind: SegmentKind, text: &[char], phonetic: Option<String>) -> Self {
        Self {
            kind,
            text: text.iter().collect(),
            phonetic,
        }
    }

    /// What a renderer shows for this segment: the IPA of a matched
    /// syllable, the typed text otherwise.
    pub fn display(&self) -> &str {
        self.phonetic.as_deref().unwrap_or(&self.text)
    }
}

/// Stateless segmenter over a shared lexicon and mark settings.
#[derive(Clone, Copy)]
pub struct Segmenter<'a> {
    lexicon: &'a Lexicon,
    settings: &'a Settings,
}

impl<'a> Segmenter<'a> {
    pub fn new(lexicon: &'a Lexicon, settings: &'a Settings) -> Self {
        Self { lexicon, settings }
    }

    /// Segmenter over the global lexicon and settings.
    pub fn global() -> Segmenter<'static> {
        Segmenter::new(Lexicon::global(), settings())
    }

    pub fn segment(&self, input: &str) -> Vec<Segment> {
        let original: Vec<char> = input.chars().collect();
        let chars = fold_ascii(&original);
        let _span = debug_span!("segment", char_count = chars.len()).entered();

        let mut segments = Vec::new();
        let mut cursor = 0;
        while cursor < chars.len() {
            let current = self.lexicon.munch(&chars, cursor);
            let consumed = match current.phonetic {
                None if current.until == 0 => {
                    segments.push(Segment::new(
                        SegmentKind::Unknown,
                        &original[cursor..cursor + 1],
                        None,
                    ));
                    1
                }
                None => {
                    segments.push(Segment::new(
                        SegmentKind::Partial,
                        &original[cursor..cursor + current.until],
                        None,
                    ));
                    current.until
                }
                Some(_) => {
                    let syllable = self.compose(&chars, cursor, current);
                    segments.push(Segment::new(
                        SegmentKind::Matched,
                        &original[cursor..syllable.end()],
                        Some(syllable.phonetic),
                    ));
                    syllable.until
                }
            };
            cursor += consumed.max(1);
        }

        debug!(segment_count = segments.len());
        segments
    }

    /// Resolve the boundary after a complete syllable starting at `start`
    /// and compose its final IPA.
    fn compose(&self, chars: &[char], start: usize, current: Munch<'a>) -> Syllable {
        if start + current.until == chars.len() {
            return Syllable::new(start, current);
        }

        let next = self.lexicon.munch(chars, start + current.until);
        let (current, next) = rules::resolve_coda(self.lexicon, chars, start, current, next);

        let mut syllable = Syllable::new(start, current);
        rules::apply_erhua(chars, &next, &self.settings.erhua, &mut syllable);
        rules::apply_tone(chars, self.settings, &mut syllable);
        syllable
    }
}

/// Segment `input` with the global lexicon and settings.
pub fn segment(input: &str) -> Vec<Segment> {
    Segmenter::global().segment(input)
}
