//! Boundary passes applied after a complete syllable, in order: coda
//! reassignment, erhua, tone.

use crate::lexicon::{Lexicon, Munch};
use crate::settings::{ErhuaSettings, Settings};

/// Finals whose consonant may instead start the next syllable.
const AMBIGUOUS_CODAS: [char; 2] = ['n', 'g'];

const ERHUA_LETTER: char = 'r';

/// A complete syllable being composed.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Syllable {
    pub start: usize,
    pub until: usize,
    pub phonetic: String,
}

impl Syllable {
    pub fn new(start: usize, matched: Munch<'_>) -> Self {
        Self {
            start,
            until: matched.until,
            phonetic: matched.phonetic.unwrap_or_default().to_owned(),
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.until
    }
}

/// Choose between `current`/`next` and the reading that moves a final `n`
/// or `g` onto the following syllable ("xining" → xi-ning, "danao" → da-nao).
///
/// The alternative wins only when both of its syllables are complete and
/// the following one gets strictly longer.
pub(super) fn resolve_coda<'a>(
    lexicon: &'a Lexicon,
    chars: &[char],
    start: usize,
    current: Munch<'a>,
    next: Munch<'a>,
) -> (Munch<'a>, Munch<'a>) {
    let end = start + current.until;
    if current.until == 0 || !AMBIGUOUS_CODAS.contains(&chars[end - 1]) {
        return (current, next);
    }

    let alt_current = Munch {
        until: current.until - 1,
        phonetic: lexicon.find_exact(&chars[..end - 1], start),
    };
    let alt_next = lexicon.munch(chars, end - 1);

    if alt_current.phonetic.is_some() && alt_next.phonetic.is_some() && alt_next.until > next.until
    {
        (alt_current, alt_next)
    } else {
        (current, next)
    }
}

/// A lone `r` after the syllable rhotacizes it. A final nasal is replaced by
/// the nasalized rhotic.
pub(super) fn apply_erhua(
    chars: &[char],
    next: &Munch<'_>,
    erhua: &ErhuaSettings,
    syllable: &mut Syllable,
) {
    if next.until != 1 || chars.get(syllable.end()) != Some(&ERHUA_LETTER) {
        return;
    }

    match syllable.phonetic.chars().last() {
        Some(last) if erhua.is_nasal(last) => {
            syllable.phonetic.pop();
            syllable.phonetic.push_str(&erhua.nasalized_rhotic);
        }
        _ => syllable.phonetic.push_str(&erhua.rhotic),
    }
    syllable.until += 1;
}

/// A configured tone digit right after the syllable appends its mark.
pub(super) fn apply_tone(chars: &[char], settings: &Settings, syllable: &mut Syllable) {
    let Some(mark) = chars
        .get(syllable.end())
        .and_then(|&c| settings.tone_mark(c))
    else {
        return;
    };
    syllable.phonetic.push_str(mark);
    syllable.until += 1;
}
