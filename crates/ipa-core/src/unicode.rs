//! Character-level helpers for romanized input.

/// Characters allowed in a lexicon key: lowercase letters, including `ü`.
pub fn is_syllable_char(c: char) -> bool {
    c.is_alphabetic() && c.is_lowercase()
}

/// Lowercase ASCII letters one character at a time, so positions in the
/// result line up with positions in the original input.
pub fn fold_ascii(chars: &[char]) -> Vec<char> {
    chars.iter().map(char::to_ascii_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_chars() {
        assert!(is_syllable_char('a'));
        assert!(is_syllable_char('ü'));
        assert!(!is_syllable_char('A'));
        assert!(!is_syllable_char('3'));
        assert!(!is_syllable_char('\''));
    }

    #[test]
    fn test_fold_ascii_keeps_alignment() {
        let input: Vec<char> = "NǏ Hao3".chars().collect();
        let folded = fold_ascii(&input);
        assert_eq!(folded.len(), input.len());
        assert_eq!(folded.iter().collect::<String>(), "nǏ hao3");
    }
}
