//! The `Word` type: five distinct uppercase ASCII letters.

use crate::error::GuessError;
use std::fmt;

pub const WORD_LENGTH: usize = 5;

/// A validated word. Every value holds exactly five distinct uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Normalise `raw` to uppercase and validate it.
    ///
    /// # Errors
    ///
    /// `GuessError::InvalidFormat` unless `raw` is exactly five ASCII letters,
    /// `GuessError::DuplicateLetters` if any letter repeats.
    pub fn parse(raw: &str) -> Result<Self, GuessError> {
        if !is_valid_format(raw) {
            return Err(GuessError::InvalidFormat);
        }
        let upper = raw.to_ascii_uppercase();
        if !has_distinct_letters(&upper) {
            return Err(GuessError::DuplicateLetters);
        }
        Ok(Self(upper))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn letters(&self) -> [char; WORD_LENGTH] {
        let mut letters = [' '; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(self.0.chars()) {
            *slot = c;
        }
        letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_valid_format(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn has_distinct_letters(word: &str) -> bool {
    let mut seen = [false; 26];
    for b in word.bytes() {
        let idx = (b - b'A') as usize;
        if seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        let word = Word::parse("crane").unwrap();
        assert_eq!(word.as_str(), "CRANE");
        assert_eq!(word.to_string(), "CRANE");
        assert_eq!(Word::parse("CrAnE").unwrap(), word);
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        assert_eq!(Word::parse("CRAN"), Err(GuessError::InvalidFormat));
        assert_eq!(Word::parse("CRANES"), Err(GuessError::InvalidFormat));
        assert_eq!(Word::parse("CR4NE"), Err(GuessError::InvalidFormat));
        assert_eq!(Word::parse("CRAN "), Err(GuessError::InvalidFormat));
        assert_eq!(Word::parse(""), Err(GuessError::InvalidFormat));
        assert_eq!(Word::parse("CRÄNE"), Err(GuessError::InvalidFormat));
    }

    #[test]
    fn test_parse_rejects_duplicate_letters() {
        assert_eq!(Word::parse("APPLE"), Err(GuessError::DuplicateLetters));
        assert_eq!(Word::parse("sheep"), Err(GuessError::DuplicateLetters));
        // Case does not hide a repeat
        assert_eq!(Word::parse("Anvia"), Err(GuessError::DuplicateLetters));
    }

    #[test]
    fn test_format_checked_before_duplicates() {
        assert_eq!(Word::parse("AAAAAA"), Err(GuessError::InvalidFormat));
    }

    #[test]
    fn test_letters() {
        let word = Word::parse("ghost").unwrap();
        assert_eq!(word.letters(), ['G', 'H', 'O', 'S', 'T']);
    }
}
