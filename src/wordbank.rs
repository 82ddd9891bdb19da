use crate::error::WordSourceError;
use crate::word::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// The set of words that may be chosen as a secret or accepted as a guess.
///
/// Only words of five distinct letters are kept. Candidates are stored
/// uppercased, sorted and de-duplicated, so a given input list always yields
/// the same source.
#[derive(Debug, Clone, Default)]
pub struct WordSource {
    candidates: Vec<Word>,
}

impl WordSource {
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut candidates: Vec<Word> = words
            .into_iter()
            .filter_map(|word| Word::parse(word.trim()).ok())
            .collect();
        candidates.sort();
        candidates.dedup();
        Self { candidates }
    }

    /// Build a source from newline-delimited text.
    pub fn from_lines(data: &str) -> Self {
        Self::from_words(data.lines())
    }

    /// # Errors
    ///
    /// Returns `WordSourceError::Io` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordSourceError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| WordSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_lines(&data))
    }

    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lines(EMBEDDED_WORDBANK)
    }

    #[must_use]
    pub fn candidate_words(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Pick a candidate uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::EmptyWordList` when there are no candidates.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, WordSourceError> {
        self.candidates
            .choose(rng)
            .cloned()
            .ok_or(WordSourceError::EmptyWordList)
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        let upper = word.to_ascii_uppercase();
        self.candidates
            .binary_search_by(|candidate| candidate.as_str().cmp(upper.as_str()))
            .is_ok()
    }
}
