use crate::error::ScoreError;
use crate::word::{WORD_LENGTH, Word};

/// Result of comparing a guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub exact: usize,
    pub misplaced: usize,
}

impl Score {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.exact == WORD_LENGTH
    }
}

/// Score a raw guess against a raw secret.
///
/// Both inputs must be 5 characters long. Letters are compared as-is, so
/// callers are expected to normalise case beforehand.
///
/// # Errors
///
/// Returns `ScoreError::InvalidLength` if either word is not 5 characters.
pub fn score(secret: &str, guess: &str) -> Result<Score, ScoreError> {
    let secret_chars: Vec<char> = secret.chars().collect();
    let guess_chars: Vec<char> = guess.chars().collect();
    let (Ok(secret_chars), Ok(guess_chars)) = (
        <[char; WORD_LENGTH]>::try_from(secret_chars.as_slice()),
        <[char; WORD_LENGTH]>::try_from(guess_chars.as_slice()),
    ) else {
        return Err(ScoreError::InvalidLength {
            secret: secret.chars().count(),
            guess: guess.chars().count(),
        });
    };
    Ok(score_letters(secret_chars, guess_chars))
}

#[must_use]
pub fn score_words(secret: &Word, guess: &Word) -> Score {
    score_letters(secret.letters(), guess.letters())
}

fn score_letters(secret: [char; WORD_LENGTH], guess: [char; WORD_LENGTH]) -> Score {
    let mut secret_slots: [Option<char>; WORD_LENGTH] = secret.map(Some);
    let mut guess_slots: [Option<char>; WORD_LENGTH] = guess.map(Some);
    let mut score = Score::default();

    // First pass: exact matches consume both positions
    for i in 0..WORD_LENGTH {
        if guess[i] == secret[i] {
            score.exact += 1;
            secret_slots[i] = None;
            guess_slots[i] = None;
        }
    }
    // Second pass: each remaining secret letter is credited at most once
    for letter in guess_slots.into_iter().flatten() {
        if let Some(pos) = secret_slots.iter().position(|&c| c == Some(letter)) {
            score.misplaced += 1;
            secret_slots[pos] = None;
        }
    }
    score
}
