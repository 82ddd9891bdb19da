use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a submitted guess is rejected.
///
/// All of these are shown to the player; the game is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess must be exactly 5 letters")]
    InvalidFormat,

    #[error("Duplicate letters not allowed")]
    DuplicateLetters,

    #[error("Word does not exist")]
    UnknownWord,

    #[error("The game is over, start a new game")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("words must be exactly 5 letters (secret: {secret}, guess: {guess})")]
    InvalidLength { secret: usize, guess: usize },
}

/// Errors raised while building or drawing from a word source.
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("word list has no usable 5-letter words")]
    EmptyWordList,

    #[error("failed to read word list from '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
