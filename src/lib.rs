// Library interface for word-guess
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod scoring;
pub mod tui;
pub mod word;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{GuessError, ScoreError, WordSourceError};
pub use game_state::{
    GameInterface, GameState, Guess, MAX_ATTEMPTS, Status, UserAction, game_loop, new_game,
    reset_game, submit_guess,
};
pub use scoring::{Score, score, score_words};
pub use word::{WORD_LENGTH, Word};
pub use wordbank::{EMBEDDED_WORDBANK, WordSource};
