use crate::error::{GuessError, WordSourceError};
use crate::scoring::{Score, score_words};
use crate::word::Word;
use crate::wordbank::WordSource;
use crate::{debug_log, info_log};
use rand::Rng;

pub const MAX_ATTEMPTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// An accepted guess together with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    score: Score,
}

impl Guess {
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn exact(&self) -> usize {
        self.score.exact
    }

    #[must_use]
    pub fn misplaced(&self) -> usize {
        self.score.misplaced
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }
}

/// One game session: the secret, the accepted guesses and the outcome.
///
/// The only way to change a game is `submit_guess`; `reset` hands back a
/// brand new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Word,
    history: Vec<Guess>,
    status: Status,
}

impl GameState {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        debug_log!("New game, secret word: {}", secret);
        Self {
            secret,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            status: Status::InProgress,
        }
    }

    /// Validate, score and record a guess.
    ///
    /// Checks run in order: game still in progress, five letters, no repeated
    /// letter, known word. A rejected guess leaves the game as it was.
    ///
    /// # Errors
    ///
    /// Returns the first `GuessError` that applies.
    pub fn submit_guess(&mut self, source: &WordSource, raw: &str) -> Result<Guess, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }
        let word = Word::parse(raw)?;
        if !source.is_valid_guess(word.as_str()) {
            return Err(GuessError::UnknownWord);
        }

        let guess = Guess {
            score: score_words(&self.secret, &word),
            word,
        };
        self.history.push(guess.clone());

        if guess.score.is_solved() {
            self.status = Status::Won;
        } else if self.history.len() >= MAX_ATTEMPTS {
            self.status = Status::Lost;
        }
        info_log!(
            "Guess {}/{}: {} exact={} misplaced={} status={:?}",
            self.history.len(),
            MAX_ATTEMPTS,
            guess.word,
            guess.exact(),
            guess.misplaced(),
            self.status
        );
        Ok(guess)
    }

    /// Start over with a fresh secret and no history.
    ///
    /// # Errors
    ///
    /// Returns `WordSourceError::EmptyWordList` if `source` has no candidates.
    pub fn reset<R: Rng + ?Sized>(
        &self,
        source: &WordSource,
        rng: &mut R,
    ) -> Result<Self, WordSourceError> {
        new_game(source, rng)
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.history.last()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.history.len())
    }
}

/// # Errors
///
/// Returns `WordSourceError::EmptyWordList` if `source` has no candidates.
pub fn new_game<R: Rng + ?Sized>(
    source: &WordSource,
    rng: &mut R,
) -> Result<GameState, WordSourceError> {
    Ok(GameState::new(source.random_word(rng)?))
}

/// Value-passing form of `GameState::submit_guess`.
pub fn submit_guess(
    mut state: GameState,
    source: &WordSource,
    raw: &str,
) -> (GameState, Result<Guess, GuessError>) {
    let result = state.submit_guess(source, raw);
    (state, result)
}

/// Value-passing form of `GameState::reset`.
///
/// # Errors
///
/// Returns `WordSourceError::EmptyWordList` if `source` has no candidates.
pub fn reset_game<R: Rng + ?Sized>(
    state: GameState,
    source: &WordSource,
    rng: &mut R,
) -> Result<GameState, WordSourceError> {
    state.reset(source, rng)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

/// Host side of a game: collects player actions and shows results.
pub trait GameInterface {
    fn display_new_game(&mut self, state: &GameState);
    /// `None` means nothing actionable was entered.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_guess(&mut self, guess: &Guess, state: &GameState);
    fn display_rejection(&mut self, error: &GuessError);
    fn display_game_over(&mut self, state: &GameState);
    fn display_exit_message(&mut self);
}

/// Drive games through `interface` until the player exits.
///
/// # Errors
///
/// Returns `WordSourceError::EmptyWordList` if `source` has no candidates.
pub fn game_loop<R, I>(source: &WordSource, rng: &mut R, interface: &mut I) -> Result<(), WordSourceError>
where
    R: Rng + ?Sized,
    I: GameInterface + ?Sized,
{
    let mut state = new_game(source, rng)?;
    interface.display_new_game(&state);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                return Ok(());
            }
            UserAction::NewGame => {
                state = state.reset(source, rng)?;
                interface.display_new_game(&state);
            }
            UserAction::Guess(raw) => match state.submit_guess(source, &raw) {
                Ok(guess) => {
                    interface.display_guess(&guess, &state);
                    if state.is_over() {
                        interface.display_game_over(&state);
                    }
                }
                Err(e) => {
                    debug_log!("Rejected guess '{}': {}", raw, e);
                    interface.display_rejection(&e);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: [&str; 14] = [
        "CRANE", "TRACE", "GHOST", "TOUCH", "MOULD", "SLATE", "BRICK", "PLUMB", "FJORD",
        "WALTZ", "NYMPH", "QUICK", "VEXED", "SWEPT",
    ];

    fn source() -> WordSource {
        WordSource::from_words(WORDS)
    }

    fn game(secret: &str) -> GameState {
        GameState::new(Word::parse(secret).unwrap())
    }

    #[test]
    fn test_new_game_is_in_progress() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(3);
        let state = new_game(&source, &mut rng).unwrap();
        assert_eq!(state.status(), Status::InProgress);
        assert!(state.history().is_empty());
        assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS);
        assert!(source.is_valid_guess(state.secret().as_str()));
    }

    #[test]
    fn test_new_game_empty_source() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            new_game(&WordSource::default(), &mut rng),
            Err(WordSourceError::EmptyWordList)
        ));
    }

    #[test]
    fn test_accepted_guess_is_scored_and_recorded() {
        let source = source();
        let mut state = game("CRANE");
        let guess = state.submit_guess(&source, "trace").unwrap();
        assert_eq!(guess.word().as_str(), "TRACE");
        assert_eq!((guess.exact(), guess.misplaced()), (3, 1));
        assert_eq!(state.history(), &[guess.clone()]);
        assert_eq!(state.last_guess(), Some(&guess));
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.attempts_used(), 1);
        assert_eq!(state.attempts_remaining(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn test_invalid_format_leaves_state_unchanged() {
        let source = source();
        let mut state = game("CRANE");
        let before = state.clone();
        for raw in ["", "CRAN", "CRANES", "CR4NE", "CRA E"] {
            assert_eq!(state.submit_guess(&source, raw), Err(GuessError::InvalidFormat));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_duplicate_letters_leave_state_unchanged() {
        let source = source();
        let mut state = game("CRANE");
        let before = state.clone();
        assert_eq!(state.submit_guess(&source, "VEXED"), Err(GuessError::DuplicateLetters));
        assert_eq!(state.submit_guess(&source, "sheep"), Err(GuessError::DuplicateLetters));
        assert_eq!(state, before);
    }

    #[test]
    fn test_unknown_word_leaves_state_unchanged() {
        let source = source();
        let mut state = game("CRANE");
        let before = state.clone();
        assert_eq!(state.submit_guess(&source, "ZEBRA"), Err(GuessError::UnknownWord));
        assert_eq!(state, before);
    }

    #[test]
    fn test_winning_guess() {
        let source = source();
        let mut state = game("GHOST");
        state.submit_guess(&source, "CRANE").unwrap();
        let guess = state.submit_guess(&source, "ghost").unwrap();
        assert!(guess.score().is_solved());
        assert_eq!(state.status(), Status::Won);
        assert!(state.is_over());
    }

    #[test]
    fn test_lost_after_max_attempts() {
        let source = source();
        let mut state = game("GHOST");
        let misses = ["CRANE", "TRACE", "MOULD", "SLATE", "BRICK", "PLUMB", "FJORD", "WALTZ", "NYMPH"];
        for raw in misses {
            state.submit_guess(&source, raw).unwrap();
            assert_eq!(state.status(), Status::InProgress);
        }
        state.submit_guess(&source, "QUICK").unwrap();
        assert_eq!(state.status(), Status::Lost);
        assert_eq!(state.attempts_used(), MAX_ATTEMPTS);
        assert_eq!(state.attempts_remaining(), 0);
    }

    #[test]
    fn test_win_on_last_attempt() {
        let source = source();
        let mut state = game("GHOST");
        let misses = ["CRANE", "TRACE", "MOULD", "SLATE", "BRICK", "PLUMB", "FJORD", "WALTZ", "NYMPH"];
        for raw in misses {
            state.submit_guess(&source, raw).unwrap();
        }
        state.submit_guess(&source, "GHOST").unwrap();
        assert_eq!(state.status(), Status::Won);
    }

    #[test]
    fn test_repeated_guess_counts_as_attempt() {
        let source = source();
        let mut state = game("GHOST");
        state.submit_guess(&source, "CRANE").unwrap();
        state.submit_guess(&source, "CRANE").unwrap();
        assert_eq!(state.attempts_used(), 2);
    }

    #[test]
    fn test_guess_after_game_over_rejected() {
        let source = source();
        let mut state = game("GHOST");
        state.submit_guess(&source, "GHOST").unwrap();
        let before = state.clone();
        assert_eq!(state.submit_guess(&source, "CRANE"), Err(GuessError::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_yields_fresh_game() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = game("GHOST");
        state.submit_guess(&source, "GHOST").unwrap();
        let fresh = reset_game(state, &source, &mut rng).unwrap();
        assert_eq!(fresh.status(), Status::InProgress);
        assert!(fresh.history().is_empty());
    }

    #[test]
    fn test_value_passing_submit() {
        let source = source();
        let (state, result) = submit_guess(game("CRANE"), &source, "CRAN");
        assert_eq!(result, Err(GuessError::InvalidFormat));
        assert!(state.history().is_empty());
        let (state, result) = submit_guess(state, &source, "CRANE");
        assert!(result.is_ok());
        assert_eq!(state.status(), Status::Won);
    }

    /// Replays scripted actions and records what the loop reported.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: Vec<Option<UserAction>>,
        new_games: usize,
        guesses: Vec<(String, usize, usize)>,
        rejections: Vec<GuessError>,
        outcomes: Vec<(Status, String)>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            let mut actions = actions;
            actions.reverse();
            Self {
                actions,
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_new_game(&mut self, _state: &GameState) {
            self.new_games += 1;
        }

        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop().unwrap_or(Some(UserAction::Exit))
        }

        fn display_guess(&mut self, guess: &Guess, _state: &GameState) {
            self.guesses
                .push((guess.word().to_string(), guess.exact(), guess.misplaced()));
        }

        fn display_rejection(&mut self, error: &GuessError) {
            self.rejections.push(*error);
        }

        fn display_game_over(&mut self, state: &GameState) {
            self.outcomes.push((state.status(), state.secret().to_string()));
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    #[test]
    fn test_game_loop_win_then_new_game() {
        let source = WordSource::from_words(["GHOST"]);
        let mut rng = StdRng::seed_from_u64(5);
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Guess("apple".to_string())),
            None,
            Some(UserAction::Guess("ghost".to_string())),
            Some(UserAction::Guess("ghost".to_string())),
            Some(UserAction::NewGame),
            Some(UserAction::Exit),
        ]);
        game_loop(&source, &mut rng, &mut interface).unwrap();

        assert_eq!(interface.new_games, 2);
        assert_eq!(interface.guesses, vec![("GHOST".to_string(), 5, 0)]);
        assert_eq!(
            interface.rejections,
            vec![GuessError::DuplicateLetters, GuessError::GameOver]
        );
        assert_eq!(interface.outcomes, vec![(Status::Won, "GHOST".to_string())]);
        assert!(interface.exited);
    }

    #[test]
    fn test_game_loop_empty_source() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut interface = ScriptedInterface::new(vec![]);
        assert!(game_loop(&WordSource::default(), &mut rng, &mut interface).is_err());
        assert_eq!(interface.new_games, 0);
    }
}
