use crate::debug_log;
use crate::error::GuessError;
use crate::game_state::{GameInterface, GameState, Guess, MAX_ATTEMPTS, Status, UserAction};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Guess the secret five-letter word in ten tries
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Use the line-oriented interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,

    /// Seed for the random word choice, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of the default location
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

fn parse_action(line: &str) -> Option<UserAction> {
    let input = line.trim().to_uppercase();
    match input.as_str() {
        "" => None,
        "EXIT" => Some(UserAction::Exit),
        "NEXT" => Some(UserAction::NewGame),
        _ => Some(UserAction::Guess(input)),
    }
}

/// Shows the counts the way the board does: green exact, yellow misplaced,
/// or a single red 0 when nothing matched.
#[must_use]
pub fn format_result(guess: &Guess) -> String {
    match (guess.exact(), guess.misplaced()) {
        (0, 0) => "red: 0".to_string(),
        (exact, 0) => format!("green: {exact}"),
        (0, misplaced) => format!("yellow: {misplaced}"),
        (exact, misplaced) => format!("green: {exact}  yellow: {misplaced}"),
    }
}

#[must_use]
pub fn game_over_message(state: &GameState) -> String {
    match state.status() {
        Status::Won => "Congratulations! You are a genius!".to_string(),
        Status::Lost => format!("Try Again! The correct word was: {}", state.secret()),
        Status::InProgress => String::new(),
    }
}

/// Line-oriented implementation of `GameInterface`.
///
/// Reads one command or guess per line. End of input counts as `exit`.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead> CliInterface<R, io::Stdout> {
    pub fn new(reader: R) -> Self {
        Self::with_writer(reader, io::stdout())
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.writer, "{message}") {
            debug_log!("Failed to write output: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_new_game(&mut self, _state: &GameState) {
        self.say(&format!(
            "New game started. Guess the 5-letter word (no repeated letters), {MAX_ATTEMPTS} attempts."
        ));
    }

    fn read_action(&mut self) -> Option<UserAction> {
        self.say("\nEnter your guess (5 letters, or 'exit' to quit, or 'next' to start a new game):");
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => parse_action(&input),
            Err(e) => {
                debug_log!("Failed to read input: {}", e);
                Some(UserAction::Exit)
            }
        }
    }

    fn display_guess(&mut self, guess: &Guess, state: &GameState) {
        self.say(&format!(
            "{}. {}  {}",
            state.attempts_used(),
            guess.word(),
            format_result(guess)
        ));
        if !state.is_over() {
            self.say(&format!("{} attempts left.", state.attempts_remaining()));
        }
    }

    fn display_rejection(&mut self, error: &GuessError) {
        self.say(&error.to_string());
    }

    fn display_game_over(&mut self, state: &GameState) {
        self.say(&game_over_message(state));
        self.say("Type 'next' to play again or 'exit' to quit.");
    }

    fn display_exit_message(&mut self) {
        self.say("Exiting.");
    }
}
