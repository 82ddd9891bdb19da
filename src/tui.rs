//! TUI (Terminal User Interface) module for the word guessing game
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `EnteringGuess` → (guess accepted) → `EnteringGuess`
//! - `EnteringGuess` → (game won or lost) → `GameOver` → (N) → `EnteringGuess`

use crate::error::GuessError;
use crate::game_state::{GameInterface, GameState, Guess, MAX_ATTEMPTS, Status, UserAction};
use crate::word::WORD_LENGTH;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOSS_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const EXACT_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);
const MISPLACED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const MISS_STYLE: Style = Style::new().fg(Color::White).bg(Color::Red);
const TILE_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

#[derive(Debug, Clone, PartialEq, Eq)]
struct GuessRow {
    word: String,
    exact: usize,
    misplaced: usize,
}

impl From<&Guess> for GuessRow {
    fn from(guess: &Guess) -> Self {
        Self {
            word: guess.word().to_string(),
            exact: guess.exact(),
            misplaced: guess.misplaced(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    /// Game has ended - banner stored in `Board::banner`
    GameOver,
}

/// Everything the screen shows, kept apart from the terminal so input
/// handling can be exercised without one.
#[derive(Debug)]
struct Board {
    guesses: Vec<GuessRow>,
    current_input: String,
    state: TuiState,
    banner: Option<(Status, String)>,
    error_message: String,
    status: String,
}

impl Board {
    fn new() -> Self {
        Self {
            guesses: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            banner: None,
            error_message: String::new(),
            status: "Ready to start".to_string(),
        }
    }

    fn start_game(&mut self) {
        self.guesses.clear();
        self.current_input.clear();
        self.state = TuiState::EnteringGuess;
        self.banner = None;
        self.error_message.clear();
        self.status = format!("New game - Guess the word, {MAX_ATTEMPTS} attempts");
    }

    fn record_guess(&mut self, guess: &Guess, game: &GameState) {
        self.guesses.push(GuessRow::from(guess));
        self.error_message.clear();
        self.status = format!(
            "Attempt {}/{} - {} left",
            game.attempts_used(),
            MAX_ATTEMPTS,
            game.attempts_remaining()
        );
    }

    fn finish(&mut self, game: &GameState) {
        let message = match game.status() {
            Status::Won => "Congratulations! You are a genius!".to_string(),
            Status::Lost => format!("Try Again! The correct word was: {}", game.secret()),
            Status::InProgress => return,
        };
        self.banner = Some((game.status(), message));
        self.state = TuiState::GameOver;
        self.status = "Game Over".to_string();
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        match self.state {
            TuiState::EnteringGuess => self.handle_guess_input(key),
            TuiState::GameOver => Self::handle_game_over_input(key),
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        debug_log!(
            "handle_guess_input() - Processing key: {:?}, current_input: '{}'",
            key.code,
            self.current_input
        );

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if has_modifier_keys(&key) {
                    debug_log!(
                        "handle_guess_input() - Ignoring character with modifier: {:?}",
                        key.modifiers
                    );
                } else if self.current_input.len() < WORD_LENGTH {
                    self.error_message.clear();
                    self.current_input.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.error_message.clear();
                self.current_input.pop();
            }
            KeyCode::Enter if self.current_input.len() == WORD_LENGTH => {
                let guess = std::mem::take(&mut self.current_input);
                info_log!("handle_guess_input() - Submitting guess: '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Enter => {
                self.error_message = GuessError::InvalidFormat.to_string();
            }
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Replacement and control characters show up when the terminal loses focus.
fn is_garbage_char(c: char) -> bool {
    c == '\u{FFFD}' || ((c as u32) < ASCII_CONTROL_CHAR_THRESHOLD && c != '\t' && c != '\n' && c != '\r')
}

fn result_spans(row: &GuessRow) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if row.exact > 0 {
        spans.push(Span::styled(format!(" {} ", row.exact), EXACT_STYLE));
        spans.push(Span::raw(" "));
    }
    if row.misplaced > 0 {
        spans.push(Span::styled(format!(" {} ", row.misplaced), MISPLACED_STYLE));
    }
    if row.exact == 0 && row.misplaced == 0 {
        spans.push(Span::styled(" 0 ", MISS_STYLE));
    }
    spans
}

fn tile_spans(letters: &str) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw("  ")];
    for i in 0..WORD_LENGTH {
        let letter = letters.chars().nth(i).unwrap_or(' ');
        spans.push(Span::styled(format!(" {letter} "), TILE_STYLE));
        spans.push(Span::raw(" "));
    }
    spans
}

/// Terminal host for the game.
///
/// Owns the terminal for its lifetime; raw mode and the alternate screen are
/// restored on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Board,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            board: Board::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let board = &self.board;
        self.terminal.draw(|f| render(f, board))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Wait briefly for a key press. `Ok(None)` when nothing usable arrived.
    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            // Mouse, focus, paste and resize events are redrawn on the next pass
            return Ok(None);
        };
        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }
        if let KeyCode::Char(c) = key.code
            && is_garbage_char(c)
        {
            debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
            return Ok(None);
        }
        Ok(self.board.handle_key(key))
    }
}

impl GameInterface for TuiInterface {
    fn display_new_game(&mut self, _state: &GameState) {
        self.board.start_game();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_guess(&mut self, guess: &Guess, state: &GameState) {
        self.board.record_guess(guess, state);
        self.draw_or_log();
    }

    fn display_rejection(&mut self, error: &GuessError) {
        self.board.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_game_over(&mut self, state: &GameState) {
        self.board.finish(state);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.board.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn render(f: &mut Frame, board: &Board) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(12),    // Game board
            Constraint::Length(5),  // Messages
            Constraint::Length(3),  // Status line
            Constraint::Length(3),  // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_board(f, chunks[1], board);
    render_messages(f, chunks[2], board);
    render_status(f, chunks[3], &board.status);
    render_instructions(f, chunks[4], board.state);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("WORD GUESS GAME")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_board(f: &mut Frame, area: Rect, board: &Board) {
    let block = Block::default()
        .title(format!("Guesses ({}/{MAX_ATTEMPTS})", board.guesses.len()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = board
        .guesses
        .iter()
        .map(|row| {
            let mut spans = tile_spans(&row.word);
            spans.push(Span::raw("  "));
            spans.extend(result_spans(row));
            Line::from(spans)
        })
        .collect();
    if board.state == TuiState::EnteringGuess && board.guesses.len() < MAX_ATTEMPTS {
        lines.push(Line::from(tile_spans(&board.current_input)));
    }

    // Keep the most recent rows visible on short terminals
    let skip = lines.len().saturating_sub(inner.height as usize);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
    f.render_widget(Paragraph::new(visible), inner);
}

fn render_messages(f: &mut Frame, area: Rect, board: &Board) {
    let mut lines = Vec::new();
    if let Some((status, message)) = &board.banner {
        let style = if *status == Status::Won {
            SUCCESS_STYLE
        } else {
            LOSS_STYLE
        };
        lines.push(Line::from(Span::styled(message.clone(), style)));
    }
    if !board.error_message.is_empty() {
        lines.push(Line::from(Span::styled(board.error_message.clone(), ERROR_STYLE)));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Messages").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str) {
    let status_text = if status.is_empty() { "Ready" } else { status };
    let paragraph = Paragraph::new(status_text)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
    let text = match state {
        TuiState::EnteringGuess => {
            "Type your 5-letter guess | BACKSPACE: Delete | ENTER: Submit | ESC: Quit"
        }
        TuiState::GameOver => "N: Play Again | ESC: Quit",
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
