//! TUI application state and logic

use crate::core::{Game, GameError, GameStatus, GuessOutcome, Turn};
use crate::hints::possible_matches;
use crate::wordlists::{WordList, WordListError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Longest line the input box accepts
const MAX_INPUT: usize = 32;

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Matches from the most recent hint request in this game
    pub hints: Option<Vec<&'a str>>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub best_score: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Start a session with a secret drawn from `words`
    ///
    /// # Errors
    ///
    /// Returns an error if `words` holds no usable secret word.
    pub fn new(words: &'a WordList, mut rng: StdRng) -> Result<Self, WordListError> {
        let secret = words.choose_secret(&mut rng)?;
        let mut app = Self {
            words,
            game: Game::new(secret),
            input_buffer: String::new(),
            messages: Vec::new(),
            hints: None,
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        };
        app.greet();
        Ok(app)
    }

    fn greet(&mut self) {
        let length = self.game.secret().len();
        self.add_message(
            &format!("I am thinking of a word that is {length} letters long."),
            MessageStyle::Info,
        );
        self.add_message(
            "Type a letter and press Enter. Type * for a hint.",
            MessageStyle::Info,
        );
    }

    pub fn new_game(&mut self) {
        match self.words.choose_secret(&mut self.rng) {
            Ok(secret) => {
                debug!(length = secret.len(), "new TUI game");
                self.game = Game::new(secret);
                self.hints = None;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.greet();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Submit whatever is in the input box as one guess
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&input) {
            Ok(turn) => self.report_turn(&turn),
            Err(GameError::Finished) => {
                self.add_message("The game is over. Press 'n' for a new game.", MessageStyle::Error);
                return;
            }
        }

        match self.game.status() {
            GameStatus::Won => self.finish(true),
            GameStatus::Lost => self.finish(false),
            GameStatus::Playing => {}
        }
    }

    fn report_turn(&mut self, turn: &Turn) {
        match &turn.outcome {
            GuessOutcome::Solved => {}
            GuessOutcome::HintRequested => {
                let matches = possible_matches(&self.game.pattern(), self.words.words());
                let text = if matches.is_empty() {
                    "No matches found".to_string()
                } else {
                    format!("{} possible word matches", matches.len())
                };
                self.add_message(&text, MessageStyle::Info);
                self.hints = Some(matches);
            }
            GuessOutcome::Duplicate {
                letter,
                warnings_left,
            } => self.add_message(
                &format!(
                    "You have guessed this letter before: {letter}. You have {warnings_left} warnings left."
                ),
                MessageStyle::Warning,
            ),
            GuessOutcome::NotALetter {
                input,
                warnings_left,
            } => self.add_message(
                &format!(
                    "Oops, that is not a letter: {input}. You have {warnings_left} warnings left."
                ),
                MessageStyle::Warning,
            ),
            GuessOutcome::Hit { letter } => {
                self.add_message(&format!("Good guess! ({letter})"), MessageStyle::Success);
            }
            GuessOutcome::Miss { letter, lives_lost } => self.add_message(
                &format!(
                    "Oops, the letter \"{letter}\" is not in the word! You lose {lives_lost} {}.",
                    if *lives_lost == 1 { "guess" } else { "guesses" }
                ),
                MessageStyle::Error,
            ),
        }

        if turn.warning_penalty {
            self.add_message(
                "You have no warnings left, so you lose one guess.",
                MessageStyle::Error,
            );
        }
    }

    fn finish(&mut self, won: bool) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;
        let secret = self.game.secret().to_string();

        if won {
            self.stats.games_won += 1;
            let score = self.game.score().unwrap_or(0);
            self.stats.best_score = self.stats.best_score.max(Some(score));
            self.add_message(
                &format!("You guessed the word! {secret} (score {score})"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(&format!("Sorry the word was: {secret}."), MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);

        info!(won, rounds = self.game.rounds(), "TUI game finished");
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if self.input_buffer.len() < MAX_INPUT {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal before reporting any error from the game loop
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, F>(terminal: &mut Terminal<B>, mut app: App, mut next_event: F) -> Result<()>
where
    B: ratatui::backend::Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
