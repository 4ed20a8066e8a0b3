//! TUI application state and logic

use crate::core::{Attempt, COMMIT_TOKEN, DELETE_TOKEN, GameRules, Input, fold_letter};
use crate::game::{Game, GameError, GameResult, GameStatus, KeyboardHints, Notice};
use crate::wordlists::WordRepository;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a WordRepository,
    pub rules: GameRules,
    pub game: Game<'a>,
    /// Last known snapshot of every row, indexed by ordinal
    pub board: Vec<Attempt>,
    pub hints: KeyboardHints,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
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
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of attempts used (index 0 = first attempt)
    pub guess_distribution: Vec<usize>,
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
    /// # Errors
    ///
    /// Returns `GameError` if the first game cannot be started.
    pub fn new(
        dictionary: &'a WordRepository,
        rules: GameRules,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let game = Game::new(dictionary, rules, &mut rng)?;

        Ok(Self {
            dictionary,
            rules,
            game,
            board: empty_board(rules),
            hints: KeyboardHints::new(),
            messages: vec![Message {
                text: format!(
                    "Guess the {}-letter word in {} attempts!",
                    rules.word_length(),
                    rules.max_attempts()
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                guess_distribution: vec![0; rules.max_attempts()],
                ..Statistics::default()
            },
            should_quit: false,
            rng,
        })
    }

    /// Feed one input to the game and render its result into the app state
    pub fn handle_input(&mut self, input: Input) {
        let result = self.game.enter(input);
        self.apply(&result);
    }

    fn apply(&mut self, result: &GameResult) {
        if let Some(attempt) = result.attempt() {
            if let Some(row) = self.board.get_mut(attempt.ordinal()) {
                row.clone_from(attempt);
            }
            if attempt.is_evaluated() {
                self.hints.record(attempt);
            }
        }

        let Some(notice) = result.notice() else {
            return;
        };

        match notice {
            Notice::Rejected(rejection) => {
                self.add_message(&rejection.to_string(), MessageStyle::Error);
            }
            Notice::Won | Notice::Lost { .. } => {
                self.record_game(result.status());
                let style = if matches!(notice, Notice::Won) {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&notice.to_string(), style);
                self.add_message("Press Ctrl+N for a new game or Esc to quit.", MessageStyle::Info);
            }
        }
    }

    fn record_game(&mut self, status: GameStatus) {
        self.stats.total_games += 1;
        if status == GameStatus::Won {
            self.stats.games_won += 1;
            let used = self.game.submitted().len();
            if let Some(slot) = self.stats.guess_distribution.get_mut(used.saturating_sub(1)) {
                *slot += 1;
            }
        }
    }

    pub fn new_game(&mut self) {
        match Game::new(self.dictionary, self.rules, &mut self.rng) {
            Ok(game) => {
                self.game = game;
                self.board = empty_board(self.rules);
                self.hints.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => {
                warn!(error = %err, "failed to start a new game");
                self.add_message(&format!("Cannot start a new game: {err}"), MessageStyle::Error);
            }
        }
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

    /// Ordinal of the row being typed, if the game is still running
    #[must_use]
    pub fn active_row(&self) -> Option<usize> {
        self.game.current_attempt().map(Attempt::ordinal)
    }

    /// React to a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            code => {
                if let Some(input) = key_to_input(code) {
                    self.handle_input(input);
                }
            }
        }
    }
}

fn empty_board(rules: GameRules) -> Vec<Attempt> {
    (0..rules.max_attempts())
        .map(|ordinal| Attempt::new(ordinal, rules.word_length()))
        .collect()
}

/// Map a terminal key onto the game's input tokens
#[must_use]
pub fn key_to_input(code: KeyCode) -> Option<Input> {
    match code {
        KeyCode::Enter => Some(Input::from(COMMIT_TOKEN)),
        KeyCode::Backspace => Some(Input::from(DELETE_TOKEN)),
        KeyCode::Char(c) if c.is_alphabetic() => Some(Input::from(fold_letter(c))),
        _ => None,
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
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
