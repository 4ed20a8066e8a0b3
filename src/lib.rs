//! Wordle Game
//!
//! A Wordle-style word guessing game: a rules engine driven one input at a time,
//! with a terminal UI and a line-based mode on top.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GameRules, Input};
//! use wordle_game::game::{Game, GameStatus};
//! use wordle_game::wordlists::WordRepository;
//!
//! let dictionary = WordRepository::load("apple\ncrane\n", 5).unwrap();
//! let mut game = Game::with_target(&dictionary, GameRules::default(), "apple").unwrap();
//!
//! for letter in "apple".chars() {
//!     game.enter(Input::Letter(letter));
//! }
//! let result = game.enter(Input::Commit);
//!
//! assert_eq!(result.status(), GameStatus::Won);
//! assert_eq!(result.message().as_deref(), Some("Game Over: You won!"));
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
