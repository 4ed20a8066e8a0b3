//! Game session state machine and the hints derived from it

mod engine;
mod keyboard;

pub use engine::{Game, GameError, GameResult, GameStatus, Notice, Rejection};
pub use keyboard::KeyboardHints;
