//! Core domain types for the game
//!
//! Words, input classification, the guess buffer, evaluation and rules.
//! Everything here is pure and knows nothing about terminals or files.

mod attempt;
mod evaluation;
mod input;
mod rules;
mod word;

pub use attempt::{Attempt, AttemptError};
pub use evaluation::{Evaluation, Outcome};
pub use input::{COMMIT_TOKEN, DELETE_TOKEN, Input};
pub use rules::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameRules, RulesError};
pub use word::{Word, WordError, fold_case, fold_letter};
