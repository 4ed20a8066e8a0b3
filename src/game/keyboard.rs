//! Per-letter hints for the on-screen keyboard
//!
//! Each key shows the strongest outcome seen for its letter across evaluated rows.

use crate::core::{Attempt, Outcome, fold_letter};
use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone)]
pub struct KeyboardHints {
    hints: FxHashMap<char, Outcome>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an evaluated row into the hints; unevaluated rows are ignored
    pub fn record(&mut self, attempt: &Attempt) {
        for (&letter, &outcome) in attempt.letters().iter().zip(attempt.outcomes()) {
            let key = fold_letter(letter);
            self.hints
                .entry(key)
                .and_modify(|best| {
                    if outcome.rank() > best.rank() {
                        *best = outcome;
                    }
                })
                .or_insert(outcome);
        }
    }

    /// Best known outcome for a letter, case-insensitive
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Outcome> {
        self.hints.get(&fold_letter(letter)).copied()
    }

    pub fn clear(&mut self) {
        self.hints.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}
