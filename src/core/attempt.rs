//! Guess buffer for a single row
//!
//! An Attempt accumulates letters for one turn. Fullness is judged against the
//! configured word length; appending past full is prevented by the game engine,
//! not here.

use super::Outcome;
use thiserror::Error;

/// Errors raised by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttemptError {
    #[error("Row is empty")]
    Empty,
}

/// One guess row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    ordinal: usize,
    word_length: usize,
    letters: Vec<char>,
    outcomes: Vec<Outcome>,
}

impl Attempt {
    /// Create an empty row
    #[must_use]
    pub fn new(ordinal: usize, word_length: usize) -> Self {
        Self {
            ordinal,
            word_length,
            letters: Vec::with_capacity(word_length),
            outcomes: Vec::new(),
        }
    }

    /// Zero-based row index
    #[inline]
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Letters entered so far, as typed
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().collect()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() == self.word_length
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Outcomes attached at submission; empty until then
    #[inline]
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    #[inline]
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        !self.outcomes.is_empty()
    }

    /// Append one letter
    pub(crate) fn append(&mut self, letter: char) {
        self.letters.push(letter);
    }

    /// Remove the last letter
    ///
    /// # Errors
    /// Returns `AttemptError::Empty` if there is nothing to delete.
    pub(crate) fn delete_last(&mut self) -> Result<char, AttemptError> {
        self.letters.pop().ok_or(AttemptError::Empty)
    }

    pub(crate) fn attach_outcomes(&mut self, outcomes: Vec<Outcome>) {
        debug_assert_eq!(outcomes.len(), self.word_length);
        self.outcomes = outcomes;
    }
}
