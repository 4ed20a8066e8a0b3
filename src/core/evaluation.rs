//! Guess evaluation
//!
//! Compares a submitted guess against the target word letter by letter:
//! - `ExactMatch`: same letter in the same position
//! - `PresentElsewhere`: letter occurs somewhere in the target
//! - `Absent`: letter does not occur in the target
//!
//! Present letters are NOT limited by how often they occur in the target: a guess
//! with two `l`s against a target with one `l` marks both as present (or exact).

use super::{Word, fold_letter};
use std::fmt;
use tracing::debug;

/// Per-letter feedback for a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Absent,
    ExactMatch,
    PresentElsewhere,
}

impl Outcome {
    /// Strength of the hint, used to keep the most informative outcome per key
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::PresentElsewhere => 1,
            Self::ExactMatch => 2,
        }
    }

    /// Emoji tile for the outcome
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::ExactMatch => '🟩',
            Self::PresentElsewhere => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Outcomes for every position of a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation(Vec<Outcome>);

impl Evaluation {
    /// Evaluate `guess` against `target`
    ///
    /// The guess is lowercased letter by letter before comparison; the target
    /// already is. There is exactly one outcome per guess letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, Outcome, Word};
    ///
    /// let target = Word::new("apple", 5).unwrap();
    /// let evaluation = Evaluation::calculate("ALPEL", &target);
    ///
    /// assert_eq!(
    ///     evaluation.outcomes(),
    ///     &[
    ///         Outcome::ExactMatch,
    ///         Outcome::PresentElsewhere,
    ///         Outcome::ExactMatch,
    ///         Outcome::PresentElsewhere,
    ///         Outcome::PresentElsewhere,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, target: &Word) -> Self {
        debug!(guess = %guess, "evaluating guess");

        let outcomes = guess
            .chars()
            .map(fold_letter)
            .enumerate()
            .map(|(i, letter)| {
                if target.char_at(i) == Some(letter) {
                    Outcome::ExactMatch
                } else if target.has_letter(letter) {
                    Outcome::PresentElsewhere
                } else {
                    Outcome::Absent
                }
            })
            .collect();

        Self(outcomes)
    }

    /// Outcomes in letter order
    #[inline]
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.0
    }

    /// Check if every letter is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&o| o == Outcome::ExactMatch)
    }

    /// Count the number of exact matches
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(Outcome::ExactMatch)
    }

    /// Count the number of letters present elsewhere
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Outcome::PresentElsewhere)
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.0.iter().filter(|&&o| o == outcome).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|o| o.emoji()).collect()
    }

    /// Take the outcomes out of the evaluation
    #[must_use]
    pub fn into_outcomes(self) -> Vec<Outcome> {
        self.0
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
