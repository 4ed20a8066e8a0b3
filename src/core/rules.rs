//! Game rules
//!
//! Word length and attempt count, fixed at construction.

use thiserror::Error;

pub const DEFAULT_MAX_ATTEMPTS: usize = 6;
pub const DEFAULT_WORD_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("max attempts must be at least 1")]
    NoAttempts,
    #[error("word length must be at least 1")]
    EmptyWords,
}

/// Constraints of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    max_attempts: usize,
    word_length: usize,
}

impl GameRules {
    /// # Errors
    /// Returns `RulesError` if either value is zero.
    pub const fn new(max_attempts: usize, word_length: usize) -> Result<Self, RulesError> {
        if max_attempts == 0 {
            return Err(RulesError::NoAttempts);
        }
        if word_length == 0 {
            return Err(RulesError::EmptyWords);
        }
        Ok(Self {
            max_attempts,
            word_length,
        })
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Whether the row with this ordinal is the last one allowed
    #[inline]
    #[must_use]
    pub const fn is_last_attempt(&self, ordinal: usize) -> bool {
        ordinal + 1 == self.max_attempts
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let rules = GameRules::default();
        assert_eq!(rules.max_attempts(), 6);
        assert_eq!(rules.word_length(), 5);
    }

    #[test]
    fn rejects_zero_values() {
        assert_eq!(GameRules::new(0, 5), Err(RulesError::NoAttempts));
        assert_eq!(GameRules::new(6, 0), Err(RulesError::EmptyWords));
    }

    #[test]
    fn last_attempt() {
        let rules = GameRules::new(3, 5).unwrap();
        assert!(!rules.is_last_attempt(0));
        assert!(!rules.is_last_attempt(1));
        assert!(rules.is_last_attempt(2));
    }
}
