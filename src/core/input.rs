//! Input classification
//!
//! Every raw input unit is exactly one of a letter, a commit or a delete.

/// Reserved token submitting the current row
pub const COMMIT_TOKEN: char = '\n';

/// Reserved token deleting the last letter of the current row
pub const DELETE_TOKEN: char = '\r';

/// A classified input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Commit,
    Delete,
}

impl Input {
    /// Classify one raw input unit
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Input;
    ///
    /// assert_eq!(Input::classify('a'), Input::Letter('a'));
    /// assert_eq!(Input::classify('\n'), Input::Commit);
    /// assert_eq!(Input::classify('\r'), Input::Delete);
    /// ```
    #[must_use]
    pub const fn classify(raw: char) -> Self {
        match raw {
            COMMIT_TOKEN => Self::Commit,
            DELETE_TOKEN => Self::Delete,
            letter => Self::Letter(letter),
        }
    }
}

impl From<char> for Input {
    fn from(raw: char) -> Self {
        Self::classify(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_tokens() {
        assert_eq!(Input::classify(COMMIT_TOKEN), Input::Commit);
        assert_eq!(Input::classify(DELETE_TOKEN), Input::Delete);
    }

    #[test]
    fn everything_else_is_a_letter() {
        for raw in ['a', 'Z', '5', ' ', '!', 'é'] {
            assert_eq!(Input::classify(raw), Input::Letter(raw));
        }
    }

    #[test]
    fn from_char() {
        let input: Input = 'x'.into();
        assert_eq!(input, Input::Letter('x'));
    }
}
