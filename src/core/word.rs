//! Word representation
//!
//! A Word is a normalized (trimmed, lowercased) sequence of exactly N letters.
//! Lowercasing is done letter by letter and never changes the letter count.

use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// A fixed-length game word
///
/// Stored lowercased so that equality, hashing and lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl Word {
    /// Create a new Word of `length` letters from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the normalized text does not have
    /// exactly `length` characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new(" Apple\n", 5).unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("too long", 5).is_err());
    /// ```
    pub fn new(text: &str, length: usize) -> Result<Self, WordError> {
        let text = fold_case(text.trim());

        let actual = text.chars().count();
        if actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false for a validated word of non-zero length
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a position, if there is one
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.text.chars().nth(position)
    }

    /// Check if the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.text.contains(letter)
    }

    /// Case-insensitive comparison against typed text
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.text == fold_case(text)
    }
}

/// Lowercase a single letter
///
/// Letters whose lowercase form spans several characters (such as `'İ'`) are
/// left unchanged so that one letter always maps to one letter.
#[must_use]
pub fn fold_letter(letter: char) -> char {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

/// Lowercase text letter by letter, keeping its length in letters
///
/// # Examples
/// ```
/// use wordle_game::core::fold_case;
///
/// assert_eq!(fold_case("CrAnE"), "crane");
/// assert_eq!(fold_case("İabc").chars().count(), 4);
/// ```
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().map(fold_letter).collect()
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
