//! Word repository
//!
//! The set of valid words: membership tests for submitted guesses and uniform
//! random selection of the target. Read-only once loaded.

use crate::core::{Word, WordError, fold_case};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use thiserror::Error;
use tracing::debug;

/// Errors raised while building or sampling a repository
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Invalid entry on line {line}: '{entry}' ({source})")]
    InvalidEntry {
        line: usize,
        entry: String,
        source: WordError,
    },
    #[error("word list is empty")]
    Empty,
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
}

/// Deduplicated collection of words of a single length
#[derive(Debug, Clone)]
pub struct WordRepository {
    word_length: usize,
    entries: FxHashSet<Word>,
    // Insertion order, for uniform indexed sampling
    order: Vec<Word>,
}

impl WordRepository {
    /// Create an empty repository for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            entries: FxHashSet::default(),
            order: Vec::new(),
        }
    }

    /// Parse newline-delimited text into a repository
    ///
    /// Each line is trimmed and lowercased. Any line of the wrong length,
    /// blank lines included, fails the whole load.
    ///
    /// # Errors
    /// Returns `RepositoryError::InvalidEntry` for the first entry whose length
    /// differs from `word_length`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordRepository;
    ///
    /// let repo = WordRepository::load("apple\nCRANE\n", 5).unwrap();
    /// assert!(repo.contains("crane"));
    /// assert!(repo.contains("Apple"));
    /// assert!(WordRepository::load("apple\npear\n", 5).is_err());
    /// ```
    pub fn load(raw_text: &str, word_length: usize) -> Result<Self, RepositoryError> {
        let repo = Self::from_entries(raw_text.lines(), word_length)?;
        debug!(entries = repo.len(), word_length, "loaded word list");
        Ok(repo)
    }

    /// Build a repository from individual entries
    ///
    /// # Errors
    /// Returns `RepositoryError::InvalidEntry` for the first entry of the wrong length.
    pub fn from_entries<'s, I>(entries: I, word_length: usize) -> Result<Self, RepositoryError>
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut repo = Self::new(word_length);

        for (index, entry) in entries.into_iter().enumerate() {
            repo.add(entry)
                .map_err(|source| RepositoryError::InvalidEntry {
                    line: index + 1,
                    entry: entry.trim().to_string(),
                    source,
                })?;
        }

        Ok(repo)
    }

    /// Add one entry; adding an existing word is a no-op
    ///
    /// # Errors
    /// Returns `WordError` if the entry has the wrong length.
    pub fn add(&mut self, entry: &str) -> Result<(), WordError> {
        let word = Word::new(entry, self.word_length)?;
        if self.entries.insert(word.clone()) {
            self.order.push(word);
        }
        Ok(())
    }

    /// Case-insensitive membership test
    ///
    /// The word is lowercased letter by letter but not trimmed, so surrounding
    /// whitespace counts as letters.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(fold_case(word).as_str())
    }

    /// Pick a uniformly random entry
    ///
    /// # Errors
    /// Returns `RepositoryError::Empty` if there are no entries.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, RepositoryError> {
        self.order.choose(rng).ok_or(RepositoryError::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
