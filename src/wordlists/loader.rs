//! Word list loading utilities
//!
//! Builds repositories from files or from the embedded list.

use super::embedded::WORDS;
use super::repository::{RepositoryError, WordRepository};
use std::fs;
use std::path::Path;

/// Load a repository from a newline-delimited file
///
/// # Errors
///
/// Returns `RepositoryError::Io` if the file cannot be read and
/// `RepositoryError::InvalidEntry` if any line has the wrong length.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let repo = load_from_file("data/words5.txt", 5).unwrap();
/// println!("Loaded {} words", repo.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<WordRepository, RepositoryError> {
    let content = fs::read_to_string(path)?;
    WordRepository::load(&content, word_length)
}

/// Build a repository from the embedded five-letter list
///
/// # Errors
///
/// Returns `RepositoryError::InvalidEntry` if `word_length` is not 5.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::embedded_repository;
/// use wordle_game::wordlists::WORDS_COUNT;
///
/// let repo = embedded_repository(5).unwrap();
/// assert_eq!(repo.len(), WORDS_COUNT);
/// ```
pub fn embedded_repository(word_length: usize) -> Result<WordRepository, RepositoryError> {
    WordRepository::from_entries(WORDS.iter().copied(), word_length)
}
