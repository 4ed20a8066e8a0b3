//! Word lists for the game
//!
//! The word repository plus an embedded default list compiled into the binary.

mod embedded;
pub mod loader;
mod repository;

pub use embedded::{WORDS, WORDS_COUNT};
pub use repository::{RepositoryError, WordRepository};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        // All entries should be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.chars().count(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
