//! Game engine
//!
//! Owns one game session and advances it one classified input at a time. Every
//! rule violation comes back as a message inside the `GameResult`; nothing here
//! fails past the engine boundary once the game has started.

use crate::core::{Attempt, AttemptError, Evaluation, GameRules, Input, Word, WordError};
use crate::wordlists::{RepositoryError, WordRepository};
use rand::Rng;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Setup errors, raised before a game can start
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] WordError),
    #[error("word list holds {found}-letter words but the rules ask for {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

/// An input the engine refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Game Over!")]
    GameOver,
    #[error("Row is full.")]
    RowFull,
    #[error("Row is empty")]
    RowEmpty,
    #[error("Not enough letters")]
    NotEnoughLetters,
    #[error("Unknown word: {0}")]
    UnknownWord(String),
}

impl From<AttemptError> for Rejection {
    fn from(err: AttemptError) -> Self {
        match err {
            AttemptError::Empty => Self::RowEmpty,
        }
    }
}

/// Why a result carries a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Rejected(Rejection),
    Won,
    Lost { target: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(rejection) => write!(f, "{rejection}"),
            Self::Won => write!(f, "Game Over: You won!"),
            Self::Lost { target } => write!(f, "Game Over: You lost! Target word: {target}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Snapshot produced for every input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    attempt: Option<Attempt>,
    notice: Option<Notice>,
    status: GameStatus,
}

impl GameResult {
    /// The row affected by the input, or none once the game is over
    #[must_use]
    pub const fn attempt(&self) -> Option<&Attempt> {
        self.attempt.as_ref()
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Human-readable message, if any
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.notice.as_ref().map(ToString::to_string)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self.notice, Some(Notice::Rejected(_)))
    }
}

/// A single game session
pub struct Game<'a> {
    dictionary: &'a WordRepository,
    rules: GameRules,
    target: Word,
    active: Option<Attempt>,
    submitted: Vec<Attempt>,
    status: GameStatus,
}

impl<'a> Game<'a> {
    /// Start a game on a random target drawn from the dictionary
    ///
    /// # Errors
    ///
    /// Returns `GameError::LengthMismatch` if the dictionary and rules disagree
    /// on word length, and `GameError::Repository` if the dictionary is empty.
    pub fn new<R: Rng + ?Sized>(
        dictionary: &'a WordRepository,
        rules: GameRules,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        check_lengths(dictionary, rules)?;
        let target = dictionary.pick_random(rng)?.clone();
        Ok(Self::start(dictionary, rules, target))
    }

    /// Start a game on a chosen target
    ///
    /// The target need not be in the dictionary, it only has to have the right length.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidTarget` if the target has the wrong length.
    pub fn with_target(
        dictionary: &'a WordRepository,
        rules: GameRules,
        target: &str,
    ) -> Result<Self, GameError> {
        check_lengths(dictionary, rules)?;
        let target = Word::new(target, rules.word_length())?;
        Ok(Self::start(dictionary, rules, target))
    }

    fn start(dictionary: &'a WordRepository, rules: GameRules, target: Word) -> Self {
        info!(
            max_attempts = rules.max_attempts(),
            word_length = rules.word_length(),
            "new game started"
        );

        Self {
            dictionary,
            rules,
            target,
            active: Some(Attempt::new(0, rules.word_length())),
            submitted: Vec::with_capacity(rules.max_attempts()),
            status: GameStatus::InProgress,
        }
    }

    /// Process one classified input
    pub fn enter(&mut self, input: Input) -> GameResult {
        let Some(active) = self.active.as_mut() else {
            debug!(?input, "input after game over");
            return self.snapshot(Some(Notice::Rejected(Rejection::GameOver)));
        };

        let accepted = match (active.is_full(), input) {
            (true, Input::Commit) => return self.submit(),
            (true, Input::Letter(_)) => Err(Rejection::RowFull),
            (false, Input::Letter(letter)) => {
                active.append(letter);
                Ok(())
            }
            (_, Input::Delete) => active.delete_last().map(drop).map_err(Rejection::from),
            (false, Input::Commit) => Err(Rejection::NotEnoughLetters),
        };

        match accepted {
            Ok(()) => self.snapshot(None),
            Err(rejection) => {
                debug!(%rejection, "input rejected");
                self.snapshot(Some(Notice::Rejected(rejection)))
            }
        }
    }

    /// Classify a raw character and process it
    pub fn enter_char(&mut self, raw: char) -> GameResult {
        self.enter(Input::from(raw))
    }

    /// Evaluate the full active row
    fn submit(&mut self) -> GameResult {
        let Some(mut attempt) = self.active.take() else {
            return self.snapshot(Some(Notice::Rejected(Rejection::GameOver)));
        };

        let word = attempt.word();
        if !self.dictionary.contains(&word) {
            debug!(word = %word, "unknown word submitted");
            self.active = Some(attempt);
            return self.snapshot(Some(Notice::Rejected(Rejection::UnknownWord(word))));
        }

        let evaluation = Evaluation::calculate(&word, &self.target);
        debug!(
            ordinal = attempt.ordinal(),
            evaluation = %evaluation,
            "attempt evaluated"
        );
        attempt.attach_outcomes(evaluation.into_outcomes());

        let guessed = self.target.matches(&word);
        let notice = if guessed {
            self.status = GameStatus::Won;
            Some(Notice::Won)
        } else if self.rules.is_last_attempt(attempt.ordinal()) {
            self.status = GameStatus::Lost;
            Some(Notice::Lost {
                target: self.target.text().to_string(),
            })
        } else {
            self.active = Some(Attempt::new(
                attempt.ordinal() + 1,
                self.rules.word_length(),
            ));
            None
        };

        if self.status.is_over() {
            info!(
                status = ?self.status,
                attempts = attempt.ordinal() + 1,
                "game over"
            );
        }

        self.submitted.push(attempt.clone());
        GameResult {
            attempt: Some(attempt),
            notice,
            status: self.status,
        }
    }

    fn snapshot(&self, notice: Option<Notice>) -> GameResult {
        GameResult {
            attempt: self.active.clone(),
            notice,
            status: self.status,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> GameRules {
        self.rules
    }

    /// The row currently being typed, or none once the game is over
    #[inline]
    #[must_use]
    pub const fn current_attempt(&self) -> Option<&Attempt> {
        self.active.as_ref()
    }

    /// Evaluated rows, oldest first
    #[inline]
    #[must_use]
    pub fn submitted(&self) -> &[Attempt] {
        &self.submitted
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.rules.max_attempts() - self.submitted.len()
    }
}

fn check_lengths(dictionary: &WordRepository, rules: GameRules) -> Result<(), GameError> {
    if dictionary.word_length() == rules.word_length() {
        Ok(())
    } else {
        Err(GameError::LengthMismatch {
            expected: rules.word_length(),
            found: dictionary.word_length(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> WordRepository {
        WordRepository::load(
            "apple\ncrane\nslate\nirate\ncrate\ngrate\nalert\nrobot\nspeed\nalpel",
            5,
        )
        .unwrap()
    }

    fn type_word(game: &mut Game, word: &str) -> GameResult {
        let mut result = None;
        for letter in word.chars() {
            result = Some(game.enter(Input::Letter(letter)));
        }
        result.unwrap()
    }

    fn submit_word(game: &mut Game, word: &str) -> GameResult {
        type_word(game, word);
        game.enter(Input::Commit)
    }

    #[test]
    fn letters_fill_the_active_row() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();

        let result = game.enter(Input::Letter('c'));
        assert_eq!(result.message(), None);
        assert_eq!(result.attempt().unwrap().word(), "c");

        let result = type_word(&mut game, "rane");
        let attempt = result.attempt().unwrap();
        assert!(attempt.is_full());
        assert_eq!(attempt.word(), "crane");
        assert_eq!(attempt.ordinal(), 0);
    }

    #[test]
    fn letter_on_full_row_is_rejected() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();
        type_word(&mut game, "crane");

        let result = game.enter(Input::Letter('x'));
        assert_eq!(result.message().as_deref(), Some("Row is full."));
        assert_eq!(result.notice(), Some(&Notice::Rejected(Rejection::RowFull)));
        assert_eq!(result.attempt().unwrap().word(), "crane");
    }

    #[test]
    fn delete_on_full_row_removes_last_letter() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();
        type_word(&mut game, "crane");

        let result = game.enter(Input::Delete);
        assert_eq!(result.message(), None);
        assert_eq!(result.attempt().unwrap().word(), "cran");
    }

    #[test]
    fn delete_on_empty_row_is_rejected() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();

        let result = game.enter(Input::Delete);
        assert_eq!(result.message().as_deref(), Some("Row is empty"));
        assert!(result.attempt().unwrap().is_empty());
        assert!(result.is_rejected());
    }

    #[test]
    fn delete_reduces_length_by_one() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();
        type_word(&mut game, "cra");

        let result = game.enter(Input::Delete);
        assert_eq!(result.attempt().unwrap().len(), 2);
        assert_eq!(result.message(), None);
    }

    #[test]
    fn commit_on_partial_row_is_rejected() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();
        type_word(&mut game, "cra");

        let result = game.enter(Input::Commit);
        assert_eq!(result.message().as_deref(), Some("Not enough letters"));
        assert_eq!(result.attempt().unwrap().word(), "cra");
        assert!(game.submitted().is_empty());
    }

    #[test]
    fn commit_on_empty_row_is_rejected() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();

        let result = game.enter(Input::Commit);
        assert_eq!(result.message().as_deref(), Some("Not enough letters"));
    }

    #[test]
    fn unknown_word_keeps_row_editable() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();

        let result = submit_word(&mut game, "zzzzz");
        assert_eq!(result.message().as_deref(), Some("Unknown word: zzzzz"));
        assert_eq!(result.attempt().unwrap().word(), "zzzzz");
        assert!(!result.attempt().unwrap().is_evaluated());
        assert_eq!(game.status(), GameStatus::InProgress);

        // Backspace the whole row and try a known word
        for _ in 0..5 {
            game.enter(Input::Delete);
        }
        let result = submit_word(&mut game, "crane");
        assert_eq!(result.message(), None);
        assert!(result.attempt().unwrap().is_evaluated());
        assert_eq!(game.current_attempt().unwrap().ordinal(), 1);
    }

    #[test]
    fn unknown_word_message_keeps_typed_case() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();

        let result = submit_word(&mut game, "QxZzY");
        assert_eq!(result.message().as_deref(), Some("Unknown word: QxZzY"));
    }

    #[test]
    fn dictionary_lookup_is_case_insensitive() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();

        let result = submit_word(&mut game, "CRANE");
        assert!(!result.is_rejected());
        assert!(result.attempt().unwrap().is_evaluated());
    }

    #[test]
    fn multi_char_lowercase_letters_are_not_accepted_as_known_words() {
        let dict = WordRepository::load("i\u{307}abc", 5).unwrap();
        let mut game = Game::with_target(&dict, GameRules::default(), "i\u{307}abc").unwrap();

        let result = submit_word(&mut game, "İabc ");
        assert_eq!(
            result.notice(),
            Some(&Notice::Rejected(Rejection::UnknownWord("İabc ".to_string())))
        );
        assert!(!result.attempt().unwrap().is_evaluated());
    }

    #[test]
    fn non_ascii_letters_evaluate_one_outcome_each() {
        let dict = WordRepository::load("ÉCLAT\néclat", 5).unwrap();
        let mut game = Game::with_target(&dict, GameRules::default(), "éclat").unwrap();

        let result = submit_word(&mut game, "ÉCLAT");
        assert_eq!(result.attempt().unwrap().outcomes(), &[Outcome::ExactMatch; 5]);
        assert_eq!(result.status(), GameStatus::Won);
    }

    #[test]
    fn submission_attaches_outcomes_and_opens_next_row() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();

        let result = submit_word(&mut game, "alpel");
        let attempt = result.attempt().unwrap();
        assert_eq!(attempt.ordinal(), 0);
        assert_eq!(
            attempt.outcomes(),
            &[
                Outcome::ExactMatch,
                Outcome::PresentElsewhere,
                Outcome::ExactMatch,
                Outcome::PresentElsewhere,
                Outcome::PresentElsewhere,
            ]
        );
        assert_eq!(result.message(), None);

        let next = game.current_attempt().unwrap();
        assert_eq!(next.ordinal(), 1);
        assert!(next.is_empty());
        assert_eq!(game.submitted().len(), 1);
        assert_eq!(game.attempts_remaining(), 5);
    }

    #[test]
    fn guessing_target_wins() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();

        let result = submit_word(&mut game, "apple");
        assert_eq!(result.message().as_deref(), Some("Game Over: You won!"));
        assert_eq!(result.status(), GameStatus::Won);
        assert!(result.attempt().unwrap().is_evaluated());
        assert!(game.current_attempt().is_none());
        assert!(game.is_over());
    }

    #[test]
    fn win_is_case_insensitive() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "APPLE").unwrap();

        let result = submit_word(&mut game, "ApPlE");
        assert_eq!(result.notice(), Some(&Notice::Won));
    }

    #[test]
    fn exhausting_attempts_loses() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();

        for (i, word) in ["crane", "slate", "irate", "crate", "grate"]
            .iter()
            .enumerate()
        {
            let result = submit_word(&mut game, word);
            assert_eq!(result.message(), None, "attempt {i} should not end the game");
        }

        let result = submit_word(&mut game, "robot");
        assert_eq!(
            result.message().as_deref(),
            Some("Game Over: You lost! Target word: apple")
        );
        assert_eq!(result.status(), GameStatus::Lost);
        assert_eq!(result.attempt().unwrap().ordinal(), 5);
        assert!(game.current_attempt().is_none());
        assert_eq!(game.attempts_remaining(), 0);
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let dict = dictionary();
        let rules = GameRules::new(2, 5).unwrap();
        let mut game = Game::with_target(&dict, rules, "apple").unwrap();

        submit_word(&mut game, "crane");
        let result = submit_word(&mut game, "apple");
        assert_eq!(result.status(), GameStatus::Won);
    }

    #[test]
    fn every_input_after_game_over_is_rejected() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();
        submit_word(&mut game, "apple");

        for input in [Input::Letter('a'), Input::Commit, Input::Delete] {
            let result = game.enter(input);
            assert_eq!(result.message().as_deref(), Some("Game Over!"));
            assert!(result.attempt().is_none());
            assert_eq!(result.status(), GameStatus::Won);
        }
        assert_eq!(game.submitted().len(), 1);
    }

    #[test]
    fn enter_char_classifies_tokens() {
        let dict = dictionary();
        let mut game = Game::with_target(&dict, GameRules::default(), "apple").unwrap();

        for raw in "apple".chars() {
            game.enter_char(raw);
        }
        game.enter_char('\r');
        game.enter_char('e');
        let result = game.enter_char('\n');
        assert_eq!(result.status(), GameStatus::Won);
    }

    #[test]
    fn random_target_comes_from_dictionary() {
        let dict = dictionary();
        let mut rng = StdRng::seed_from_u64(3);
        let game = Game::new(&dict, GameRules::default(), &mut rng).unwrap();

        assert!(dict.contains(game.target.text()));
        assert_eq!(game.current_attempt().unwrap().ordinal(), 0);
    }

    #[test]
    fn empty_dictionary_fails_setup() {
        let dict = WordRepository::new(5);
        let mut rng = StdRng::seed_from_u64(3);

        assert!(matches!(
            Game::new(&dict, GameRules::default(), &mut rng),
            Err(GameError::Repository(RepositoryError::Empty))
        ));
    }

    #[test]
    fn mismatched_lengths_fail_setup() {
        let dict = dictionary();
        let rules = GameRules::new(6, 4).unwrap();

        assert!(matches!(
            Game::with_target(&dict, rules, "tree"),
            Err(GameError::LengthMismatch {
                expected: 4,
                found: 5
            })
        ));
    }

    #[test]
    fn target_of_wrong_length_fails_setup() {
        let dict = dictionary();
        assert!(matches!(
            Game::with_target(&dict, GameRules::default(), "pear"),
            Err(GameError::InvalidTarget(_))
        ));
    }
}
