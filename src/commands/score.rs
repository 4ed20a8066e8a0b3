//! Score command
//!
//! Evaluates one guess against one target without starting a game.

use crate::core::{Evaluation, GameRules, Word, WordError};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub evaluation: Evaluation,
}

/// Score `guess` against `target` under the given rules
///
/// Neither word has to be in a dictionary.
///
/// # Errors
///
/// Returns `WordError` if either word does not have the rules' word length.
pub fn score_guess(guess: &str, target: &str, rules: GameRules) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess, rules.word_length())?;
    let target = Word::new(target, rules.word_length())?;
    let evaluation = Evaluation::calculate(guess.text(), &target);

    Ok(ScoreResult {
        guess,
        target,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_guess_against_target() {
        let result = score_guess("ALPEL", "apple", GameRules::default()).unwrap();
        assert_eq!(result.guess.text(), "alpel");
        assert_eq!(result.evaluation.to_emoji(), "🟩🟨🟩🟨🟨");
        assert_eq!(result.evaluation.count_exact(), 2);
        assert_eq!(result.evaluation.count_present(), 3);
    }

    #[test]
    fn perfect_score() {
        let result = score_guess("crane", "CRANE", GameRules::default()).unwrap();
        assert!(result.evaluation.is_perfect());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(score_guess("pear", "apple", GameRules::default()).is_err());
        assert!(score_guess("apple", "pears!", GameRules::default()).is_err());
    }

    #[test]
    fn follows_configured_length() {
        let rules = GameRules::new(6, 4).unwrap();
        let result = score_guess("tree", "reed", rules).unwrap();
        assert_eq!(result.evaluation.outcomes().len(), 4);
    }
}
