//! Display functions for game and command results

use super::formatters::{create_progress_bar, format_attempt, format_keyboard};
use crate::commands::ScoreResult;
use crate::core::{Attempt, GameRules};
use crate::game::{Game, KeyboardHints, Notice};
use colored::Colorize;

/// Print the evaluated rows, the row being typed and the empty rows left
pub fn print_board(game: &Game, hints: &KeyboardHints) {
    let rules = game.rules();
    let word_length = rules.word_length();

    println!("\n{}", "─".repeat(40).cyan());
    for attempt in game.submitted() {
        println!("  {}", format_attempt(attempt, word_length));
    }

    let mut drawn = game.submitted().len();
    if let Some(current) = game.current_attempt() {
        println!("  {}", format_attempt(current, word_length));
        drawn += 1;
    }
    for ordinal in drawn..rules.max_attempts() {
        println!("  {}", format_attempt(&Attempt::new(ordinal, word_length), word_length));
    }

    println!();
    for row in format_keyboard(hints) {
        println!("  {row}");
    }
    print_attempts_used(game.submitted().len(), rules);
    println!("{}", "─".repeat(40).cyan());
}

fn print_attempts_used(used: usize, rules: GameRules) {
    println!(
        "\n  Attempts: [{}] {used}/{}",
        create_progress_bar(used, rules.max_attempts(), rules.max_attempts()),
        rules.max_attempts()
    );
}

/// Print the message attached to a result
pub fn print_notice(notice: &Notice) {
    match notice {
        Notice::Rejected(rejection) => println!("❌ {}", rejection.to_string().red()),
        Notice::Won => println!("\n🎉 {}", notice.to_string().bright_green().bold()),
        Notice::Lost { .. } => println!("\n💀 {}", notice.to_string().bright_red().bold()),
    }
}

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess:  {}",
        result.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("Target: {}", result.target.text().to_uppercase().bold());
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", result.evaluation.to_emoji());
    println!(
        "\n  Exact:   {}",
        result.evaluation.count_exact().to_string().green()
    );
    println!(
        "  Present: {}",
        result.evaluation.count_present().to_string().yellow()
    );

    if result.evaluation.is_perfect() {
        println!("\n{}", "✅ Perfect match!".green().bold());
    }
}
