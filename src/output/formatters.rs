//! Formatting utilities for terminal output

use crate::core::{Attempt, Outcome};
use crate::game::KeyboardHints;
use colored::{ColoredString, Colorize};

/// Letter rows of the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Colour a piece of text by outcome; `None` means not evaluated yet
#[must_use]
pub fn paint(text: &str, outcome: Option<Outcome>) -> ColoredString {
    match outcome {
        Some(Outcome::ExactMatch) => text.black().on_green().bold(),
        Some(Outcome::PresentElsewhere) => text.black().on_yellow().bold(),
        Some(Outcome::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Format a row as coloured tiles, padding unfilled positions with `_`
#[must_use]
pub fn format_attempt(attempt: &Attempt, word_length: usize) -> String {
    (0..word_length)
        .map(|i| {
            let letter = attempt
                .letters()
                .get(i)
                .map_or('_', char::to_ascii_uppercase);
            paint(&format!(" {letter} "), attempt.outcomes().get(i).copied()).to_string()
        })
        .collect()
}

/// Format the keyboard rows, each key coloured by its best known hint
#[must_use]
pub fn format_keyboard(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|key| {
                    let label = format!(" {} ", key.to_ascii_uppercase());
                    paint(&label, hints.get(key)).to_string()
                })
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
