//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line.

use crate::core::{GameRules, Input};
use crate::game::{Game, GameResult, GameStatus, KeyboardHints};
use crate::output::{print_board, print_notice};
use crate::wordlists::WordRepository;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Replace the active row with `line` and submit it
///
/// Everything goes through the engine: the row is cleared with deletes, each
/// character is entered as a letter, then the row is committed. The first
/// rejected letter stops the line and its result is returned instead.
pub fn enter_line(game: &mut Game, line: &str) -> GameResult {
    while game.current_attempt().is_some_and(|a| !a.is_empty()) {
        game.enter(Input::Delete);
    }

    for letter in line.chars() {
        let result = game.enter(Input::Letter(letter));
        if result.is_rejected() {
            return result;
        }
    }

    game.enter(Input::Commit)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails, or if a new game
/// cannot be started from the dictionary.
pub fn run_simple<R: Rng + ?Sized>(
    dictionary: &WordRepository,
    rules: GameRules,
    rng: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║          Wordle - Simple Mode            ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} attempts.",
        rules.word_length(),
        rules.max_attempts()
    );
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut game = Game::new(dictionary, rules, rng)?;
    let mut hints = KeyboardHints::new();
    let mut played = 0_usize;
    let mut won = 0_usize;

    loop {
        print_board(&game, &hints);

        let Some(line) = get_user_input("Guess")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "new" => {
                game = Game::new(dictionary, rules, rng)?;
                hints.clear();
                println!("\n🔄 New game started!");
                continue;
            }
            _ => {}
        }

        let result = enter_line(&mut game, &line);
        if let Some(attempt) = result.attempt()
            && attempt.is_evaluated()
        {
            hints.record(attempt);
        }
        if let Some(notice) = result.notice() {
            print_notice(notice);
        }

        if result.status().is_over() {
            played += 1;
            if result.status() == GameStatus::Won {
                won += 1;
            }
            print_board(&game, &hints);

            match get_user_input("Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game = Game::new(dictionary, rules, rng)?;
                    hints.clear();
                    println!("\n🔄 New game started!");
                }
                _ => break,
            }
        }
    }

    println!(
        "\n👋 Thanks for playing! Won {} of {} games.\n",
        won.to_string().bright_green().bold(),
        played
    );
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
