//! Wordle Game - CLI
//!
//! Word guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{run_simple, score_guess},
    core::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameRules},
    output::print_score_result,
    wordlists::{
        WordRepository,
        loader::{embedded_repository, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in a limited number of attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, five-letter words) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of attempts per game
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Number of letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Seed for picking target words (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let rules = GameRules::new(cli.attempts, cli.length).context("invalid game rules")?;

    match command {
        Commands::Play => {
            let dictionary = load_dictionary(&cli.wordlist, rules)?;
            run_play_command(&dictionary, rules, make_rng(cli.seed))
        }
        Commands::Simple => {
            let dictionary = load_dictionary(&cli.wordlist, rules)?;
            run_simple(&dictionary, rules, &mut make_rng(cli.seed))
        }
        Commands::Score { guess, target } => run_score_command(&guess, &target, rules),
    }
}

/// Set up tracing
///
/// Logs go to `log_file` when given. Without one they go to stderr, except in TUI
/// mode where stderr would corrupt the screen.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
    }

    Ok(())
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str, rules: GameRules) -> Result<WordRepository> {
    let dictionary = match wordlist {
        "embedded" => embedded_repository(rules.word_length()).with_context(|| {
            format!(
                "the embedded word list only holds 5-letter words, not {}",
                rules.word_length()
            )
        })?,
        path => load_from_file(path, rules.word_length())
            .with_context(|| format!("failed to load word list from {path}"))?,
    };

    anyhow::ensure!(!dictionary.is_empty(), "word list '{wordlist}' has no words");
    Ok(dictionary)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_play_command(dictionary: &WordRepository, rules: GameRules, rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(dictionary, rules, rng)?;
    run_tui(app)
}

fn run_score_command(guess: &str, target: &str, rules: GameRules) -> Result<()> {
    let result = score_guess(guess, target, rules)?;
    print_score_result(&result);
    Ok(())
}
