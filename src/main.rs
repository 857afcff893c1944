//! Five Letters - CLI
//!
//! Five-letter word puzzle with a TUI, a line-based mode and a self-play simulator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use five_letters::{
    commands::{run_simple, run_simulation},
    config::GameConfig,
    core::Word,
    game::{Difficulty, GameSession},
    interactive::{App, run_tui},
    logging,
    output::print_simulation_report,
    wordlists::{ALLOWED, ANSWERS, Lexicon, loader::load_from_file, loader::words_from_slice},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "five_letters",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (default), medium, hard, expert
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: Difficulty,

    /// Accepted guesses: 'embedded' (default) or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Solutions pool: 'embedded' (default) or path to a word file
    #[arg(short = 's', long, global = true, default_value = "embedded")]
    solutions: String,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter such as 'debug' or 'five_letters=trace' (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Play many games automatically using the hint engine
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Load one word list from the `embedded` keyword or a file path
fn load_words(source: &str, embedded: &[&str]) -> Result<Vec<Word>> {
    match source {
        "embedded" => Ok(words_from_slice(embedded)),
        path => load_from_file(path),
    }
}

/// Build the lexicon from the -w and -s flags
fn load_lexicon(wordlist: &str, solutions: &str) -> Result<Lexicon> {
    let accepted = load_words(wordlist, ALLOWED)?;
    let solutions = load_words(solutions, ANSWERS)?;
    Lexicon::new(accepted, solutions).context("unusable word lists")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let lexicon = Arc::new(load_lexicon(&cli.wordlist, &cli.solutions)?);
    info!(
        accepted = lexicon.accepted_words().len(),
        solutions = lexicon.solutions().len(),
        "word lists loaded"
    );

    let config = GameConfig {
        difficulty: cli.difficulty,
        seed: cli.seed,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(GameSession::new(lexicon, &config))),
        Commands::Simple => run_simple(&mut GameSession::new(lexicon, &config)),
        Commands::Simulate { games, quiet } => {
            let seed = config.seed.unwrap_or_else(rand::random);
            println!("Simulating {games} {} games (seed {seed})...", config.difficulty);
            let report = run_simulation(&lexicon, config.difficulty, games, seed, quiet);
            print_simulation_report(&report);
            Ok(())
        }
    }
}
