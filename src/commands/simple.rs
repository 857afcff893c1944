//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Anything that is not a `:` command is
//! taken as a guess.

use crate::game::{Difficulty, GameSession};
use crate::hints::{HintJob, HintOutcome};
use crate::output::{print_board, print_outcome};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidate words listed by `:candidates` before truncating
const CANDIDATE_LIST_LIMIT: usize = 20;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Guess(String),
    BestGuess,
    Letter,
    Candidates,
    NewGame,
    Mode(Difficulty),
    Help,
    Quit,
    Invalid(String),
}

/// Interpret one line of input
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return Input::Guess(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("hint" | "h"), None) => Input::BestGuess,
        (Some("letter" | "l"), None) => Input::Letter,
        (Some("candidates" | "c"), None) => Input::Candidates,
        (Some("new" | "n"), None) => Input::NewGame,
        (Some("help" | "?"), None) => Input::Help,
        (Some("quit" | "q" | "exit"), None) => Input::Quit,
        (Some("mode" | "m"), Some(name)) => match name.parse() {
            Ok(difficulty) => Input::Mode(difficulty),
            Err(e) => Input::Invalid(e.to_string()),
        },
        _ => Input::Invalid(format!("unknown command ':{command}', try :help")),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_simple(session: &mut GameSession) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Five Letters - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let stdin = io::stdin();
    play_lines(session, stdin.lock())
}

/// Drive a session from any line source until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn play_lines<R: BufRead>(session: &mut GameSession, mut input: R) -> Result<()> {
    let mut line = String::new();
    print_board(session);

    loop {
        print!(
            "{} [{} left] > ",
            session.difficulty().to_string().bright_cyan(),
            session.attempts_remaining()
        );
        io::stdout().flush().context("failed to flush stdout")?;

        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            println!();
            return Ok(());
        }

        match parse_input(&line) {
            Input::Guess(guess) if guess.is_empty() => {}
            Input::Guess(guess) => match session.submit_guess(&guess) {
                Ok(_) => {
                    print_board(session);
                    if session.state().is_over() {
                        print_outcome(session);
                        println!("\nType :new to play again or :quit to exit.\n");
                    }
                }
                Err(rejection) => println!("{} {rejection}", "❌".red()),
            },
            Input::BestGuess => {
                if session.hint_availability().best_next_guess {
                    let best = session.best_next_guess();
                    println!("💡 Try: {}", best.to_string().bright_yellow().bold());
                    if let Some(outcome) = dictionary_hint(session) {
                        println!(
                            "   Dictionary pick: {} ({} matching words)",
                            outcome.best.to_string().bright_yellow(),
                            outcome.remaining
                        );
                    }
                } else {
                    println!("{}", "Best-guess hint is not available right now".yellow());
                }
            }
            Input::Letter => {
                if session.hint_availability().one_letter
                    && let Some(hint) = session.one_letter_hint()
                {
                    println!("🔍 {}", hint.to_string().bright_yellow().bold());
                } else {
                    println!("{}", "Letter hint is not available right now".yellow());
                }
            }
            Input::Candidates => print_candidates(session),
            Input::NewGame => {
                session.new_game();
                println!("\n🔄 New game started!");
                print_board(session);
            }
            Input::Mode(difficulty) => {
                session.set_difficulty(difficulty);
                println!("\n🔄 New {difficulty} game started!");
                print_board(session);
            }
            Input::Help => print_help(),
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::Invalid(message) => println!("{} {message}", "❌".red()),
        }
    }
}

/// Dictionary-wide suggestion for the current history, computed in place
#[must_use]
pub fn dictionary_hint(session: &GameSession) -> Option<HintOutcome> {
    HintJob::new(session).run()
}

fn print_candidates(session: &GameSession) {
    let candidates = session.candidates();
    println!("{} possible solutions", candidates.len());
    let shown: Vec<String> = candidates
        .iter()
        .take(CANDIDATE_LIST_LIMIT)
        .map(|word| word.text().to_uppercase())
        .collect();
    if !shown.is_empty() {
        println!("  {}", shown.join(" "));
    }
    if candidates.len() > CANDIDATE_LIST_LIMIT {
        println!("  ...");
    }
}

fn print_help() {
    println!("Type a five-letter word to guess. Commands:");
    println!("  :hint        best next guess");
    println!("  :letter      reveal one letter (once per game)");
    println!("  :candidates  list possible solutions");
    println!("  :new         start a new game");
    println!("  :mode <m>    switch to easy, medium, hard or expert");
    println!("  :quit        exit\n");
}
