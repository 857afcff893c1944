//! Display functions for command results

use super::formatters::{colored_attempt, create_progress_bar, keyboard_line};
use crate::commands::SimulationReport;
use crate::core::MAX_ATTEMPTS;
use crate::game::{GameSession, GameState};
use colored::Colorize;

/// Print every guess so far, the empty rows and the keyboard
pub fn print_board(session: &GameSession) {
    println!();
    for attempt in session.history() {
        println!("  {}", colored_attempt(attempt));
    }
    for _ in session.history().len()..MAX_ATTEMPTS {
        println!("  {}", " _ ".repeat(5).bright_black());
    }
    println!("\n  {}\n", keyboard_line(session.knowledge()));
}

/// Print the end-of-game banner
pub fn print_outcome(session: &GameSession) {
    let solution = session.solution().text().to_uppercase();
    match session.state() {
        GameState::Won => {
            let guesses = session.history().len();
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "  {} {} in {} {}",
                "🎉 Solved!".bright_green().bold(),
                solution.bright_white().bold(),
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            );
            for attempt in session.history() {
                println!("    {}", attempt.evaluation.to_emoji());
            }
            println!("{}", "═".repeat(60).bright_cyan());
        }
        GameState::Lost => {
            println!("\n{}", "═".repeat(60).red());
            println!(
                "  {} The word was {}",
                "Out of guesses.".red().bold(),
                solution.bright_white().bold()
            );
            println!("{}", "═".repeat(60).red());
        }
        GameState::Playing => {}
    }
}

/// Print a simulation summary
pub fn print_simulation_report(report: &SimulationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SIMULATION RESULTS".bright_cyan().bold(),
        format!("({})", report.difficulty).bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", report.games);
    println!(
        "   Won:              {} {}",
        report.won,
        format!("({:.1}%)", report.win_rate()).green()
    );
    if report.lost() > 0 {
        println!("   Lost:             {}", report.lost().to_string().red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", report.average_guesses())
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let most = report.distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in report.distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 40);
        let pct = if report.games > 0 {
            count as f64 / report.games as f64 * 100.0
        } else {
            0.0
        };
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !report.failures.is_empty() {
        println!("\n😰 {}", "Missed words:".yellow().bold());
        let words: Vec<String> = report
            .failures
            .iter()
            .map(|word| word.text().to_uppercase())
            .collect();
        println!("   {}", words.join(", ").yellow());
    }
}
