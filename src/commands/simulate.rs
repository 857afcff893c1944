//! Self-play simulation
//!
//! Plays many seeded games where every guess is the session's own "best next
//! guess" hint, then summarises win rate and guess distribution.

use crate::config::GameConfig;
use crate::core::{MAX_ATTEMPTS, Word};
use crate::game::{Difficulty, GameSession, GameState};
use crate::wordlists::Lexicon;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub solution: Word,
    pub guesses: Vec<Word>,
    pub won: bool,
}

/// Aggregate statistics over a batch of games
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub difficulty: Difficulty,
    pub games: usize,
    pub won: usize,
    /// Index `n` holds the number of games won in `n` guesses
    pub distribution: [usize; MAX_ATTEMPTS + 1],
    /// Solutions of lost games, at most ten
    pub failures: Vec<Word>,
    pub duration: Duration,
}

impl SimulationReport {
    #[must_use]
    pub fn from_records(difficulty: Difficulty, records: &[GameRecord], duration: Duration) -> Self {
        let mut distribution = [0; MAX_ATTEMPTS + 1];
        let mut failures = Vec::new();

        for record in records {
            if record.won {
                distribution[record.guesses.len().min(MAX_ATTEMPTS)] += 1;
            } else if failures.len() < 10 {
                failures.push(record.solution);
            }
        }

        Self {
            difficulty,
            games: records.len(),
            won: distribution.iter().sum(),
            distribution,
            failures,
            duration,
        }
    }

    #[must_use]
    pub const fn lost(&self) -> usize {
        self.games - self.won
    }

    /// Share of games won, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.won as f64 / self.games as f64 * 100.0
    }

    /// Mean number of guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.won == 0 {
            return 0.0;
        }
        let total: usize = self
            .distribution
            .iter()
            .enumerate()
            .map(|(guesses, &count)| guesses * count)
            .sum();
        total as f64 / self.won as f64
    }
}

/// Play one game to the end, always taking the suggested guess
#[must_use]
pub fn play_one(lexicon: Arc<Lexicon>, config: &GameConfig) -> GameRecord {
    let mut session = GameSession::new(lexicon, config);
    let mut guesses = Vec::with_capacity(MAX_ATTEMPTS);

    while !session.state().is_over() {
        let Some(guess) = session.best_next_guess().suggestion() else {
            warn!(solution = %session.solution(), "no candidates left");
            break;
        };
        if let Err(rejection) = session.submit_guess(guess.text()) {
            warn!(%guess, %rejection, "suggested guess refused");
            break;
        }
        guesses.push(guess);
    }

    GameRecord {
        solution: session.solution(),
        guesses,
        won: session.state() == GameState::Won,
    }
}

/// Play `games` games in parallel, seeding game `i` with `seed + i`
pub fn simulate(
    lexicon: &Arc<Lexicon>,
    difficulty: Difficulty,
    games: usize,
    seed: u64,
    progress: &ProgressBar,
) -> Vec<GameRecord> {
    (0..games)
        .into_par_iter()
        .map(|index| {
            let config = GameConfig::new(difficulty).with_seed(seed.wrapping_add(index as u64));
            let record = play_one(Arc::clone(lexicon), &config);
            progress.inc(1);
            record
        })
        .collect()
}

/// Run a simulation with a progress bar on stderr
pub fn run_simulation(
    lexicon: &Arc<Lexicon>,
    difficulty: Difficulty,
    games: usize,
    seed: u64,
    quiet: bool,
) -> SimulationReport {
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        progress_bar(games)
    };

    info!(games, seed, %difficulty, "simulation started");
    let start = Instant::now();
    let records = simulate(lexicon, difficulty, games, seed, &progress);
    progress.finish_with_message("Complete!");

    SimulationReport::from_records(difficulty, &records, start.elapsed())
}

fn progress_bar(games: usize) -> ProgressBar {
    let bar = ProgressBar::new(games as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar.set_message("Playing");
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(Lexicon::embedded().unwrap())
    }

    #[test]
    fn records_respect_attempt_limit() {
        let records = simulate(&lexicon(), Difficulty::Easy, 25, 1, &ProgressBar::hidden());

        assert_eq!(records.len(), 25);
        for record in &records {
            assert!(record.guesses.len() <= MAX_ATTEMPTS);
            assert_eq!(record.won, record.guesses.last() == Some(&record.solution));
        }
    }

    #[test]
    fn suggestions_never_break_expert_rules() {
        let records = simulate(&lexicon(), Difficulty::Expert, 25, 9, &ProgressBar::hidden());
        for record in &records {
            assert!(record.won || record.guesses.len() == MAX_ATTEMPTS);
        }
    }

    #[test]
    fn same_seed_same_games() {
        let lexicon = lexicon();
        let first = simulate(&lexicon, Difficulty::Hard, 10, 77, &ProgressBar::hidden());
        let second = simulate(&lexicon, Difficulty::Hard, 10, 77, &ProgressBar::hidden());
        assert_eq!(first, second);
    }

    #[test]
    fn report_aggregates() {
        let crane = Word::new("crane").unwrap();
        let slate = Word::new("slate").unwrap();
        let records = vec![
            GameRecord {
                solution: crane,
                guesses: vec![slate, crane],
                won: true,
            },
            GameRecord {
                solution: crane,
                guesses: vec![crane],
                won: true,
            },
            GameRecord {
                solution: slate,
                guesses: vec![crane; MAX_ATTEMPTS],
                won: false,
            },
        ];

        let report = SimulationReport::from_records(Difficulty::Easy, &records, Duration::ZERO);
        assert_eq!(report.games, 3);
        assert_eq!(report.won, 2);
        assert_eq!(report.lost(), 1);
        assert_eq!(report.distribution[1], 1);
        assert_eq!(report.distribution[2], 1);
        assert_eq!(report.failures, vec![slate]);
        assert!((report.average_guesses() - 1.5).abs() < f64::EPSILON);
        assert!((report.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_report() {
        let report = SimulationReport::from_records(Difficulty::Easy, &[], Duration::ZERO);
        assert!(report.win_rate().abs() < f64::EPSILON);
        assert!(report.average_guesses().abs() < f64::EPSILON);
    }
}
