//! Core domain types for the puzzle
//!
//! Words, verdicts and the scoring function. Everything here is pure and has
//! no knowledge of sessions, dictionaries or hints.

mod attempt;
mod verdict;
mod word;

pub use attempt::Attempt;
pub use verdict::{Evaluation, Verdict};
pub use word::{Word, WordError};

/// Number of letters in every guess and solution
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets before the game is lost
pub const MAX_ATTEMPTS: usize = 6;
