//! Reasons a submitted guess is refused
//!
//! A rejection is a normal outcome, not a fault: the session is left exactly
//! as it was and the reason is handed back for display.

use crate::core::WORD_LENGTH;
use thiserror::Error;

/// Why a guess was not accepted
///
/// Letters are stored lower case; messages show them upper case and report
/// positions 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Word must be {WORD_LENGTH} letters long (got {0})")]
    InvalidLength(usize),

    #[error("'{}' is not in the word list", .0.to_uppercase())]
    NotInDictionary(String),

    #[error("Cannot use letter '{}', it is marked as not in the word", .0.to_ascii_uppercase())]
    AbsentLetterReused(char),

    #[error("Position {} must be '{}'", .position + 1, .letter.to_ascii_uppercase())]
    PositionMismatch { position: usize, letter: char },

    #[error("Must use the letter '{}' somewhere", .0.to_ascii_uppercase())]
    RequiredLetterMissing(char),

    #[error(
        "Letter '{}' must move away from position {}",
        .letter.to_ascii_uppercase(),
        .position + 1
    )]
    LetterMustRelocate { position: usize, letter: char },

    #[error("The game is over, start a new one")]
    GameOver,
}
