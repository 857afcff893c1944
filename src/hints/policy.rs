//! When hints may be shown
//!
//! Advisory gating for the presentation layer. The hint operations on the
//! session stay callable regardless.

use crate::game::Difficulty;

/// Which hints the player may request right now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintAvailability {
    pub one_letter: bool,
    pub best_next_guess: bool,
}

/// Hint usage within the current game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintUsage {
    /// A hint was used since the last accepted guess
    pub used_this_attempt: bool,
    /// The one-letter hint was used in this game
    pub letter_revealed: bool,
}

/// Attempts needed before the one-letter hint unlocks
#[must_use]
pub const fn one_letter_threshold(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 2,
        Difficulty::Medium => 3,
        Difficulty::Hard | Difficulty::Expert => 4,
    }
}

/// Attempts needed before the best-next-guess hint unlocks
#[must_use]
pub const fn best_guess_threshold(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy | Difficulty::Medium => 3,
        Difficulty::Hard | Difficulty::Expert => 2,
    }
}

/// Availability for a game in progress with `attempts` accepted guesses
#[must_use]
pub const fn availability(
    difficulty: Difficulty,
    attempts: usize,
    usage: HintUsage,
    playing: bool,
) -> HintAvailability {
    if !playing || usage.used_this_attempt {
        return HintAvailability {
            one_letter: false,
            best_next_guess: false,
        };
    }
    HintAvailability {
        one_letter: !usage.letter_revealed && attempts >= one_letter_threshold(difficulty),
        best_next_guess: attempts >= best_guess_threshold(difficulty),
    }
}
