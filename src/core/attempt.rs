//! A scored guess as stored in the session history

use super::{Evaluation, Verdict, Word};
use std::fmt;

/// One accepted guess together with its verdicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attempt {
    pub guess: Word,
    pub evaluation: Evaluation,
}

impl Attempt {
    #[must_use]
    pub const fn new(guess: Word, evaluation: Evaluation) -> Self {
        Self { guess, evaluation }
    }

    /// Score `guess` against `solution` and keep both
    #[must_use]
    pub fn scored(guess: Word, solution: &Word) -> Self {
        Self::new(guess, Evaluation::score(&guess, solution))
    }

    /// Letters paired with their verdicts, in position order
    pub fn letters(&self) -> impl Iterator<Item = (usize, u8, Verdict)> + '_ {
        self.guess
            .letters()
            .iter()
            .zip(self.evaluation.verdicts())
            .enumerate()
            .map(|(position, (&letter, &verdict))| (position, letter, verdict))
    }

    /// Whether `candidate`, had it been the solution, reproduces this evaluation
    #[must_use]
    pub fn is_consistent_with(&self, candidate: &Word) -> bool {
        Evaluation::score(&self.guess, candidate) == self.evaluation
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.evaluation)
    }
}
