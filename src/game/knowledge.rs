//! Best-known verdict per letter, used for keyboard colouring and Medium+ rules

use crate::core::{Attempt, Verdict};
use rustc_hash::FxHashMap;

/// Letter -> best verdict observed across every accepted guess
///
/// Only ever improves: Absent can become Present or Correct, Present can
/// become Correct, Correct is final.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterKnowledge {
    letters: FxHashMap<u8, Verdict>,
}

impl LetterKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the verdicts of one accepted guess
    pub fn record(&mut self, attempt: &Attempt) {
        for (_, letter, verdict) in attempt.letters() {
            self.letters
                .entry(letter)
                .and_modify(|known| *known = (*known).max(verdict))
                .or_insert(verdict);
        }
    }

    /// Best verdict for `letter`, or `None` if it was never guessed
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Verdict> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Whether `letter` is known not to be in the solution
    #[inline]
    #[must_use]
    pub fn is_absent(&self, letter: u8) -> bool {
        self.get(letter) == Some(Verdict::Absent)
    }

    /// Known letters in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<(u8, Verdict)> {
        let mut entries: Vec<(u8, Verdict)> =
            self.letters.iter().map(|(&l, &v)| (l, v)).collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
