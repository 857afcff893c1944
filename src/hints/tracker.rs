//! Candidate tracking over the solutions pool
//!
//! The candidate set is always re-derived from the full history: a word stays
//! only if scoring every past guess against it reproduces the recorded
//! verdicts exactly.

use crate::core::{Attempt, Word};
use rayon::prelude::*;

/// Filters a solutions pool against an evaluation history
pub struct CandidateTracker<'a> {
    pool: &'a [Word],
}

impl<'a> CandidateTracker<'a> {
    #[must_use]
    pub const fn new(pool: &'a [Word]) -> Self {
        Self { pool }
    }

    /// Pool words consistent with every attempt, in pool order
    ///
    /// An empty result means the history cannot come from any pool word.
    ///
    /// # Examples
    /// ```
    /// use five_letters::core::{Attempt, Word};
    /// use five_letters::hints::CandidateTracker;
    ///
    /// let pool: Vec<Word> = ["crane", "crate", "grate"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let history = [Attempt::scored(Word::new("trace").unwrap(), &pool[2])];
    ///
    /// let candidates = CandidateTracker::new(&pool).candidates(&history);
    /// assert_eq!(candidates, [pool[2]]);
    /// ```
    #[must_use]
    pub fn candidates(&self, history: &[Attempt]) -> Vec<Word> {
        self.pool
            .par_iter()
            .filter(|candidate| Self::is_consistent(candidate, history))
            .copied()
            .collect()
    }

    /// Count consistent pool words without collecting them
    #[must_use]
    pub fn count(&self, history: &[Attempt]) -> usize {
        self.pool
            .par_iter()
            .filter(|candidate| Self::is_consistent(candidate, history))
            .count()
    }

    /// Whether `candidate` would have produced every recorded evaluation
    #[must_use]
    pub fn is_consistent(candidate: &Word, history: &[Attempt]) -> bool {
        history
            .iter()
            .all(|attempt| attempt.is_consistent_with(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Evaluation;
    use crate::wordlists::ANSWERS;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pool() -> Vec<Word> {
        words_from_slice(&["irate", "crate", "grate", "crane", "slate"])
    }

    #[test]
    fn empty_history_keeps_whole_pool() {
        let pool = pool();
        assert_eq!(CandidateTracker::new(&pool).candidates(&[]), pool);
    }

    #[test]
    fn exact_match_leaves_one() {
        let pool = pool();
        let history = [Attempt::new(word("irate"), Evaluation::PERFECT)];

        let candidates = CandidateTracker::new(&pool).candidates(&history);
        assert_eq!(candidates, [word("irate")]);
    }

    #[test]
    fn inconsistent_history_is_empty_not_error() {
        let pool = pool();
        let history = [Attempt::new(word("zzzzz"), Evaluation::PERFECT)];

        let tracker = CandidateTracker::new(&pool);
        assert!(tracker.candidates(&history).is_empty());
        assert_eq!(tracker.count(&history), 0);
    }

    #[test]
    fn multiple_guesses_narrow_in_order() {
        let pool = pool();
        let solution = word("grate");
        let history = [
            Attempt::scored(word("crane"), &solution),
            Attempt::scored(word("irate"), &solution),
        ];

        let candidates = CandidateTracker::new(&pool).candidates(&history);
        assert_eq!(candidates, [word("grate")]);
    }

    #[test]
    fn always_contains_solution_and_stays_in_pool() {
        let pool = words_from_slice(ANSWERS);
        let tracker = CandidateTracker::new(&pool);
        let guesses = ["crane", "lolly", "mania", "speed", "robot", "eerie"];

        for solution in pool.iter().step_by(37) {
            let mut history = Vec::new();
            for guess in guesses {
                history.push(Attempt::scored(word(guess), solution));
                let candidates = tracker.candidates(&history);
                assert!(candidates.contains(solution), "{solution} lost after {guess}");
                assert!(candidates.iter().all(|c| pool.contains(c)));
                assert_eq!(candidates.len(), tracker.count(&history));
            }
        }
    }
}
