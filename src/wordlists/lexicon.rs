//! Read-only dictionary and solutions pool
//!
//! A `Lexicon` is built once and shared behind an `Arc` by the session and
//! any background hint computation. Nothing mutates it after construction.

use super::loader::words_from_slice;
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Error type for an unusable word list combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexiconError {
    #[error("the accepted-words dictionary is empty")]
    EmptyDictionary,
    #[error("the solutions pool is empty")]
    EmptySolutions,
}

/// Accepted guesses plus the pool solutions are drawn from
#[derive(Debug, Clone)]
pub struct Lexicon {
    accepted: FxHashSet<Word>,
    accepted_words: Vec<Word>,
    solutions: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon from an accepted dictionary and a solutions pool
    ///
    /// Both lists are sorted and deduplicated. The solutions pool does not
    /// have to be a subset of the dictionary.
    ///
    /// # Errors
    /// Returns `LexiconError` if either list is empty.
    pub fn new(
        mut accepted_words: Vec<Word>,
        mut solutions: Vec<Word>,
    ) -> Result<Self, LexiconError> {
        accepted_words.sort_unstable();
        accepted_words.dedup();
        solutions.sort_unstable();
        solutions.dedup();

        if accepted_words.is_empty() {
            return Err(LexiconError::EmptyDictionary);
        }
        if solutions.is_empty() {
            return Err(LexiconError::EmptySolutions);
        }

        Ok(Self {
            accepted: accepted_words.iter().copied().collect(),
            accepted_words,
            solutions,
        })
    }

    /// Lexicon backed by the word lists compiled into the binary
    ///
    /// # Errors
    /// Returns `LexiconError` only if the embedded lists were built empty.
    ///
    /// # Examples
    /// ```
    /// use five_letters::wordlists::Lexicon;
    ///
    /// let lexicon = Lexicon::embedded().unwrap();
    /// assert!(lexicon.solutions().len() <= lexicon.accepted_words().len());
    /// ```
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::new(words_from_slice(ALLOWED), words_from_slice(ANSWERS))
    }

    /// Membership test against the accepted dictionary
    #[inline]
    #[must_use]
    pub fn is_accepted(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    /// Accepted dictionary in sorted order
    #[must_use]
    pub fn accepted_words(&self) -> &[Word] {
        &self.accepted_words
    }

    /// Solutions pool in sorted order
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Draw a solution uniformly at random
    pub fn random_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        // Non-empty by construction
        self.solutions[rng.random_range(0..self.solutions.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn new_sorts_and_dedups() {
        let lexicon = Lexicon::new(
            words(&["slate", "crane", "slate"]),
            words(&["crane", "crane"]),
        )
        .unwrap();

        let accepted: Vec<&str> = lexicon.accepted_words().iter().map(Word::text).collect();
        assert_eq!(accepted, ["crane", "slate"]);
        assert_eq!(lexicon.solutions().len(), 1);
    }

    #[test]
    fn empty_lists_are_rejected() {
        assert_eq!(
            Lexicon::new(Vec::new(), words(&["crane"])).unwrap_err(),
            LexiconError::EmptyDictionary
        );
        assert_eq!(
            Lexicon::new(words(&["crane"]), Vec::new()).unwrap_err(),
            LexiconError::EmptySolutions
        );
    }

    #[test]
    fn membership_uses_dictionary_only() {
        let lexicon = Lexicon::new(words(&["crane"]), words(&["slate"])).unwrap();

        assert!(lexicon.is_accepted(&Word::new("crane").unwrap()));
        assert!(!lexicon.is_accepted(&Word::new("slate").unwrap()));
    }

    #[test]
    fn random_solution_comes_from_pool() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let solution = lexicon.random_solution(&mut rng);
            assert!(lexicon.solutions().contains(&solution));
        }
    }

    #[test]
    fn embedded_answers_are_accepted() {
        let lexicon = Lexicon::embedded().unwrap();
        assert!(
            lexicon
                .solutions()
                .iter()
                .all(|word| lexicon.is_accepted(word))
        );
    }
}
