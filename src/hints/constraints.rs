//! Aggregated letter constraints over the accepted dictionary
//!
//! This is the filter behind the "best next guess" worker. Instead of
//! re-scoring, it folds the history into per-letter occurrence bounds and
//! positional requirements:
//! - a letter that ever scored Present needs at least as many occurrences as
//!   there are guesses in which it scored Present or Correct
//! - a letter that scored Absent and never Present/Correct in any guess may not
//!   occur at all
//! - Correct at i pins the letter to i; Present at i bans the letter from i

use crate::core::{Attempt, Verdict, WORD_LENGTH, Word};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Occurrence bounds for one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for LetterBounds {
    fn default() -> Self {
        Self {
            min: 0,
            max: WORD_LENGTH,
        }
    }
}

/// Constraints derived from an evaluation history
#[derive(Debug, Clone, Default)]
pub struct LetterConstraints {
    bounds: FxHashMap<u8, LetterBounds>,
    required: FxHashSet<(usize, u8)>,
    banned: FxHashSet<(usize, u8)>,
}

impl LetterConstraints {
    /// Fold `history` into constraints
    #[must_use]
    pub fn from_history(history: &[Attempt]) -> Self {
        let mut hit_guesses: FxHashMap<u8, usize> = FxHashMap::default();
        let mut ever_present: FxHashSet<u8> = FxHashSet::default();
        let mut ever_absent: FxHashSet<u8> = FxHashSet::default();
        let mut required = FxHashSet::default();
        let mut banned = FxHashSet::default();

        for attempt in history {
            let mut hit_this_guess: FxHashSet<u8> = FxHashSet::default();
            for (position, letter, verdict) in attempt.letters() {
                match verdict {
                    Verdict::Correct => {
                        required.insert((position, letter));
                        hit_this_guess.insert(letter);
                    }
                    Verdict::Present => {
                        banned.insert((position, letter));
                        ever_present.insert(letter);
                        hit_this_guess.insert(letter);
                    }
                    Verdict::Absent => {
                        ever_absent.insert(letter);
                    }
                }
            }
            for letter in hit_this_guess {
                *hit_guesses.entry(letter).or_insert(0) += 1;
            }
        }

        let mut bounds: FxHashMap<u8, LetterBounds> = FxHashMap::default();
        for &letter in &ever_present {
            bounds.entry(letter).or_default().min = hit_guesses.get(&letter).copied().unwrap_or(0);
        }
        for &letter in &ever_absent {
            if !hit_guesses.contains_key(&letter) {
                bounds.insert(letter, LetterBounds { min: 0, max: 0 });
            }
        }

        Self {
            bounds,
            required,
            banned,
        }
    }

    /// Occurrence bounds recorded for `letter`, if any
    #[must_use]
    pub fn bounds(&self, letter: u8) -> Option<LetterBounds> {
        self.bounds.get(&letter).copied()
    }

    /// Whether `word` meets every positional and count constraint
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        self.required
            .iter()
            .all(|&(position, letter)| word.letter_at(position) == letter)
            && self
                .banned
                .iter()
                .all(|&(position, letter)| word.letter_at(position) != letter)
            && self.bounds.iter().all(|(&letter, bounds)| {
                let count = word.count_of(letter);
                count >= bounds.min && count <= bounds.max
            })
    }

    /// Words from `words` that meet the constraints, in input order
    #[must_use]
    pub fn filter(&self, words: &[Word]) -> Vec<Word> {
        words
            .par_iter()
            .filter(|word| self.is_satisfied_by(word))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn history(guesses: &[&str], solution: &str) -> Vec<Attempt> {
        let solution = word(solution);
        guesses
            .iter()
            .map(|g| Attempt::scored(word(g), &solution))
            .collect()
    }

    #[test]
    fn empty_history_accepts_everything() {
        let constraints = LetterConstraints::from_history(&[]);
        let words = words_from_slice(&["crane", "lolly", "zzzzz"]);
        assert_eq!(constraints.filter(&words), words);
    }

    #[test]
    fn absent_letters_get_zero_max() {
        // CRANE vs CRANK: E absent and never hit
        let constraints = LetterConstraints::from_history(&history(&["crane"], "crank"));
        assert_eq!(constraints.bounds(b'e'), Some(LetterBounds { min: 0, max: 0 }));
        assert!(!constraints.is_satisfied_by(&word("crane")));
        assert!(constraints.is_satisfied_by(&word("crank")));
        assert!(!constraints.is_satisfied_by(&word("clank")));
    }

    #[test]
    fn duplicate_with_one_hit_is_not_zeroed() {
        // SPEED vs ABIDE: one E present, the other absent
        let constraints = LetterConstraints::from_history(&history(&["speed"], "abide"));
        assert_eq!(constraints.bounds(b'e'), Some(LetterBounds { min: 1, max: 5 }));
        assert_eq!(constraints.bounds(b's'), Some(LetterBounds { min: 0, max: 0 }));
        assert!(constraints.is_satisfied_by(&word("abide")));
    }

    #[test]
    fn present_bans_position_and_requires_letter() {
        // TRACE vs CATER: all yellow
        let constraints = LetterConstraints::from_history(&history(&["trace"], "cater"));
        assert!(constraints.is_satisfied_by(&word("cater")));
        assert!(!constraints.is_satisfied_by(&word("crate")));
        assert!(!constraints.is_satisfied_by(&word("carat")));
    }

    #[test]
    fn min_counts_guesses_with_a_hit() {
        // A is green in TACKY and yellow in BLOAT, so two guesses hit it
        let constraints =
            LetterConstraints::from_history(&history(&["tacky", "bloat"], "mania"));
        assert_eq!(constraints.bounds(b'a').map(|b| b.min), Some(2));
        assert!(constraints.is_satisfied_by(&word("mania")));
    }

    #[test]
    fn several_hits_in_one_guess_count_once() {
        // EERIE vs GEESE scores YG--G: three E hits, one guess
        let attempts = history(&["eerie"], "geese");
        assert_eq!(attempts[0].evaluation.to_string(), "YG--G");

        let constraints = LetterConstraints::from_history(&attempts);
        assert_eq!(constraints.bounds(b'e'), Some(LetterBounds { min: 1, max: 5 }));
        assert!(constraints.is_satisfied_by(&word("geese")));
    }

    #[test]
    fn correct_pins_position() {
        let constraints = LetterConstraints::from_history(&history(&["mania"], "mango"));
        let words = words_from_slice(&["mango", "manor", "maple", "mania"]);
        assert_eq!(constraints.filter(&words), words_from_slice(&["mango", "manor"]));
    }
}
