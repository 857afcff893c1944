//! Word lists for the puzzle
//!
//! Embedded lists are compiled into the binary; `loader` reads replacement
//! lists from disk and `Lexicon` bundles a dictionary with a solutions pool.

mod embedded;
mod lexicon;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use lexicon::{Lexicon, LexiconError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn lists_are_valid_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for answer in ANSWERS {
            assert!(
                allowed_set.contains(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 643, "Expected 643 answer words");
        assert_eq!(ALLOWED_COUNT, 799, "Expected 799 allowed words");
    }
}
