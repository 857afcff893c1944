//! Hint values handed to the presentation layer

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Outcome of a "best next guess" request
///
/// With more than two candidates no ranking is attempted; any remaining
/// candidate is an acceptable suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestGuess {
    /// The history matches no word
    NoCandidates,
    /// Exactly one word remains
    Unique(Word),
    /// Exactly two words remain; both are shown
    Pair(Word, Word),
    /// More than two remain; this one is as good as any other
    Any(Word),
}

impl BestGuess {
    /// Apply the selection policy, picking uniformly at random among many
    pub fn choose<R: Rng + ?Sized>(candidates: &[Word], rng: &mut R) -> Self {
        match candidates {
            [] => Self::NoCandidates,
            [only] => Self::Unique(*only),
            [first, second] => Self::Pair(*first, *second),
            many => many
                .choose(rng)
                .copied()
                .map_or(Self::NoCandidates, Self::Any),
        }
    }

    /// Apply the selection policy, taking the first of many
    #[must_use]
    pub fn first(candidates: &[Word]) -> Self {
        match candidates {
            [] => Self::NoCandidates,
            [only] => Self::Unique(*only),
            [first, second] => Self::Pair(*first, *second),
            [first, ..] => Self::Any(*first),
        }
    }

    /// A single word that could be played next
    #[must_use]
    pub const fn suggestion(&self) -> Option<Word> {
        match *self {
            Self::NoCandidates => None,
            Self::Unique(word) | Self::Pair(word, _) | Self::Any(word) => Some(word),
        }
    }
}

impl fmt::Display for BestGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => f.write_str("No matching words found"),
            Self::Unique(word) | Self::Any(word) => {
                write!(f, "{}", word.text().to_uppercase())
            }
            Self::Pair(first, second) => write!(
                f,
                "{} or {}",
                first.text().to_uppercase(),
                second.text().to_uppercase()
            ),
        }
    }
}

/// A revealed solution letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterHint {
    /// Zero-based board position
    pub position: usize,
    pub letter: char,
}

impl fmt::Display for LetterHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {} is '{}'",
            self.position + 1,
            self.letter.to_ascii_uppercase()
        )
    }
}
