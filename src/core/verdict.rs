//! Guess scoring
//!
//! A guess is scored against the solution one position at a time:
//! - Correct (green): same letter at the same position
//! - Present (yellow): letter occurs elsewhere in the solution
//! - Absent (gray): letter not available in the solution
//!
//! Duplicate letters are credited at most as often as they occur in the
//! solution, with exact matches taking priority.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Scoring result for a single letter position
///
/// Variants are declared from worst to best so that the derived `Ord` matches
/// the knowledge ordering `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Single-character code used in pattern strings (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Verdicts for every position of one scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([Verdict; WORD_LENGTH]);

impl Evaluation {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Build an evaluation from explicit verdicts
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Score `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and consume those solution positions
    /// 2. Second pass: for each remaining guess letter, consume the first unconsumed
    ///    matching solution position and mark Present, else Absent
    ///
    /// # Examples
    /// ```
    /// use five_letters::core::{Evaluation, Word};
    ///
    /// let guess = Word::new("lolly").unwrap();
    /// let solution = Word::new("alloy").unwrap();
    ///
    /// let evaluation = Evaluation::score(&guess, &solution);
    /// assert_eq!(evaluation.to_string(), "YYG-G");
    /// ```
    #[must_use]
    // Index needed to read guess[i]/solution[i] and write verdicts[i] together
    #[allow(clippy::needless_range_loop)]
    pub fn score(guess: &Word, solution: &Word) -> Self {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];
        let guess = guess.letters();
        let solution = solution.letters();

        for i in 0..WORD_LENGTH {
            if guess[i] == solution[i] {
                verdicts[i] = Verdict::Correct;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if verdicts[i] == Verdict::Correct {
                continue;
            }
            let available = (0..WORD_LENGTH).find(|&j| !consumed[j] && solution[j] == guess[i]);
            if let Some(j) = available {
                verdicts[i] = Verdict::Present;
                consumed[j] = true;
            }
        }

        Self(verdicts)
    }

    /// Get the verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Verdict at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn verdict_at(&self, position: usize) -> Verdict {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions carrying the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Parse an evaluation from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use five_letters::core::Evaluation;
    ///
    /// let e1 = Evaluation::parse("GY-GY").unwrap();
    /// let e2 = Evaluation::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(e1, e2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut chars = s.chars();

        for slot in &mut verdicts {
            *slot = Verdict::from_code(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(verdicts))
    }

    /// Convert to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}
