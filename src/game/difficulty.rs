//! Difficulty modes and the guess restrictions each one switches on

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Guess-validation strictness, fixed for the lifetime of a game
///
/// - Easy: any accepted word
/// - Medium: letters known to be absent may not be reused
/// - Hard: additionally replays the previous guess (greens stay, yellows are used)
/// - Expert: additionally yellows must move to a new position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Error for an unrecognised difficulty name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected easy, medium, hard or expert)")]
pub struct ParseDifficultyError(String);

impl Difficulty {
    /// Every mode, from easiest to hardest
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }

    /// Letters whose best verdict is Absent may not appear in a new guess
    #[must_use]
    pub const fn forbids_absent_letters(self) -> bool {
        !matches!(self, Self::Easy)
    }

    /// Greens and yellows of the previous guess must be honoured
    #[must_use]
    pub const fn replays_previous_guess(self) -> bool {
        matches!(self, Self::Hard | Self::Expert)
    }

    /// A yellow letter may not sit at the position it was yellow in
    #[must_use]
    pub const fn requires_relocation(self) -> bool {
        matches!(self, Self::Expert)
    }

    /// The next harder mode, wrapping back to Easy
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Expert,
            Self::Expert => Self::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_flags_escalate() {
        assert!(!Difficulty::Easy.forbids_absent_letters());
        assert!(Difficulty::Medium.forbids_absent_letters());
        assert!(!Difficulty::Medium.replays_previous_guess());
        assert!(Difficulty::Hard.replays_previous_guess());
        assert!(!Difficulty::Hard.requires_relocation());
        assert!(Difficulty::Expert.requires_relocation());
        assert!(Difficulty::Expert.forbids_absent_letters());
    }

    #[test]
    fn parse_names() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" expert ".parse::<Difficulty>().unwrap(), Difficulty::Expert);
        assert!("insane".parse::<Difficulty>().is_err());
    }

    #[test]
    fn next_cycles_through_all() {
        let mut mode = Difficulty::Easy;
        for expected in Difficulty::ALL.iter().skip(1) {
            mode = mode.next();
            assert_eq!(mode, *expected);
        }
        assert_eq!(mode.next(), Difficulty::Easy);
    }
}
