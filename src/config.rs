//! Library-side game configuration

use crate::game::Difficulty;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings a session is created with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible solution draws and hints; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random number generator for a session using this configuration
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_is_easy_and_unseeded() {
        let config = GameConfig::default();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn seeded_rngs_repeat() {
        let config = GameConfig::new(Difficulty::Hard).with_seed(42);
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
