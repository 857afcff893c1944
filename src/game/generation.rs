//! Monotonic generation counter for discarding superseded hint work

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared counter bumped on every accepted guess and every new game
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// Move to the next generation and return it
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Capture the current generation
    #[must_use]
    pub fn token(&self) -> GenerationToken {
        GenerationToken {
            counter: self.clone(),
            value: self.current(),
        }
    }
}

/// A captured generation, checked before a background result is published
#[derive(Debug, Clone)]
pub struct GenerationToken {
    counter: Generation,
    value: u64,
}

impl GenerationToken {
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// True while no guess has been accepted and no game started since capture
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.counter.current() == self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_goes_stale_after_advance() {
        let generation = Generation::new();
        let token = generation.token();
        assert!(token.is_current());
        assert_eq!(token.value(), 0);

        assert_eq!(generation.advance(), 1);
        assert!(!token.is_current());
        assert!(generation.token().is_current());
    }

    #[test]
    fn clones_share_the_counter() {
        let generation = Generation::new();
        let shared = generation.clone();
        shared.advance();
        assert_eq!(generation.current(), 1);
    }
}
