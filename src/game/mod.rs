//! Game session and the rules it enforces

mod difficulty;
mod generation;
mod knowledge;
mod rejection;
pub mod rules;
mod session;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use generation::{Generation, GenerationToken};
pub use knowledge::LetterKnowledge;
pub use rejection::Rejection;
pub use session::{GameSession, GameState};
