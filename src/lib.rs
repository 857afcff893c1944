//! Five Letters
//!
//! A five-letter word puzzle: guess the hidden word in six attempts, with
//! four difficulty modes, candidate tracking and hints.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use five_letters::config::GameConfig;
//! use five_letters::game::{Difficulty, GameSession};
//! use five_letters::wordlists::Lexicon;
//!
//! let lexicon = Arc::new(Lexicon::embedded().unwrap());
//! let config = GameConfig::new(Difficulty::Hard).with_seed(7);
//! let mut session = GameSession::new(lexicon, &config);
//!
//! let evaluation = session.submit_guess("crane").unwrap();
//! println!("{} {}", evaluation.to_emoji(), session.candidates().len());
//! ```

// Core domain types
pub mod core;

// Game session and difficulty rules
pub mod game;

// Candidate tracking and hints
pub mod hints;

// Word lists
pub mod wordlists;

// Library configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
