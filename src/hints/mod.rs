//! Candidate tracking and hints
//!
//! The session keeps its candidate set with `CandidateTracker`, which
//! re-scores the solutions pool. The background worker takes a cheaper route
//! over the whole dictionary with `LetterConstraints`.

mod constraints;
pub mod policy;
mod suggest;
mod tracker;
mod worker;

pub use constraints::{LetterBounds, LetterConstraints};
pub use policy::{HintAvailability, HintUsage};
pub use suggest::{BestGuess, LetterHint};
pub use tracker::CandidateTracker;
pub use worker::{HintJob, HintOutcome, HintWorker};
