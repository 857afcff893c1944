//! Background "best next guess" computation
//!
//! A job snapshots the history and the session's generation token, filters
//! the accepted dictionary on a rayon thread, and sends a `HintOutcome` back
//! over an mpsc channel. Stale work is dropped twice: the job checks its token
//! before and after filtering, and the receiver compares generations again.

use super::{BestGuess, LetterConstraints};
use crate::core::Attempt;
use crate::game::{GameSession, GenerationToken};
use crate::wordlists::Lexicon;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of one hint computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintOutcome {
    /// Generation the computation was started from
    pub generation: u64,
    pub best: BestGuess,
    /// Dictionary words still matching the constraints
    pub remaining: usize,
}

/// Snapshot of everything a hint computation needs
#[derive(Debug, Clone)]
pub struct HintJob {
    lexicon: Arc<Lexicon>,
    history: Vec<Attempt>,
    token: GenerationToken,
}

impl HintJob {
    #[must_use]
    pub fn new(session: &GameSession) -> Self {
        Self {
            lexicon: Arc::clone(session.lexicon()),
            history: session.history().to_vec(),
            token: session.generation_token(),
        }
    }

    /// Run the computation, or `None` if the session moved on meanwhile
    #[must_use]
    pub fn run(&self) -> Option<HintOutcome> {
        if !self.token.is_current() {
            debug!(generation = self.token.value(), "hint job stale before start");
            return None;
        }

        let constraints = LetterConstraints::from_history(&self.history);
        let matches = constraints.filter(self.lexicon.accepted_words());

        if !self.token.is_current() {
            debug!(generation = self.token.value(), "hint job stale after filtering");
            return None;
        }

        Some(HintOutcome {
            generation: self.token.value(),
            best: BestGuess::first(&matches),
            remaining: matches.len(),
        })
    }
}

/// Runs hint jobs on the rayon pool and collects their outcomes
#[derive(Debug)]
pub struct HintWorker {
    sender: Sender<HintOutcome>,
    receiver: Receiver<HintOutcome>,
}

impl Default for HintWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl HintWorker {
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Start a computation for the session's current state
    pub fn request(&self, session: &GameSession) {
        let job = HintJob::new(session);
        let sender = self.sender.clone();
        rayon::spawn(move || {
            if let Some(outcome) = job.run() {
                // The receiver only goes away with the worker itself
                let _ = sender.send(outcome);
            }
        });
    }

    /// Latest outcome for the session's current generation, without blocking
    pub fn try_recv(&self, session: &GameSession) -> Option<HintOutcome> {
        let mut latest = None;
        while let Ok(outcome) = self.receiver.try_recv() {
            if let Some(outcome) = Self::accept(outcome, session) {
                latest = Some(outcome);
            }
        }
        latest
    }

    /// Wait up to `timeout` for an outcome matching the current generation
    pub fn recv_timeout(&self, session: &GameSession, timeout: Duration) -> Option<HintOutcome> {
        let deadline = Instant::now() + timeout;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(left) {
                Ok(outcome) => {
                    if let Some(outcome) = Self::accept(outcome, session) {
                        return Some(outcome);
                    }
                }
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    fn accept(outcome: HintOutcome, session: &GameSession) -> Option<HintOutcome> {
        if outcome.generation == session.generation() {
            Some(outcome)
        } else {
            debug!(
                outcome = outcome.generation,
                current = session.generation(),
                "discarding stale hint"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;

    fn session(solution: &str) -> GameSession {
        let words = words_from_slice(&["crane", "crank", "clank", "crate", "slate", "grate"]);
        let lexicon = Arc::new(Lexicon::new(words.clone(), words).unwrap());
        GameSession::with_solution(lexicon, &GameConfig::default(), Word::new(solution).unwrap())
    }

    #[test]
    fn job_narrows_dictionary() {
        let mut session = session("crank");
        session.submit_guess("crane").unwrap();

        let outcome = HintJob::new(&session).run().unwrap();
        assert_eq!(outcome.best, BestGuess::Unique(Word::new("crank").unwrap()));
        assert_eq!(outcome.remaining, 1);
        assert_eq!(outcome.generation, session.generation());
    }

    #[test]
    fn job_without_history_sees_whole_dictionary() {
        let session = session("crank");
        let outcome = HintJob::new(&session).run().unwrap();
        assert_eq!(outcome.remaining, 6);
        assert!(matches!(outcome.best, BestGuess::Any(_)));
    }

    #[test]
    fn stale_job_discards_itself() {
        let mut session = session("crank");
        let job = HintJob::new(&session);
        session.new_game();
        assert_eq!(job.run(), None);
    }

    #[test]
    fn worker_delivers_current_outcome() {
        let mut session = session("crank");
        session.submit_guess("crane").unwrap();

        let worker = HintWorker::new();
        worker.request(&session);
        let outcome = worker.recv_timeout(&session, Duration::from_secs(10)).unwrap();
        assert_eq!(outcome.remaining, 1);
    }

    #[test]
    fn worker_drops_outcome_from_previous_guess() {
        let mut session = session("crank");
        session.submit_guess("crane").unwrap();

        let worker = HintWorker::new();
        worker.request(&session);
        session.submit_guess("clank").unwrap();

        assert_eq!(worker.recv_timeout(&session, Duration::from_millis(300)), None);
        assert_eq!(worker.try_recv(&session), None);
    }
}
