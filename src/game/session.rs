//! A single player's game: solution, history, knowledge and hint state
//!
//! All mutation goes through `&mut self`, so one session has exactly one
//! writer. Background hint work reads a snapshot and is invalidated through
//! the shared `Generation` counter.

use super::{Difficulty, Generation, GenerationToken, LetterKnowledge, Rejection, rules};
use crate::config::GameConfig;
use crate::core::{Attempt, Evaluation, MAX_ATTEMPTS, Verdict, WORD_LENGTH, Word, WordError};
use crate::hints::{BestGuess, CandidateTracker, HintAvailability, HintUsage, LetterHint, policy};
use crate::wordlists::Lexicon;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Where a game stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameState {
    /// Won and Lost are terminal
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Per-game state, replaced as one value on a new game
#[derive(Debug, Clone)]
struct Round {
    solution: Word,
    history: Vec<Attempt>,
    knowledge: LetterKnowledge,
    buffer: String,
    candidates: Vec<Word>,
    state: GameState,
    hints: HintUsage,
}

impl Round {
    fn new(solution: Word, lexicon: &Lexicon) -> Self {
        Self {
            solution,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            knowledge: LetterKnowledge::new(),
            buffer: String::with_capacity(WORD_LENGTH),
            candidates: lexicon.solutions().to_vec(),
            state: GameState::Playing,
            hints: HintUsage::default(),
        }
    }
}

/// One game of the puzzle plus everything needed to start the next
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use five_letters::config::GameConfig;
/// use five_letters::core::Word;
/// use five_letters::game::{GameSession, GameState};
/// use five_letters::wordlists::Lexicon;
///
/// let lexicon = Arc::new(Lexicon::embedded().unwrap());
/// let solution = Word::new("crane").unwrap();
/// let mut session = GameSession::with_solution(lexicon, &GameConfig::default(), solution);
///
/// let evaluation = session.submit_guess("crate").unwrap();
/// assert_eq!(evaluation.to_string(), "GGG-G");
///
/// session.submit_guess("crane").unwrap();
/// assert_eq!(session.state(), GameState::Won);
/// ```
#[derive(Debug)]
pub struct GameSession {
    lexicon: Arc<Lexicon>,
    difficulty: Difficulty,
    rng: StdRng,
    generation: Generation,
    round: Round,
}

impl GameSession {
    /// Start a session with a randomly drawn solution
    #[must_use]
    pub fn new(lexicon: Arc<Lexicon>, config: &GameConfig) -> Self {
        let mut rng = config.rng();
        let solution = lexicon.random_solution(&mut rng);
        Self::start(lexicon, config.difficulty, rng, solution)
    }

    /// Start a session with a known solution
    ///
    /// The solution does not have to be part of the solutions pool, in which
    /// case the candidate set will not contain it.
    #[must_use]
    pub fn with_solution(lexicon: Arc<Lexicon>, config: &GameConfig, solution: Word) -> Self {
        Self::start(lexicon, config.difficulty, config.rng(), solution)
    }

    fn start(lexicon: Arc<Lexicon>, difficulty: Difficulty, rng: StdRng, solution: Word) -> Self {
        info!(%difficulty, "new game");
        trace!(%solution, "solution drawn");
        let round = Round::new(solution, &lexicon);
        Self {
            lexicon,
            difficulty,
            rng,
            generation: Generation::new(),
            round,
        }
    }

    /// Discard the current game and draw a new solution
    pub fn new_game(&mut self) {
        let solution = self.lexicon.random_solution(&mut self.rng);
        self.new_game_with(solution);
    }

    /// Discard the current game and start one with `solution`
    pub fn new_game_with(&mut self, solution: Word) {
        self.round = Round::new(solution, &self.lexicon);
        let generation = self.generation.advance();
        info!(difficulty = %self.difficulty, generation, "new game");
        trace!(%solution, "solution drawn");
    }

    /// Switch modes, which always starts a new game
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(from = %self.difficulty, to = %difficulty, "difficulty changed");
        self.difficulty = difficulty;
        self.new_game();
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn solution(&self) -> Word {
        self.round.solution
    }

    /// Accepted guesses in order
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.round.history
    }

    #[must_use]
    pub const fn knowledge(&self) -> &LetterKnowledge {
        &self.round.knowledge
    }

    /// Letters typed for the guess in progress
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.round.buffer
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.round.state
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.round.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.round.history.len()
    }

    /// Solutions-pool words consistent with every accepted guess
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.round.candidates
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Current generation number
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.current()
    }

    /// Token that goes stale on the next accepted guess or new game
    #[must_use]
    pub fn generation_token(&self) -> GenerationToken {
        self.generation.token()
    }

    /// Append a letter to the guess in progress
    ///
    /// Returns `false` without changing anything when the game is over, the
    /// guess is already full, or `letter` is not an ASCII letter.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if self.round.state.is_over()
            || !letter.is_ascii_alphabetic()
            || self.round.buffer.len() >= WORD_LENGTH
        {
            return false;
        }
        self.round.buffer.push(letter.to_ascii_lowercase());
        true
    }

    /// Remove the last typed letter
    pub fn remove_letter(&mut self) -> bool {
        if self.round.state.is_over() {
            return false;
        }
        self.round.buffer.pop().is_some()
    }

    /// Check a guess without submitting it
    ///
    /// # Errors
    /// Returns the first `Rejection` that applies, in this order: game over,
    /// length, dictionary, then the difficulty rules.
    pub fn validate(&self, input: &str) -> Result<Word, Rejection> {
        if self.round.state.is_over() {
            return Err(Rejection::GameOver);
        }

        let word = Word::new(input).map_err(|e| match e {
            WordError::InvalidLength(length) => Rejection::InvalidLength(length),
            WordError::NonAscii | WordError::InvalidCharacters => {
                Rejection::NotInDictionary(input.to_lowercase())
            }
        })?;

        if !self.lexicon.is_accepted(&word) {
            return Err(Rejection::NotInDictionary(word.text().to_owned()));
        }

        rules::check(
            self.difficulty,
            &word,
            &self.round.knowledge,
            self.round.history.last(),
        )?;
        Ok(word)
    }

    /// Submit the guess in progress
    ///
    /// # Errors
    /// Returns a `Rejection` and leaves the session untouched if the guess is
    /// refused. The typed letters stay in place so they can be corrected.
    pub fn submit(&mut self) -> Result<Evaluation, Rejection> {
        let input = self.round.buffer.clone();
        self.submit_guess(&input)
    }

    /// Submit a whole word, bypassing the letter buffer
    ///
    /// # Errors
    /// Same as [`GameSession::submit`].
    pub fn submit_guess(&mut self, input: &str) -> Result<Evaluation, Rejection> {
        match self.validate(input) {
            Ok(word) => Ok(self.accept(word)),
            Err(rejection) => {
                debug!(guess = input, %rejection, "guess rejected");
                Err(rejection)
            }
        }
    }

    fn accept(&mut self, guess: Word) -> Evaluation {
        let attempt = Attempt::scored(guess, &self.round.solution);
        let round = &mut self.round;

        round.knowledge.record(&attempt);
        round.history.push(attempt);
        round.buffer.clear();
        round.hints.used_this_attempt = false;
        round.candidates = CandidateTracker::new(self.lexicon.solutions()).candidates(&round.history);

        if attempt.evaluation.is_perfect() {
            round.state = GameState::Won;
        } else if round.history.len() >= MAX_ATTEMPTS {
            round.state = GameState::Lost;
        }

        let generation = self.generation.advance();
        debug!(
            guess = %attempt,
            number = round.history.len(),
            candidates = round.candidates.len(),
            state = ?round.state,
            generation,
            "guess accepted"
        );
        attempt.evaluation
    }

    /// Which hints the player may ask for right now
    #[must_use]
    pub fn hint_availability(&self) -> HintAvailability {
        policy::availability(
            self.difficulty,
            self.round.history.len(),
            self.round.hints,
            !self.round.state.is_over(),
        )
    }

    #[must_use]
    pub const fn hint_usage(&self) -> HintUsage {
        self.round.hints
    }

    /// Suggest a word from the current candidate set
    pub fn best_next_guess(&mut self) -> BestGuess {
        self.round.hints.used_this_attempt = true;
        let best = BestGuess::choose(&self.round.candidates, &mut self.rng);
        debug!(%best, "best next guess");
        best
    }

    /// Reveal the solution letter at one not-yet-green position
    ///
    /// Looks only at the most recent evaluation; before the first guess any
    /// position may be revealed. Returns `None` when every position is green.
    pub fn one_letter_hint(&mut self) -> Option<LetterHint> {
        let open: Vec<usize> = match self.round.history.last() {
            Some(last) => last
                .letters()
                .filter(|&(_, _, verdict)| verdict != Verdict::Correct)
                .map(|(position, _, _)| position)
                .collect(),
            None => (0..WORD_LENGTH).collect(),
        };
        let &position = open.choose(&mut self.rng)?;

        self.round.hints.used_this_attempt = true;
        self.round.hints.letter_revealed = true;
        let hint = LetterHint {
            position,
            letter: char::from(self.round.solution.letter_at(position)),
        };
        debug!(%hint, "letter revealed");
        Some(hint)
    }
}
