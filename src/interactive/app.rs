//! TUI application state and logic

use crate::core::MAX_ATTEMPTS;
use crate::game::{Difficulty, GameSession, GameState};
use crate::hints::{BestGuess, HintOutcome, HintWorker, LetterHint};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How long to wait for a key before checking the hint worker again
const TICK: Duration = Duration::from_millis(100);

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    pub session: GameSession,
    worker: HintWorker,
    /// Latest dictionary-wide result from the background worker
    pub dictionary: Option<HintOutcome>,
    pub revealed: Option<RevealedHint>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// A hint the player asked for in the current attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealedHint {
    BestGuess(BestGuess),
    Letter(LetterHint),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results of the games played in this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    /// Count a finished game
    pub fn record(&mut self, session: &GameSession) {
        match session.state() {
            GameState::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.guess_distribution[session.history().len().min(MAX_ATTEMPTS)] += 1;
            }
            GameState::Lost => self.total_games += 1,
            GameState::Playing => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64 * 100.0
    }
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        let app = Self {
            session,
            worker: HintWorker::new(),
            dictionary: None,
            revealed: None,
            messages: vec![Message {
                text: "Type a word and press Enter. Tab: best guess, ?: letter hint".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        };
        app.worker.request(&app.session);
        app
    }

    /// Pick up finished background work for the current generation
    pub fn refresh_hints(&mut self) {
        if let Some(outcome) = self.worker.try_recv(&self.session) {
            self.dictionary = Some(outcome);
        }
    }

    /// Dictionary-wide pick shown next to a revealed best guess
    #[must_use]
    pub fn dictionary_pick(&self) -> Option<HintOutcome> {
        match self.revealed {
            Some(RevealedHint::BestGuess(_)) => self.dictionary,
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let control = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if control => self.should_quit = true,
            KeyCode::Char('n') if control => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(5) => self.new_game(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.session.remove_letter();
            }
            KeyCode::Tab => self.show_best_guess(),
            KeyCode::Char('?') => self.show_letter(),
            KeyCode::Char(digit @ '1'..='4') => {
                let index = digit as usize - '1' as usize;
                self.request_difficulty(Difficulty::ALL[index]);
            }
            KeyCode::Char(letter) => {
                self.session.add_letter(letter);
            }
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit() {
            Ok(_) => {
                self.revealed = None;
                self.dictionary = None;
                self.worker.request(&self.session);

                match self.session.state() {
                    GameState::Won => {
                        self.stats.record(&self.session);
                        let celebration = match self.session.history().len() {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press F5 for a new game or Esc to quit.", MessageStyle::Info);
                    }
                    GameState::Lost => {
                        self.stats.record(&self.session);
                        let solution = self.session.solution().text().to_uppercase();
                        self.add_message(&format!("The word was {solution}"), MessageStyle::Error);
                        self.add_message("Press F5 for a new game or Esc to quit.", MessageStyle::Info);
                    }
                    GameState::Playing => {}
                }
            }
            Err(rejection) => self.add_message(&rejection.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session.new_game();
        self.reset_hints();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Switch difficulty from a key press, only between games or before typing
    fn request_difficulty(&mut self, difficulty: Difficulty) {
        let idle = self.session.current_guess().is_empty()
            && (self.session.history().is_empty() || self.session.state().is_over());
        if idle {
            self.set_difficulty(difficulty);
        } else {
            self.add_message(
                "Finish the game or press F5 before changing difficulty",
                MessageStyle::Error,
            );
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.session.set_difficulty(difficulty);
        self.reset_hints();
        self.add_message(&format!("New {difficulty} game started!"), MessageStyle::Info);
    }

    fn reset_hints(&mut self) {
        self.revealed = None;
        self.dictionary = None;
        self.worker.request(&self.session);
    }

    fn show_best_guess(&mut self) {
        if self.session.hint_availability().best_next_guess {
            let best = self.session.best_next_guess();
            self.revealed = Some(RevealedHint::BestGuess(best));
        } else {
            self.add_message("Best-guess hint is not available yet", MessageStyle::Error);
        }
    }

    fn show_letter(&mut self) {
        if !self.session.hint_availability().one_letter {
            self.add_message("Letter hint is not available", MessageStyle::Error);
            return;
        }
        if let Some(hint) = self.session.one_letter_hint() {
            self.revealed = Some(RevealedHint::Letter(hint));
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        app.refresh_hints();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
    }

    Ok(())
}
