//! TUI rendering with ratatui
//!
//! Board, keyboard, hint panel and messages for the game screen.

use super::app::{App, MessageStyle, RevealedHint};
use crate::core::{MAX_ATTEMPTS, Verdict, WORD_LENGTH};
use crate::game::GameState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ATTEMPTS as u16 + 2),
            Constraint::Min(5),
        ])
        .split(main_chunks[0]);
    render_board(f, app, left[0]);
    render_keyboard(f, app, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);
    render_hints(f, app, right[0]);
    render_messages(f, app, right[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("FIVE LETTERS - {} mode", app.session.difficulty());
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(Verdict::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
        Span::raw(" "),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut rows: Vec<Line> = session
        .history()
        .iter()
        .map(|attempt| {
            Line::from(
                attempt
                    .letters()
                    .flat_map(|(_, letter, verdict)| {
                        tile(char::from(letter), verdict_style(Some(verdict)))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    if session.state() == GameState::Playing {
        let typed = session.current_guess();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let letter = typed.chars().nth(i).unwrap_or('_');
                tile(letter, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            })
            .collect();
        rows.push(Line::from(spans));
    }

    while rows.len() < MAX_ATTEMPTS {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| tile('·', Style::default().fg(Color::DarkGray)))
            .collect();
        rows.push(Line::from(spans));
    }

    let board = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let knowledge = app.session.knowledge();
    let rows: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.bytes()
                    .flat_map(|letter| {
                        tile(char::from(letter), verdict_style(knowledge.get(letter)))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(rows)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let available = session.hint_availability();
    let flag = |on: bool| if on { "ready" } else { "locked" };

    let mut lines = vec![
        Line::from(format!("Possible solutions: {}", session.candidates().len())),
        Line::from(match app.dictionary {
            Some(outcome) => format!("Dictionary matches: {}", outcome.remaining),
            None => "Dictionary matches: ...".to_string(),
        }),
        Line::from(""),
        Line::from(format!("Tab  best guess:  {}", flag(available.best_next_guess))),
        Line::from(format!("?    one letter:  {}", flag(available.one_letter))),
        Line::from(""),
    ];

    match app.revealed {
        Some(RevealedHint::BestGuess(best)) => lines.push(Line::from(vec![
            Span::raw("Try: "),
            Span::styled(
                best.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
        Some(RevealedHint::Letter(hint)) => lines.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))),
        None => {}
    }
    if let Some(outcome) = app.dictionary_pick() {
        lines.push(Line::from(format!("Dictionary pick: {}", outcome.best)));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Hints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(panel, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let attempts = format!(
        "Guess {}/{}",
        (app.session.attempts_used() + 1).min(MAX_ATTEMPTS),
        MAX_ATTEMPTS
    );
    f.render_widget(Paragraph::new(attempts).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help_text = if app.session.state().is_over() {
        "Esc: Quit | F5: New Game | 1-4: Difficulty"
    } else if app.session.history().is_empty() {
        "Enter: Submit | Tab/?: Hint | 1-4: Difficulty | F5: New | Esc: Quit"
    } else {
        "Enter: Submit | Tab/?: Hint | F5: New | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
