//! Formatting utilities for terminal output

use crate::core::{Attempt, Verdict};
use crate::game::LetterKnowledge;
use colored::{ColoredString, Colorize};

/// One letter as a coloured tile
#[must_use]
pub fn tile(letter: u8, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn colored_attempt(attempt: &Attempt) -> String {
    attempt
        .letters()
        .map(|(_, letter, verdict)| tile(letter, Some(verdict)).to_string())
        .collect()
}

/// The alphabet coloured by what is known about each letter
#[must_use]
pub fn keyboard_line(knowledge: &LetterKnowledge) -> String {
    (b'a'..=b'z')
        .map(|letter| {
            let key = char::from(letter.to_ascii_uppercase()).to_string();
            match knowledge.get(letter) {
                Some(Verdict::Correct) => key.green().bold().to_string(),
                Some(Verdict::Present) => key.yellow().bold().to_string(),
                Some(Verdict::Absent) => key.bright_black().to_string(),
                None => key,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn attempt_row_contains_every_letter() {
        colored::control::set_override(false);
        let attempt = Attempt::scored(Word::new("crane").unwrap(), &Word::new("crank").unwrap());
        assert_eq!(colored_attempt(&attempt), " C  R  A  N  E ");
    }

    #[test]
    fn keyboard_lists_alphabet() {
        colored::control::set_override(false);
        let line = keyboard_line(&LetterKnowledge::new());
        assert!(line.starts_with("A B C"));
        assert!(line.ends_with("Y Z"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
