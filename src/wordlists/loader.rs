//! Word list loading utilities
//!
//! Turns embedded constants or user-supplied files into `Word` vectors.

use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file, one per line
///
/// Blank lines are ignored. Lines that are not five ASCII letters are skipped
/// with a warning so a stray entry does not make the whole list unusable.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use five_letters::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let words = words_from_lines(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse newline-separated words, skipping invalid entries
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(entry = line, error = %e, "skipping word list entry");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use five_letters::wordlists::loader::words_from_slice;
/// use five_letters::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_lines_trims_and_normalises() {
        let words = words_from_lines("  CRANE\n\nslate \nsh0rt\nirate\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn load_from_missing_file_reports_path() {
        let err = load_from_file("definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("five_letters_{}.txt", std::process::id()));
        fs::write(&path, "mango\nalloy\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "alloy");
    }
}
