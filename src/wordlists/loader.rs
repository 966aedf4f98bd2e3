//! Word list loading
//!
//! Word lists are newline-separated files of five-letter words: one list of
//! possible answers (the restricted corpus) and one superset of all accepted
//! guesses (the expanded corpus).

use crate::core::Word;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Blank lines and entries that fail [`Word`] validation are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Load words from a file, substituting an empty list on failure
///
/// A load failure is reported to stderr and is not fatal: the caller keeps
/// running with an empty list, and the solver surfaces that as an exhausted
/// session instead of crashing.
#[must_use]
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Vec<Word> {
    let path = path.as_ref();
    match load_from_file(path) {
        Ok(words) => words,
        Err(err) => {
            eprintln!(
                "{} could not read word list {}: {err}",
                "warning:".yellow().bold(),
                path.display()
            );
            Vec::new()
        }
    }
}
