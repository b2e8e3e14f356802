//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Normalize a single word list entry
///
/// Returns `None` for blank lines and `#` comments.
fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Load words from a file, one per line
///
/// Words are trimmed and lowercased; blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use codenames_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/board_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize).collect())
}

/// Convert embedded string slice to owned, normalized words
///
/// # Examples
/// ```
/// use codenames_solver::wordlists::loader::words_from_slice;
/// use codenames_solver::wordlists::BOARD_WORDS;
///
/// let words = words_from_slice(BOARD_WORDS);
/// assert_eq!(words.len(), BOARD_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}
