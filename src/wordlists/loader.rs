//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Both stop after `limit` valid words.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load up to `limit` words from a file, one word per line
///
/// Blank lines and lines that are not a valid word are skipped and do not count
/// toward the limit.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_rl::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist.txt", 10_000).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, limit: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(content.lines(), limit))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman_rl::wordlists::loader::words_from_slice;
/// use hangman_rl::wordlists::WORDLIST;
///
/// let words = words_from_slice(WORDLIST, 100);
/// assert_eq!(words.len(), 100);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], limit: usize) -> Vec<Word> {
    parse_words(slice.iter().copied(), limit)
}

fn parse_words<'a>(lines: impl Iterator<Item = &'a str>, limit: usize) -> Vec<Word> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .take(limit)
        .collect()
}
