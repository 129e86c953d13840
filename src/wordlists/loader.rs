//! Word list loading utilities
//!
//! Vocabularies are newline-delimited words. Blank lines are skipped and
//! every other line must be a word of the configured length.

use super::embedded::WORDS;
use crate::core::CandidateSet;
use crate::error::SolverError;
use log::debug;
use std::fs;
use std::path::Path;

/// Load a vocabulary from a file
///
/// # Errors
/// Returns `Io` if the file cannot be read, and `InvalidLength` or
/// `InvalidWord` for the first line that is not a word of `word_len`
/// letters.
///
/// # Examples
/// ```no_run
/// use wordle_alphabeta::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_len: usize,
) -> Result<CandidateSet, SolverError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| SolverError::Io(format!("{}: {e}", path.display())))?;

    let words = parse_words(&content, word_len)?;
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a newline-delimited vocabulary
///
/// # Errors
/// Same as [`load_from_file`], minus the I/O failures.
pub fn parse_words(content: &str, word_len: usize) -> Result<CandidateSet, SolverError> {
    let lines = content.lines().map(str::trim).filter(|line| !line.is_empty());
    CandidateSet::parse(lines, word_len)
}

/// The vocabulary compiled into the binary
///
/// # Errors
/// Returns `InvalidLength` unless `word_len` is five.
///
/// # Examples
/// ```
/// use wordle_alphabeta::wordlists::loader::builtin;
/// use wordle_alphabeta::wordlists::WORDS;
///
/// let words = builtin(5).unwrap();
/// assert_eq!(words.len(), WORDS.len());
/// assert!(builtin(6).is_err());
/// ```
pub fn builtin(word_len: usize) -> Result<CandidateSet, SolverError> {
    CandidateSet::parse(WORDS, word_len)
}
