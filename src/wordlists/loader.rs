//! Dictionary loading utilities
//!
//! Provides functions to load candidate words from files or use the embedded
//! default list.

use std::fs;
use std::io;
use std::path::Path;

/// Load candidate words from a file
///
/// Reads a plain-text file with one candidate per line and trims each line of
/// surrounding whitespace. Empty lines are kept as length-0 candidates; the
/// matcher's length rule rejects them later. The file handle is released on
/// all paths, including errors.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use bee_solver::wordlists::loader::load_from_file;
///
/// let candidates = load_from_file("wordlists/twl06.txt").unwrap();
/// println!("Loaded {} candidates", candidates.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let candidates = content.lines().map(|line| line.trim().to_string()).collect();

    Ok(candidates)
}

/// Convert an embedded string slice to owned candidates
///
/// # Examples
/// ```
/// use bee_solver::wordlists::WORDS;
/// use bee_solver::wordlists::loader::candidates_from_slice;
///
/// let candidates = candidates_from_slice(WORDS);
/// assert_eq!(candidates.len(), WORDS.len());
/// ```
#[must_use]
pub fn candidates_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.trim().to_string()).collect()
}
