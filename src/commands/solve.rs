//! Puzzle solving command
//!
//! Filters a dictionary against a letter configuration and returns every
//! valid answer in dictionary order.

use crate::core::{DEFAULT_MIN_LENGTH, DEFAULT_TOTAL_LETTERS, Letters, LettersError, Matcher};

/// Configuration for solving a puzzle
pub struct SolveConfig {
    pub required: String,
    pub optional: String,
    pub min_length: usize,
    pub total_letters: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(required: String, optional: String) -> Self {
        Self {
            required,
            optional,
            min_length: DEFAULT_MIN_LENGTH,
            total_letters: DEFAULT_TOTAL_LETTERS,
        }
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    /// Accepted words, in dictionary order
    pub words: Vec<String>,
    /// Number of candidates scanned
    pub total_scanned: usize,
}

/// Filter candidates through a matcher, preserving input order
///
/// Each candidate is trimmed of surrounding whitespace before evaluation,
/// so raw dictionary lines can be streamed straight through.
pub fn find_words<S: AsRef<str>>(matcher: &Matcher, candidates: &[S]) -> Vec<String> {
    candidates
        .iter()
        .map(|candidate| candidate.as_ref().trim())
        .filter(|word| matcher.is_valid(word))
        .map(ToString::to_string)
        .collect()
}

/// Solve a puzzle against the given candidate list
///
/// Builds the matcher once from the configuration, then streams every
/// candidate through it.
///
/// # Errors
///
/// Returns `LettersError` if the configured letters have the wrong lengths.
/// Length violations surface here, before any matching occurs.
pub fn solve_puzzle<S: AsRef<str>>(
    config: &SolveConfig,
    candidates: &[S],
) -> Result<SolveResult, LettersError> {
    let letters = Letters::new(&config.required, &config.optional, config.total_letters)?;
    let matcher = Matcher::new(letters, config.min_length);

    let words = find_words(&matcher, candidates);

    Ok(SolveResult {
        words,
        total_scanned: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_filters_dictionary_in_order() {
        let candidates = ["face", "bee", "cab", "zeal", "aaaa"];
        let config = SolveConfig::new("a".to_string(), "bcdefg".to_string());

        let result = solve_puzzle(&config, &candidates).unwrap();

        assert_eq!(result.words, vec!["face", "aaaa"]);
        assert_eq!(result.total_scanned, 5);
    }

    #[test]
    fn solve_empty_dictionary() {
        let candidates: [&str; 0] = [];
        let config = SolveConfig::new("a".to_string(), "bcdefg".to_string());

        let result = solve_puzzle(&config, &candidates).unwrap();

        assert!(result.words.is_empty());
        assert_eq!(result.total_scanned, 0);
    }

    #[test]
    fn solve_invalid_letters_is_error() {
        let candidates = ["face"];

        let config = SolveConfig::new("ab".to_string(), "cdefgh".to_string());
        assert!(solve_puzzle(&config, &candidates).is_err());

        let config = SolveConfig::new("a".to_string(), "bc".to_string());
        assert!(solve_puzzle(&config, &candidates).is_err());
    }

    #[test]
    fn solve_respects_min_length_override() {
        let candidates = ["cab", "face"];
        let mut config = SolveConfig::new("a".to_string(), "bcdefg".to_string());
        config.min_length = 3;

        let result = solve_puzzle(&config, &candidates).unwrap();

        assert_eq!(result.words, vec!["cab", "face"]);
    }

    #[test]
    fn solve_uppercase_input() {
        let candidates = ["FACE", "BEE"];
        let config = SolveConfig::new("A".to_string(), "BCDEFG".to_string());

        let result = solve_puzzle(&config, &candidates).unwrap();

        assert_eq!(result.words, vec!["FACE"]);
    }

    #[test]
    fn find_words_trims_candidates() {
        let letters = Letters::new("a", "bcdefg", 7).unwrap();
        let matcher = Matcher::new(letters, 4);

        let candidates = ["  face  ", "aaaa\t", ""];
        let words = find_words(&matcher, &candidates);

        assert_eq!(words, vec!["face", "aaaa"]);
    }

    #[test]
    fn solve_against_embedded_dictionary() {
        use crate::wordlists::WORDS;

        // 'e' required, optional letters spelling out common endings
        let config = SolveConfig::new("e".to_string(), "acdfgr".to_string());
        let result = solve_puzzle(&config, WORDS).unwrap();

        assert_eq!(result.total_scanned, WORDS.len());
        for word in &result.words {
            assert!(word.contains('e'));
            assert!(word.len() >= 4);
            assert!(word.chars().all(|c| "eacdfgr".contains(c)));
        }
        // "face" is in the embedded list and matches
        assert!(result.words.iter().any(|w| w == "face"));
    }
}
