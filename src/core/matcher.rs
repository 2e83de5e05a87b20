//! Candidate word matching
//!
//! The Matcher is the whole decision procedure of the solver: given a letter
//! configuration and a minimum length, it decides word-by-word whether a
//! dictionary entry is a valid answer. No regex needed; a set-membership walk
//! plus a required-letter presence check produces the same accept set.

use crate::core::Letters;

/// Minimum answer length in a standard puzzle
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Pure predicate deciding whether a candidate word is a valid answer
///
/// Built once from a [`Letters`] configuration and reused for every
/// candidate. Stateless and side-effect free.
#[derive(Debug, Clone)]
pub struct Matcher {
    letters: Letters,
    min_length: usize,
}

impl Matcher {
    /// Create a matcher for the given letters and minimum answer length
    #[must_use]
    pub const fn new(letters: Letters, min_length: usize) -> Self {
        Self { letters, min_length }
    }

    /// Check whether a candidate word is a valid answer
    ///
    /// A candidate is valid iff it is at least the minimum length, every
    /// character is the required letter or an optional letter, and the
    /// required letter occurs at least once. Matching is case-insensitive.
    ///
    /// # Examples
    /// ```
    /// use bee_solver::core::{Letters, Matcher};
    ///
    /// let letters = Letters::new("a", "bcdefg", 7).unwrap();
    /// let matcher = Matcher::new(letters, 4);
    ///
    /// assert!(matcher.is_valid("face"));
    /// assert!(!matcher.is_valid("bee")); // no 'a'
    /// assert!(!matcher.is_valid("cab")); // too short
    /// ```
    #[must_use]
    pub fn is_valid(&self, candidate: &str) -> bool {
        let mut length = 0;
        let mut has_required = false;

        for ch in candidate.chars() {
            let ch = ch.to_ascii_lowercase();
            if !self.letters.allows(ch) {
                return false;
            }
            if ch == self.letters.required() {
                has_required = true;
            }
            length += 1;
        }

        has_required && length >= self.min_length
    }
}
