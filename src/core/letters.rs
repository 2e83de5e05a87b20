//! Puzzle letter configuration
//!
//! A Letters value captures the honeycomb for one puzzle: the single required
//! letter plus the surrounding optional letters.

use rustc_hash::FxHashSet;
use std::fmt;

/// Total letters in a standard puzzle (one required + six optional)
pub const DEFAULT_TOTAL_LETTERS: usize = 7;

/// The letter configuration for a single puzzle
///
/// Holds the required letter and a membership set of optional letters, both
/// normalized to lowercase at construction. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letters {
    required: char,
    optional: FxHashSet<char>,
}

/// Error type for invalid letter configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LettersError {
    RequiredLength(usize),
    OptionalLength { expected: usize, actual: usize },
}

impl fmt::Display for LettersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredLength(len) => {
                write!(f, "Required letter must be exactly 1 character, got {len}")
            }
            Self::OptionalLength { expected, actual } => {
                write!(
                    f,
                    "Optional letters must be exactly {expected} characters, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for LettersError {}

impl Letters {
    /// Create a letter configuration from raw user input
    ///
    /// `required` must be exactly one character; `optional` must be exactly
    /// `total_letters - 1` characters. Duplicates in `optional` collapse into
    /// set membership. Input is lowercased, so `"A"` and `"a"` build the same
    /// configuration.
    ///
    /// # Errors
    /// Returns `LettersError` if either input has the wrong length. Lengths
    /// are counted in characters, not bytes.
    ///
    /// # Examples
    /// ```
    /// use bee_solver::core::Letters;
    ///
    /// let letters = Letters::new("a", "bcdefg", 7).unwrap();
    /// assert_eq!(letters.required(), 'a');
    ///
    /// assert!(Letters::new("ab", "cdefgh", 7).is_err());
    /// ```
    pub fn new(required: &str, optional: &str, total_letters: usize) -> Result<Self, LettersError> {
        let required_len = required.chars().count();
        if required_len != 1 {
            return Err(LettersError::RequiredLength(required_len));
        }

        let expected = total_letters - 1;
        let optional_len = optional.chars().count();
        if optional_len != expected {
            return Err(LettersError::OptionalLength {
                expected,
                actual: optional_len,
            });
        }

        let required = required
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase())
            .unwrap_or_default();
        let optional: FxHashSet<char> = optional
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Ok(Self { required, optional })
    }

    /// Get the required letter (lowercase)
    #[inline]
    #[must_use]
    pub const fn required(&self) -> char {
        self.required
    }

    /// Check whether a lowercase character is allowed in an answer
    #[inline]
    #[must_use]
    pub fn allows(&self, ch: char) -> bool {
        ch == self.required || self.optional.contains(&ch)
    }
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.required)?;
        for ch in &self.optional {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_creation_valid() {
        let letters = Letters::new("a", "bcdefg", 7).unwrap();
        assert_eq!(letters.required(), 'a');
        assert!(letters.allows('a'));
        assert!(letters.allows('g'));
        assert!(!letters.allows('z'));
    }

    #[test]
    fn letters_creation_uppercase_normalized() {
        let upper = Letters::new("A", "BCDEFG", 7).unwrap();
        let lower = Letters::new("a", "bcdefg", 7).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn letters_creation_invalid_required_length() {
        assert!(matches!(
            Letters::new("", "bcdefg", 7),
            Err(LettersError::RequiredLength(0))
        ));
        assert!(matches!(
            Letters::new("ab", "cdefgh", 7),
            Err(LettersError::RequiredLength(2))
        ));
    }

    #[test]
    fn letters_creation_invalid_optional_length() {
        assert!(matches!(
            Letters::new("a", "bcd", 7),
            Err(LettersError::OptionalLength {
                expected: 6,
                actual: 3
            })
        ));
        assert!(matches!(
            Letters::new("a", "bcdefgh", 7),
            Err(LettersError::OptionalLength {
                expected: 6,
                actual: 7
            })
        ));
    }

    #[test]
    fn letters_duplicates_collapse() {
        // Six input characters, three distinct letters
        let letters = Letters::new("a", "bbccdd", 7).unwrap();
        assert!(letters.allows('b'));
        assert!(letters.allows('c'));
        assert!(letters.allows('d'));
        assert!(!letters.allows('e'));
    }

    #[test]
    fn letters_custom_total() {
        let letters = Letters::new("x", "yz", 3).unwrap();
        assert!(letters.allows('x'));
        assert!(letters.allows('y'));
        assert!(!letters.allows('w'));

        assert!(Letters::new("x", "yz", 4).is_err());
    }

    #[test]
    fn letters_error_messages() {
        let err = Letters::new("ab", "cdefgh", 7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Required letter must be exactly 1 character, got 2"
        );

        let err = Letters::new("a", "bc", 7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Optional letters must be exactly 6 characters, got 2"
        );
    }
}
