//! Core domain types for puzzle solving
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are pure, testable, and have clear accept/reject semantics.

mod letters;
mod matcher;

pub use letters::{DEFAULT_TOTAL_LETTERS, Letters, LettersError};
pub use matcher::{DEFAULT_MIN_LENGTH, Matcher};
