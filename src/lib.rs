//! Bee Solver
//!
//! A Spelling Bee puzzle solver: given one required letter and a set of
//! optional letters, finds every dictionary word that uses only those
//! letters, contains the required letter, and meets a minimum length.
//!
//! # Quick Start
//!
//! ```rust
//! use bee_solver::core::{Letters, Matcher};
//!
//! // Configure the puzzle
//! let letters = Letters::new("a", "bcdefg", 7).unwrap();
//! let matcher = Matcher::new(letters, 4);
//!
//! // Test candidates
//! assert!(matcher.is_valid("face"));
//! assert!(!matcher.is_valid("zeal"));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Interactive console input
pub mod interactive;

// Terminal output formatting
pub mod output;
