//! Command implementations

pub mod solve;

pub use solve::{SolveConfig, SolveResult, find_words, solve_puzzle};
