//! Terminal output formatting

pub mod display;

pub use display::{count_line, print_solve_result};
