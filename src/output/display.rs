//! Display functions for command results

use crate::commands::SolveResult;
use colored::Colorize;

/// Print the result of solving a puzzle
///
/// Accepted words print one per line in dictionary order, followed by the
/// count line. Both stay uncolored so the output pipes cleanly; only the
/// header is styled.
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "Matching words:".bright_cyan().bold());

    for word in &result.words {
        println!("{word}");
    }

    println!("{}", count_line(result.words.len()));
}

/// Format the final count line
#[must_use]
pub fn count_line(count: usize) -> String {
    format!("{count} word(s) found.")
}
