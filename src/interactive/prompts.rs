//! Interactive letter prompts
//!
//! Blocking stdin prompts with a validated-read loop: on a length mismatch
//! the user is told what was expected and asked again, indefinitely.

use std::io::{self, Write};

/// Prompt for the required letter until exactly one character is entered
///
/// # Errors
///
/// Returns an error only if stdin or stdout fails; wrong-length input is
/// handled by re-prompting.
pub fn prompt_required() -> io::Result<String> {
    prompt_exact_length("Required letter", 1)
}

/// Prompt for the optional letters until exactly `total_letters - 1`
/// characters are entered
///
/// # Errors
///
/// Returns an error only if stdin or stdout fails; wrong-length input is
/// handled by re-prompting.
pub fn prompt_optional(total_letters: usize) -> io::Result<String> {
    prompt_exact_length("Optional letters", total_letters - 1)
}

fn prompt_exact_length(prompt: &str, expected: usize) -> io::Result<String> {
    loop {
        let input = get_user_input(prompt)?;

        if input.chars().count() == expected {
            return Ok(input);
        }

        let noun = if expected == 1 { "letter" } else { "letters" };
        println!("Invalid input. Expecting {expected} {noun}.");
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
