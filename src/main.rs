//! Bee Solver - CLI
//!
//! Spelling Bee puzzle solver: supply the letters as flags or answer the
//! interactive prompts, and every valid dictionary word prints in order.

use anyhow::{Context, Result, ensure};
use bee_solver::{
    commands::{SolveConfig, solve_puzzle},
    core::{DEFAULT_MIN_LENGTH, DEFAULT_TOTAL_LETTERS},
    interactive::{prompt_optional, prompt_required},
    output::print_solve_result,
    wordlists::{WORDS, loader::candidates_from_slice},
};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bee_solver",
    about = "Spelling Bee solver - finds every valid word for a letter set",
    version,
    author
)]
struct Cli {
    /// The single letter every answer must contain (prompted if omitted)
    #[arg(short, long)]
    required: Option<String>,

    /// The remaining puzzle letters (prompted if omitted)
    #[arg(short, long)]
    optional: Option<String>,

    /// Path to a word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long)]
    wordlist: Option<String>,

    /// Minimum answer length
    #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Total puzzle letters, required letter included
    #[arg(short = 't', long, default_value_t = DEFAULT_TOTAL_LETTERS)]
    total_letters: usize,
}

/// Load the candidate list based on the -w flag
fn load_candidates(wordlist: Option<&str>) -> Result<Vec<String>> {
    use bee_solver::wordlists::loader::load_from_file;

    match wordlist {
        // Default: embedded dictionary
        None => Ok(candidates_from_slice(WORDS)),
        Some(path) => {
            load_from_file(path).with_context(|| format!("failed to read word list '{path}'"))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    ensure!(
        cli.total_letters >= 2,
        "total letters must be at least 2 (one required + one optional)"
    );

    // Open the dictionary before prompting so a bad path fails fast
    let candidates = load_candidates(cli.wordlist.as_deref())?;

    // Flags win; missing letters fall back to the interactive prompts
    let required = match cli.required {
        Some(required) => required,
        None => prompt_required().context("failed to read required letter")?,
    };
    let optional = match cli.optional {
        Some(optional) => optional,
        None => {
            prompt_optional(cli.total_letters).context("failed to read optional letters")?
        }
    };

    let config = SolveConfig {
        required,
        optional,
        min_length: cli.min_length,
        total_letters: cli.total_letters,
    };

    let result = solve_puzzle(&config, &candidates)?;
    print_solve_result(&result);

    Ok(())
}
