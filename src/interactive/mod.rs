//! Interactive console input

pub mod prompts;

pub use prompts::{prompt_optional, prompt_required};
