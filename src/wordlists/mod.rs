//! Dictionary sources for puzzle solving
//!
//! Provides the embedded default word list compiled into the binary plus a
//! loader for external word list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
