//! Word lists for Codenames
//!
//! Provides the embedded board word list compiled into the binary and a loader for
//! custom board or vocabulary lists.

mod embedded;
pub mod loader;

pub use embedded::{BOARD_WORDS, BOARD_WORDS_COUNT};
