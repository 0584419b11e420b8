//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! and the `WordList` used to validate guesses and draw offline puzzles.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use list::WordList;
