//! Core domain types for Wordle
//!
//! Words and the per-letter feedback of a guess. Everything here is pure:
//! no I/O, no game state.

mod feedback;
mod word;

pub use feedback::{GuessResult, LetterStatus, Tile, score};
pub use word::{WORD_LENGTH, Word, WordError};
