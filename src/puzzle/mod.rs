//! Where the target word comes from
//!
//! The daily puzzle is fetched from the New York Times; offline play draws a
//! random answer from the embedded list.

mod nyt;
mod offline;

pub use nyt::{NYT_BASE_URL, NytSource, decode_response};
pub use offline::OfflineSource;

use crate::core::{Word, WordError};
use thiserror::Error;

/// A target word and the number it is published under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub solution: Word,
    pub number: u32,
}

impl Puzzle {
    #[must_use]
    pub const fn new(solution: Word, number: u32) -> Self {
        Self { solution, number }
    }
}

/// Anything that can hand out today's puzzle
pub trait PuzzleSource {
    /// Produce the puzzle to play
    ///
    /// # Errors
    ///
    /// Returns a `PuzzleError` if no puzzle could be obtained.
    fn todays_puzzle(&self) -> Result<Puzzle, PuzzleError>;
}

/// Failure to obtain a puzzle
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("unable to fetch today's wordle: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("NYT API returned a non-200 status: {0}")]
    Status(u16),

    #[error("unable to decode today's wordle json response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("today's solution is not a valid word: {0}")]
    InvalidSolution(#[from] WordError),

    #[error("the answer list is empty")]
    NoAnswers,
}
