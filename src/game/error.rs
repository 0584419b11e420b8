//! Errors returned when a guess is rejected

use thiserror::Error;

/// Ordinal names of the five letter positions
pub const ORDINALS: [&str; 5] = ["1st", "2nd", "3rd", "4th", "5th"];

/// Why a guess was rejected
///
/// None of these end the game: the round is not advanced and the player may
/// try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TryError {
    /// The guess is not in the permitted word set
    #[error("Not in word list: {0}")]
    NotInWordList(String),

    /// Hard mode: a discovered letter was not reused in its position
    #[error("{ordinal} letter must be {letter}")]
    WrongLetterAtPosition { ordinal: &'static str, letter: char },

    /// Hard mode: a letter known to be in the word is missing
    #[error("Guess must contain {0}")]
    MissingHintedLetter(char),

    #[error("The game is already over")]
    GameOver,
}

impl TryError {
    pub(crate) const fn wrong_letter(position: usize, letter: char) -> Self {
        Self::WrongLetterAtPosition {
            ordinal: ORDINALS[position],
            letter,
        }
    }
}
