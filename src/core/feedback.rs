//! Per-letter feedback for a guess
//!
//! Each letter of a guess is classified as:
//! - `Correct` (right letter, right position)
//! - `Present` (letter is in the target, somewhere else)
//! - `Absent` (letter is not in the target, or all its occurrences are used up)

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Classification of one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Absent,
    Correct,
    Present,
}

/// One letter of a submitted guess together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub letter: char,
    pub status: LetterStatus,
}

/// Feedback for a whole guess
///
/// Tiles are in the guess's own letter order, not the target's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessResult([Tile; WORD_LENGTH]);

impl GuessResult {
    /// Build a result from a guess and the statuses of its letters
    #[must_use]
    pub fn new(guess: &Word, statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        let mut tiles = [Tile {
            letter: ' ',
            status: LetterStatus::Absent,
        }; WORD_LENGTH];

        for (tile, (letter, status)) in tiles.iter_mut().zip(guess.chars().zip(statuses)) {
            *tile = Tile { letter, status };
        }

        Self(tiles)
    }

    /// Get the tiles, left to right
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.0
    }

    /// Get only the statuses, left to right
    #[must_use]
    pub fn statuses(&self) -> [LetterStatus; WORD_LENGTH] {
        self.0.map(|tile| tile.status)
    }

    /// The guessed word, as typed
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|tile| tile.letter).collect()
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|tile| tile.status == LetterStatus::Correct)
    }
}

/// Score `guess` against `target`
///
/// Implements Wordle's feedback rules, including duplicate letters.
///
/// # Algorithm
/// 1. Start from the letter histogram of the target
/// 2. First pass: mark exact matches `Correct` and take them from the histogram
/// 3. Second pass, left to right: mark a letter `Present` while its count lasts
///
/// Surplus copies of a letter beyond its count in the target stay `Absent`.
///
/// # Examples
/// ```
/// use wordle_terminal::core::{LetterStatus::*, Word, score};
///
/// let target = Word::new("SPOIL").unwrap();
/// let guess = Word::new("QUILL").unwrap();
///
/// assert_eq!(
///     score(&guess, &target).statuses(),
///     [Absent, Absent, Present, Absent, Correct]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> GuessResult {
    let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
    let mut remaining = target.letter_counts();

    for (status, (letter, wanted)) in statuses
        .iter_mut()
        .zip(guess.letters().iter().zip(target.letters()))
    {
        if letter == wanted {
            *status = LetterStatus::Correct;
            if let Some(count) = remaining.get_mut(letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (status, letter) in statuses.iter_mut().zip(guess.letters()) {
        if *status == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(letter)
            && *count > 0
        {
            *status = LetterStatus::Present;
            *count -= 1;
        }
    }

    GuessResult::new(guess, statuses)
}
