//! Game progress record
//!
//! `GameState` is both the engine's mutable state and the record written to
//! the state file. Its field set is the persisted format.

use super::error::TryError;
use crate::core::{GuessResult, LetterStatus, WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of guesses a player gets
pub const MAX_ROUNDS: usize = 6;

/// A saved game that cannot have come from play
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("round {0} is past the last round")]
    RoundOutOfRange(usize),

    #[error("round {round} does not match {results} recorded guesses")]
    HistoryMismatch { round: usize, results: usize },

    #[error("discovered letter {letter} at position {position} is not in the word")]
    WrongDiscovered { position: usize, letter: char },
}

/// Progress of one puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct GameState {
    round: usize,
    puzzle_number: u32,
    wordle: Word,
    hard_mode: bool,
    results: Vec<GuessResult>,
    discovered: [Option<char>; WORD_LENGTH],
    hints: Vec<char>,
    used: Vec<char>,
}

/// `GameState` as read from disk, before it is checked
#[derive(Deserialize)]
struct SavedGame {
    round: usize,
    puzzle_number: u32,
    wordle: Word,
    hard_mode: bool,
    results: Vec<GuessResult>,
    discovered: [Option<char>; WORD_LENGTH],
    hints: Vec<char>,
    used: Vec<char>,
}

impl TryFrom<SavedGame> for GameState {
    type Error = InvalidState;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        if saved.round > MAX_ROUNDS {
            return Err(InvalidState::RoundOutOfRange(saved.round));
        }
        if saved.results.len() != saved.round {
            return Err(InvalidState::HistoryMismatch {
                round: saved.round,
                results: saved.results.len(),
            });
        }
        for (position, found) in saved.discovered.iter().enumerate() {
            if let Some(letter) = *found
                && letter != saved.wordle.letter_at(position)
            {
                return Err(InvalidState::WrongDiscovered { position, letter });
            }
        }

        Ok(Self {
            round: saved.round,
            puzzle_number: saved.puzzle_number,
            wordle: saved.wordle,
            hard_mode: saved.hard_mode,
            results: saved.results,
            discovered: saved.discovered,
            hints: saved.hints,
            used: saved.used,
        })
    }
}

impl GameState {
    /// A fresh game for `wordle`
    #[must_use]
    pub fn new(wordle: Word, puzzle_number: u32, hard_mode: bool) -> Self {
        Self {
            round: 0,
            puzzle_number,
            wordle,
            hard_mode,
            results: Vec::new(),
            discovered: [None; WORD_LENGTH],
            hints: Vec::new(),
            used: Vec::new(),
        }
    }

    /// Number of accepted guesses so far
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn puzzle_number(&self) -> u32 {
        self.puzzle_number
    }

    /// The target word
    ///
    /// Only meant to be shown to the player once the game is over.
    #[must_use]
    pub const fn wordle(&self) -> &Word {
        &self.wordle
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    pub(crate) fn set_hard_mode(&mut self, hard_mode: bool) {
        self.hard_mode = hard_mode;
    }

    /// Feedback of every accepted guess, in submission order
    #[must_use]
    pub fn results(&self) -> &[GuessResult] {
        &self.results
    }

    /// Letters known to be in their final position
    #[must_use]
    pub const fn discovered(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.discovered
    }

    /// Letters known to be in the word, in discovery order (duplicates kept)
    #[must_use]
    pub fn hints(&self) -> &[char] {
        &self.hints
    }

    /// Every letter ever guessed, in typing order
    #[must_use]
    pub fn used(&self) -> &[char] {
        &self.used
    }

    /// True once the discovered letters spell the target
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.discovered
            .iter()
            .zip(self.wordle.chars())
            .all(|(found, letter)| *found == Some(letter))
    }

    /// True once all six guesses were used without winning
    #[must_use]
    pub fn is_lost(&self) -> bool {
        !self.is_won() && self.round >= MAX_ROUNDS
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_won() || self.round >= MAX_ROUNDS
    }

    /// Best status known for a letter across all guesses
    ///
    /// `None` if the letter was never guessed.
    #[must_use]
    pub fn letter_status(&self, letter: char) -> Option<LetterStatus> {
        if !self.used.contains(&letter) {
            None
        } else if self.discovered.contains(&Some(letter)) {
            Some(LetterStatus::Correct)
        } else if self.hints.contains(&letter) {
            Some(LetterStatus::Present)
        } else {
            Some(LetterStatus::Absent)
        }
    }

    /// Check a guess against everything hard mode requires
    ///
    /// Discovered positions first, then hinted letters in discovery order.
    pub(crate) fn check_hard_mode(&self, guess: &Word) -> Result<(), TryError> {
        for (position, found) in self.discovered.iter().enumerate() {
            if let Some(letter) = *found
                && guess.letter_at(position) != letter
            {
                return Err(TryError::wrong_letter(position, letter));
            }
        }

        match self.hints.iter().find(|&&letter| !guess.contains(letter)) {
            Some(&missing) => Err(TryError::MissingHintedLetter(missing)),
            None => Ok(()),
        }
    }

    /// Fold an accepted guess and its feedback into the state
    pub(crate) fn record(&mut self, guess: &Word, result: GuessResult) {
        for (position, tile) in result.tiles().iter().enumerate() {
            self.used.push(tile.letter);
            if tile.status == LetterStatus::Correct {
                self.discovered[position] = Some(tile.letter);
            }
        }

        // Every occurrence counts, even one scored Absent because its
        // duplicates were exhausted.
        self.hints
            .extend(guess.chars().filter(|&letter| self.wordle.contains(letter)));

        self.results.push(result);
        self.round += 1;
    }
}
