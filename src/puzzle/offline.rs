//! Random puzzle for offline play

use super::{Puzzle, PuzzleError, PuzzleSource};
use crate::wordlists::WordList;

/// Draws a random answer; offline puzzles are numbered 0
#[derive(Debug, Clone, Copy)]
pub struct OfflineSource<'a> {
    words: &'a WordList,
}

impl<'a> OfflineSource<'a> {
    #[must_use]
    pub const fn new(words: &'a WordList) -> Self {
        Self { words }
    }
}

impl PuzzleSource for OfflineSource<'_> {
    fn todays_puzzle(&self) -> Result<Puzzle, PuzzleError> {
        self.words
            .random_answer(&mut rand::rng())
            .map(|word| Puzzle::new(word.clone(), 0))
            .ok_or(PuzzleError::NoAnswers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_from_answers() {
        let words = WordList::from_text("aahed\n", "cedar\nlight\n");
        let puzzle = OfflineSource::new(&words).todays_puzzle().unwrap();

        assert!(words.answers().contains(&puzzle.solution));
        assert_eq!(puzzle.number, 0);
    }

    #[test]
    fn empty_answers_is_an_error() {
        let words = WordList::from_text("aahed\n", "");
        let err = OfflineSource::new(&words).todays_puzzle().unwrap_err();
        assert!(matches!(err, PuzzleError::NoAnswers));
    }
}
