//! The permitted-guess set and the answer pool

use super::loader::{words_from_slice, words_from_text};
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Immutable word lists shared by every game
///
/// `permitted` is the union of the allowed guesses and the answers.
#[derive(Debug, Clone)]
pub struct WordList {
    permitted: FxHashSet<Word>,
    answers: Vec<Word>,
}

impl WordList {
    /// Build the lists from allowed guesses and answers
    #[must_use]
    pub fn new(allowed: Vec<Word>, answers: Vec<Word>) -> Self {
        let permitted = allowed.into_iter().chain(answers.iter().cloned()).collect();
        Self { permitted, answers }
    }

    /// Build the lists from two newline-delimited text blobs
    #[must_use]
    pub fn from_text(allowed: &str, answers: &str) -> Self {
        Self::new(words_from_text(allowed), words_from_text(answers))
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ALLOWED), words_from_slice(ANSWERS))
    }

    /// Check if a word may be guessed
    #[inline]
    #[must_use]
    pub fn is_permitted(&self, word: &Word) -> bool {
        self.permitted.contains(word)
    }

    /// Number of distinct permitted guesses
    #[must_use]
    pub fn permitted_count(&self) -> usize {
        self.permitted.len()
    }

    /// The answer pool
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Draw one answer uniformly at random
    ///
    /// Returns `None` if the answer pool is empty.
    pub fn random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.answers.choose(rng)
    }
}
