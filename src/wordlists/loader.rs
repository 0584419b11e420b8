//! Word list loading utilities
//!
//! Turns embedded constants or newline-delimited text into `Word`s.

use crate::core::Word;

/// Convert newline-delimited text into words
///
/// Blank lines and entries that are not 5 ASCII letters are skipped.
///
/// # Examples
/// ```
/// use wordle_terminal::wordlists::loader::words_from_text;
///
/// let words = words_from_text("crane\nslate\n\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "CRANE");
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<Word> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_terminal::wordlists::loader::words_from_slice;
/// use wordle_terminal::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
