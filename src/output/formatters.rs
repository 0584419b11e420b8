//! Formatting utilities for guess feedback

use crate::core::{GuessResult, LetterStatus};

pub const CORRECT_SQUARE: char = '🟩';
pub const PRESENT_SQUARE: char = '🟨';
pub const ABSENT_SQUARE: char = '⬜';

/// Keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Square glyph for one status
#[must_use]
pub const fn status_square(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => CORRECT_SQUARE,
        LetterStatus::Present => PRESENT_SQUARE,
        LetterStatus::Absent => ABSENT_SQUARE,
    }
}

/// Format a guess result as emoji string, in guess order
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result
        .tiles()
        .iter()
        .map(|tile| status_square(tile.status))
        .collect()
}
