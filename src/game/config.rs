//! Options applied when a game is created

use super::GameState;
use crate::core::Word;

/// How to set up a game on top of the puzzle
///
/// Applied in a fixed order: custom word, then hard mode, then resume.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Play this word instead of the puzzle's solution (puzzle number 0)
    pub word: Option<Word>,
    pub hard_mode: bool,
    /// A saved game; resumed only if its target equals the current one
    pub saved: Option<GameState>,
}

impl GameConfig {
    #[must_use]
    pub fn with_word(mut self, word: Word) -> Self {
        self.word = Some(word);
        self
    }

    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    #[must_use]
    pub fn with_saved(mut self, saved: Option<GameState>) -> Self {
        self.saved = saved;
        self
    }
}
