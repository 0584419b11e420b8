//! The game engine
//!
//! Accepts guesses, scores them and tracks progress until the puzzle is won
//! or six guesses are used up.

use super::{GameConfig, GameState, TryError};
use crate::core::{GuessResult, Word, score};
use crate::output::share_string;
use crate::puzzle::Puzzle;
use crate::wordlists::WordList;

/// One puzzle being played
///
/// Single-threaded: callers that drive it from several places must serialize
/// their calls.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    words: &'a WordList,
    state: GameState,
}

impl<'a> Game<'a> {
    /// Set up a game for `puzzle`
    ///
    /// The saved game in `config` replaces the fresh one only when both have
    /// the same target word.
    #[must_use]
    pub fn new(words: &'a WordList, puzzle: Puzzle, config: GameConfig) -> Self {
        let mut state = match config.word {
            Some(word) => GameState::new(word, 0, false),
            None => GameState::new(puzzle.solution, puzzle.number, false),
        };

        state.set_hard_mode(config.hard_mode);

        if let Some(saved) = config.saved
            && saved.wordle() == state.wordle()
        {
            state = saved;
        }

        Self { words, state }
    }

    /// Resume a saved game as-is
    #[must_use]
    pub const fn resume(words: &'a WordList, state: GameState) -> Self {
        Self { words, state }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Submit a guess
    ///
    /// Checks run in order: game not over, word permitted, then hard mode.
    /// On any error the state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the first `TryError` that applies.
    ///
    /// # Examples
    /// ```
    /// use wordle_terminal::core::{LetterStatus::*, Word};
    /// use wordle_terminal::game::{Game, GameConfig};
    /// use wordle_terminal::puzzle::Puzzle;
    /// use wordle_terminal::wordlists::WordList;
    ///
    /// let words = WordList::embedded();
    /// let puzzle = Puzzle::new(Word::new("CLEAR").unwrap(), 1);
    /// let mut game = Game::new(&words, puzzle, GameConfig::default());
    ///
    /// let result = game.try_guess("cedar").unwrap();
    /// assert_eq!(result.statuses(), [Correct, Present, Absent, Correct, Correct]);
    /// assert_eq!(game.state().round(), 1);
    /// ```
    pub fn try_guess(&mut self, guess: &str) -> Result<&GuessResult, TryError> {
        if self.state.is_finished() {
            return Err(TryError::GameOver);
        }

        let upper = guess.trim().to_ascii_uppercase();
        let word = Word::new(upper.as_str())
            .ok()
            .filter(|word| self.words.is_permitted(word))
            .ok_or(TryError::NotInWordList(upper))?;

        if self.state.hard_mode() {
            self.state.check_hard_mode(&word)?;
        }

        let result = score(&word, self.state.wordle());
        self.state.record(&word, result);

        self.state
            .results()
            .last()
            .ok_or(TryError::GameOver)
    }

    /// True once the puzzle is won or six guesses are used
    #[must_use]
    pub fn finish(&self) -> bool {
        self.state.is_finished()
    }

    /// Message for a finished game
    ///
    /// A win is graded by the number of guesses; a loss reveals the word.
    /// `None` while the game is running.
    #[must_use]
    pub fn finish_message(&self) -> Option<String> {
        if self.state.is_won() {
            let grade = match self.state.round() {
                1 => "Genius",
                2 => "Magnificent",
                3 => "Impressive",
                4 => "Splendid",
                5 => "Great",
                _ => "Phew!",
            };
            Some(grade.to_string())
        } else if self.state.is_lost() {
            Some(self.state.wordle().to_string())
        } else {
            None
        }
    }

    /// Emoji summary of the guesses so far
    #[must_use]
    pub fn share(&self) -> String {
        share_string(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    fn words() -> WordList {
        WordList::embedded()
    }

    fn puzzle(target: &str) -> Puzzle {
        Puzzle::new(Word::new(target).unwrap(), 7)
    }

    fn new_game<'a>(words: &'a WordList, target: &str, hard_mode: bool) -> Game<'a> {
        Game::new(
            words,
            puzzle(target),
            GameConfig::default().with_hard_mode(hard_mode),
        )
    }

    #[test]
    fn accepted_guess_advances_round() {
        let words = words();
        let mut game = new_game(&words, "SPOIL", false);

        let result = game.try_guess("QUILL").unwrap();
        assert_eq!(
            result.statuses(),
            [Absent, Absent, Present, Absent, Correct]
        );
        assert_eq!(game.state().round(), 1);
        assert_eq!(game.state().results().len(), 1);
    }

    #[test]
    fn guess_is_uppercased() {
        let words = words();
        let mut game = new_game(&words, "CHARM", false);

        let result = game.try_guess("blast").unwrap();
        assert_eq!(result.word(), "BLAST");
    }

    #[test]
    fn consecutive_guesses_on_duplicate_target() {
        let words = words();
        let mut game = new_game(&words, "STILL", false);

        game.try_guess("LOVER").unwrap();
        game.try_guess("ALLOW").unwrap();
        let result = game.try_guess("LEVEL").unwrap();

        assert_eq!(
            result.statuses(),
            [Present, Absent, Absent, Absent, Correct]
        );
        assert_eq!(game.state().round(), 3);
    }

    #[test]
    fn not_in_word_list_leaves_state_untouched() {
        let words = words();
        let mut game = new_game(&words, "HELLO", false);
        let before = game.state().clone();

        let err = game.try_guess("AAAAA").unwrap_err();
        assert_eq!(err, TryError::NotInWordList("AAAAA".to_string()));
        assert_eq!(err.to_string(), "Not in word list: AAAAA");
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn malformed_guess_is_not_in_word_list() {
        let words = words();
        let mut game = new_game(&words, "HELLO", false);

        assert_eq!(
            game.try_guess("abc").unwrap_err(),
            TryError::NotInWordList("ABC".to_string())
        );
        assert_eq!(game.state().round(), 0);
    }

    #[test]
    fn hard_mode_hints_must_be_used() {
        let words = words();
        let mut game = new_game(&words, "WORLD", true);
        game.try_guess("DIARY").unwrap();

        assert_eq!(
            game.try_guess("OPIUM").unwrap_err().to_string(),
            "Guess must contain D"
        );
        assert_eq!(
            game.try_guess("ADOBE").unwrap_err().to_string(),
            "Guess must contain R"
        );
        assert_eq!(game.state().round(), 1);
    }

    #[test]
    fn hard_mode_discovered_letters_stay_in_place() {
        let words = words();
        let mut game = new_game(&words, "WORLD", true);
        game.try_guess("WEARY").unwrap();

        assert_eq!(
            game.try_guess("OPIUM").unwrap_err(),
            TryError::WrongLetterAtPosition {
                ordinal: "1st",
                letter: 'W'
            }
        );

        game.try_guess("WARTY").unwrap();
        assert_eq!(
            game.try_guess("WHERE").unwrap_err().to_string(),
            "3rd letter must be R"
        );
        assert_eq!(game.state().round(), 2);
    }

    #[test]
    fn word_list_is_checked_before_hard_mode() {
        let words = words();
        let mut game = new_game(&words, "WORLD", true);
        game.try_guess("WEARY").unwrap();

        assert!(matches!(
            game.try_guess("ZZZZZ"),
            Err(TryError::NotInWordList(_))
        ));
    }

    #[test]
    fn easy_mode_ignores_hints() {
        let words = words();
        let mut game = new_game(&words, "WORLD", false);
        game.try_guess("WEARY").unwrap();

        assert!(game.try_guess("OPIUM").is_ok());
    }

    #[test]
    fn finish_is_false_while_running() {
        let words = words();
        let mut game = new_game(&words, "HELLO", false);
        game.try_guess("WORLD").unwrap();

        assert!(!game.finish());
        assert_eq!(game.finish_message(), None);
    }

    #[test]
    fn finish_on_win() {
        let words = words();
        let mut game = new_game(&words, "HELLO", false);
        game.try_guess("WORLD").unwrap();
        game.try_guess("HELLO").unwrap();

        assert!(game.finish());
        assert_eq!(game.finish_message().as_deref(), Some("Magnificent"));
    }

    #[test]
    fn finishing_messages_by_round() {
        let words = words();
        let expected = [
            "Genius",
            "Magnificent",
            "Impressive",
            "Splendid",
            "Great",
            "Phew!",
        ];

        for (misses, message) in expected.iter().enumerate() {
            let mut game = new_game(&words, "HELLO", false);
            for _ in 0..misses {
                game.try_guess("CHAIR").unwrap();
            }
            game.try_guess("HELLO").unwrap();

            assert!(game.finish());
            assert_eq!(game.finish_message().as_deref(), Some(*message));
        }
    }

    #[test]
    fn finish_on_loss_reveals_word() {
        let words = words();
        let mut game = new_game(&words, "HELLO", false);
        for _ in 0..6 {
            game.try_guess("WORLD").unwrap();
        }

        assert!(game.finish());
        assert_eq!(game.finish_message().as_deref(), Some("HELLO"));
    }

    #[test]
    fn resumed_game_returns_newest_result() {
        let words = words();
        let mut earlier = new_game(&words, "CLEAR", false);
        earlier.try_guess("CEDAR").unwrap();
        earlier.try_guess("BLAST").unwrap();

        let mut game = Game::resume(&words, earlier.into_state());
        let result = game.try_guess("CLEAR").unwrap();

        assert_eq!(result.word(), "CLEAR");
        assert!(result.is_solved());
    }

    #[test]
    fn no_guesses_after_game_over() {
        let words = words();
        let mut game = new_game(&words, "HELLO", false);
        game.try_guess("HELLO").unwrap();

        assert_eq!(game.try_guess("WORLD").unwrap_err(), TryError::GameOver);
        assert_eq!(game.state().round(), 1);
    }

    #[test]
    fn custom_word_overrides_puzzle() {
        let words = words();
        let config = GameConfig::default().with_word(Word::new("LIGHT").unwrap());
        let game = Game::new(&words, puzzle("HELLO"), config);

        assert_eq!(game.state().wordle().text(), "LIGHT");
        assert_eq!(game.state().puzzle_number(), 0);
    }

    #[test]
    fn saved_game_resumed_for_same_word() {
        let words = words();
        let mut earlier = new_game(&words, "CLEAR", false);
        earlier.try_guess("CEDAR").unwrap();
        let saved = earlier.into_state();

        let config = GameConfig::default().with_saved(Some(saved.clone()));
        let game = Game::new(&words, puzzle("CLEAR"), config);

        assert_eq!(game.state(), &saved);
        assert_eq!(game.state().round(), 1);
    }

    #[test]
    fn stale_saved_game_discarded() {
        let words = words();
        let mut earlier = new_game(&words, "CLEAR", false);
        earlier.try_guess("CEDAR").unwrap();

        let config = GameConfig::default()
            .with_hard_mode(true)
            .with_saved(Some(earlier.into_state()));
        let game = Game::new(&words, puzzle("CHARM"), config);

        assert_eq!(game.state().wordle().text(), "CHARM");
        assert_eq!(game.state().round(), 0);
        assert!(game.state().hard_mode());
    }

    #[test]
    fn round_matches_history_length() {
        let words = words();
        let mut game = new_game(&words, "LIGHT", false);

        for (k, guess) in ["SCARF", "MIGHT", "FIGHT"].iter().enumerate() {
            game.try_guess(guess).unwrap();
            assert_eq!(game.state().round(), k + 1);
            assert_eq!(game.state().results().len(), k + 1);
        }
    }
}
