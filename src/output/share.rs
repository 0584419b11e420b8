//! Shareable summary of a game
//!
//! ```text
//! Wordle 1078 3/6*
//! ⬜🟨⬜⬜⬜
//! 🟩⬜🟩🟨⬜
//! 🟩🟩🟩🟩🟩
//! ```

use super::formatters::result_to_emoji;
use crate::game::{GameState, MAX_ROUNDS};

/// Title line plus one emoji row per guess
///
/// The count is the number of guesses on a win and `X` otherwise, so a game
/// still in progress also shows `X`.
#[must_use]
pub fn share_string(state: &GameState) -> String {
    let tries = if state.is_won() {
        state.round().to_string()
    } else {
        "X".to_string()
    };

    let mut lines = vec![format!(
        "Wordle {} {tries}/{MAX_ROUNDS}*",
        state.puzzle_number()
    )];
    lines.extend(state.results().iter().map(result_to_emoji));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Game, GameConfig};
    use crate::puzzle::Puzzle;
    use crate::wordlists::WordList;

    fn play(target: &str, number: u32, guesses: &[&str]) -> String {
        let words = WordList::embedded();
        let puzzle = Puzzle::new(Word::new(target).unwrap(), number);
        let mut game = Game::new(&words, puzzle, GameConfig::default());
        for guess in guesses {
            game.try_guess(guess).unwrap();
        }
        game.share()
    }

    #[test]
    fn win_in_two_tries() {
        let got = play("HELLO", 0, &["CELLO", "HELLO"]);
        assert_eq!(got, "Wordle 0 2/6*\n⬜🟩🟩🟩🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn win_in_six_tries() {
        let got = play(
            "LIGHT",
            12,
            &["SCARF", "MIGHT", "FIGHT", "TIGHT", "RIGHT", "LIGHT"],
        );
        let want = format!(
            "Wordle 12 6/6*\n⬜⬜⬜⬜⬜\n{}🟩🟩🟩🟩🟩",
            "⬜🟩🟩🟩🟩\n".repeat(4)
        );
        assert_eq!(got, want);
    }

    #[test]
    fn loss_shows_x() {
        let got = play("LIGHT", 3, &["SCARF"; 6]);
        let want = format!("Wordle 3 X/6*\n{}⬜⬜⬜⬜⬜", "⬜⬜⬜⬜⬜\n".repeat(5));
        assert_eq!(got, want);
    }

    #[test]
    fn mid_game_reflects_guesses_so_far() {
        let got = play("CLEAR", 9, &["CEDAR"]);
        assert_eq!(got, "Wordle 9 X/6*\n🟩🟨⬜🟩🟩");
    }

    #[test]
    fn no_guesses_is_title_only() {
        assert_eq!(play("CLEAR", 9, &[]), "Wordle 9 X/6*");
    }
}
