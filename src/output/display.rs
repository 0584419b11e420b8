//! Coloured console printing for the line-mode client and post-game summary

use super::formatters::KEYBOARD_ROWS;
use crate::core::{GuessResult, LetterStatus};
use crate::game::{Game, GameState};
use colored::{ColoredString, Colorize};

fn colored_letter(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let cell = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => cell.black().on_green().bold(),
        Some(LetterStatus::Present) => cell.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => cell.white().on_bright_black(),
        None => cell.bold(),
    }
}

/// Print one scored guess as coloured tiles
pub fn print_result(round: usize, result: &GuessResult) {
    let tiles: Vec<String> = result
        .tiles()
        .iter()
        .map(|tile| colored_letter(tile.letter, Some(tile.status)).to_string())
        .collect();

    println!("  {} {}", round.to_string().bright_black(), tiles.join(""));
}

/// Print the keyboard with every guessed letter coloured
pub fn print_keyboard(state: &GameState) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| colored_letter(letter, state.letter_status(letter)).to_string())
            .collect();
        println!("{}{}", " ".repeat(indent * 2 + 2), keys.join(""));
    }
}

/// Print the end-of-game banner
pub fn print_finish(game: &Game) {
    let Some(message) = game.finish_message() else {
        return;
    };

    println!("\n{}", "─".repeat(40).cyan());
    if game.state().is_won() {
        println!("  {}", message.bright_green().bold());
    } else {
        println!("  The word was {}", message.bright_yellow().bold());
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print the share string
pub fn print_share(share: &str) {
    println!("\n{share}\n");
}
