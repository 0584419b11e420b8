//! Virtual keyboard and tile colours

use crate::core::LetterStatus;
use crate::game::GameState;
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Style of a board tile or key for a known status
#[must_use]
pub fn status_style(status: Option<LetterStatus>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        Some(LetterStatus::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base,
    }
}

/// Keyboard rows with every guessed letter coloured by its best status
#[must_use]
pub fn keyboard_lines(state: &GameState) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for letter in row.chars() {
                spans.push(Span::styled(
                    format!(" {letter} "),
                    status_style(state.letter_status(letter)),
                ));
                spans.push(Span::raw(" "));
            }
            spans.pop();
            Line::from(spans)
        })
        .collect()
}
