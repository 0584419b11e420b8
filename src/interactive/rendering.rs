//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use super::keyboard::{keyboard_lines, status_style};
use crate::core::{GuessResult, LetterStatus};
use crate::game::MAX_ROUNDS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TITLE: &str = "6 attempts to find a 5-letter word";

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(MAX_ROUNDS as u16 + 2), // Board
            Constraint::Length(4), // Messages
            Constraint::Length(5), // Keyboard
            Constraint::Min(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(TITLE)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn result_line(result: &GuessResult) -> Line<'static> {
    tile_line(
        result
            .tiles()
            .iter()
            .map(|tile| (tile.letter, Some(tile.status))),
    )
}

fn tile_line(tiles: impl Iterator<Item = (char, Option<LetterStatus>)>) -> Line<'static> {
    let mut spans = Vec::new();
    for (letter, status) in tiles {
        spans.push(Span::styled(format!(" {letter} "), status_style(status)));
        spans.push(Span::raw(" "));
    }
    spans.pop();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let mut lines: Vec<Line> = state.results().iter().map(result_line).collect();

    if !app.game.finish() {
        lines.push(tile_line(app.current_row().into_iter().map(|c| (c, None))));
    }

    while lines.len() < MAX_ROUNDS {
        lines.push(tile_line(std::iter::repeat_n(('_', None), 5)));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::ITALIC),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(app.game.state()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let state = app.game.state();
    let puzzle = Paragraph::new(format!("Wordle {}", state.puzzle_number()))
        .alignment(Alignment::Center);
    f.render_widget(puzzle, chunks[0]);

    let mode_text = if state.hard_mode() {
        "Mode: Hard"
    } else {
        "Mode: Normal"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[1]);

    let help_text = if app.game.finish() {
        "Enter/q: Quit"
    } else {
        "Enter: Submit | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
