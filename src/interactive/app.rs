//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{Game, GameState};
use crate::state::StateStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How long an error stays on screen
pub const ERROR_TTL: Duration = Duration::from_millis(1500);

const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub store: StateStore,
    pub input: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    pub expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a>, store: StateStore) -> Self {
        let mut app = Self {
            game,
            store,
            input: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };

        if app.game.finish() {
            app.announce_finish();
        } else if app.game.state().round() > 0 {
            app.add_message("Welcome back!", MessageStyle::Info, None);
        }

        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('q') if self.game.finish() => {
                self.should_quit = true;
            }
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
            {
                self.push_letter(c);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn push_letter(&mut self, letter: char) {
        if self.game.finish() || self.input.len() >= WORD_LENGTH {
            return;
        }
        self.input.push(letter.to_ascii_uppercase());
    }

    /// Submit the current row
    pub fn submit(&mut self) {
        if self.game.finish() {
            self.should_quit = true;
            return;
        }

        if self.input.len() < WORD_LENGTH {
            self.show_error("Not enough letters");
            return;
        }

        let outcome = self.game.try_guess(&self.input).map(|_| ());
        match outcome {
            Ok(()) => {
                debug!(guess = %self.input, round = self.game.state().round(), "guess accepted");
                self.input.clear();
                self.save();
                if self.game.finish() {
                    self.announce_finish();
                }
            }
            Err(e) => {
                debug!(guess = %self.input, error = %e, "guess rejected");
                self.show_error(&e.to_string());
            }
        }
    }

    fn announce_finish(&mut self) {
        let state = self.game.state();
        info!(
            won = state.is_won(),
            rounds = state.round(),
            "game finished"
        );

        let style = if state.is_won() {
            MessageStyle::Success
        } else {
            MessageStyle::Info
        };
        if let Some(message) = self.game.finish_message() {
            self.add_message(&message, style, None);
        }
        self.add_message("Press Enter or q to quit", MessageStyle::Info, None);
    }

    /// Write the game to the state file, reporting failures on screen
    pub fn save(&mut self) {
        if let Err(e) = self.store.save(self.game.state()) {
            warn!(error = %e, "unable to save game");
            self.show_error(&e.to_string());
        }
    }

    pub fn show_error(&mut self, text: &str) {
        self.add_message(text, MessageStyle::Error, Some(Instant::now() + ERROR_TTL));
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle, expires_at: Option<Instant>) {
        // Newest first
        self.messages.insert(
            0,
            Message {
                text: text.to_string(),
                style,
                expires_at,
            },
        );
    }

    /// Drop messages whose time is up
    pub fn expire_messages(&mut self, now: Instant) {
        self.messages
            .retain(|message| message.expires_at.is_none_or(|at| at > now));
    }

    /// Row being typed, padded with underscores
    #[must_use]
    pub fn current_row(&self) -> Vec<char> {
        let mut row: Vec<char> = self.input.chars().collect();
        row.resize(WORD_LENGTH, '_');
        row
    }
}

/// Run the TUI application
///
/// Returns the final game state once the player quits.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<GameState> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<GameState> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        app.expire_messages(Instant::now());

        if app.should_quit {
            break;
        }
    }

    app.save();
    Ok(app.game.into_state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;
    use crate::puzzle::Puzzle;
    use crate::wordlists::WordList;

    fn app<'a>(words: &'a WordList, dir: &tempfile::TempDir, target: &str) -> App<'a> {
        let puzzle = Puzzle::new(Word::new(target).unwrap(), 5);
        let game = Game::new(words, puzzle, GameConfig::default());
        App::new(game, StateStore::new(dir.path().join("state.json")))
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Enter));
    }

    #[test]
    fn typing_fills_row_up_to_five_letters() {
        let words = WordList::embedded();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&words, &dir, "CLEAR");

        for c in "cedars".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        assert_eq!(app.input, "CEDAR");

        app.handle_key(KeyEvent::from(KeyCode::Backspace));
        app.handle_key(KeyEvent::from(KeyCode::Char('1')));
        assert_eq!(app.current_row(), vec!['C', 'E', 'D', 'A', '_']);
    }

    #[test]
    fn modified_letters_are_not_typed() {
        let words = WordList::embedded();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&words, &dir, "CLEAR");

        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        app.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));

        assert_eq!(app.input, "C");
        assert!(!app.should_quit);
    }

    #[test]
    fn short_row_shows_error() {
        let words = WordList::embedded();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&words, &dir, "CLEAR");

        type_word(&mut app, "CED");

        assert_eq!(app.game.state().round(), 0);
        assert_eq!(app.messages[0].text, "Not enough letters");
        assert_eq!(app.messages[0].style, MessageStyle::Error);
    }

    #[test]
    fn rejected_guess_keeps_input() {
        let words = WordList::embedded();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&words, &dir, "CLEAR");

        type_word(&mut app, "ZZZZZ");

        assert_eq!(app.input, "ZZZZZ");
        assert_eq!(app.messages[0].text, "Not in word list: ZZZZZ");
    }

    #[test]
    fn accepted_guess_is_saved() {
        let words = WordList::embedded();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&words, &dir, "CLEAR");

        type_word(&mut app, "CEDAR");

        assert!(app.input.is_empty());
        let saved = app.store.load().unwrap().unwrap();
        assert_eq!(saved.round(), 1);
        assert_eq!(&saved, app.game.state());
    }

    #[test]
    fn win_shows_message_and_enter_quits() {
        let words = WordList::embedded();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&words, &dir, "CLEAR");

        type_word(&mut app, "CEDAR");
        type_word(&mut app, "CLEAR");

        assert!(app.game.finish());
        assert!(app.messages.iter().any(|m| m.text == "Magnificent"));
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::from(KeyCode::Enter));
        assert!(app.should_quit);
    }

    #[test]
    fn errors_expire() {
        let words = WordList::embedded();
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(&words, &dir, "CLEAR");

        app.show_error("oops");
        app.add_message("stays", MessageStyle::Info, None);
        app.expire_messages(Instant::now() + ERROR_TTL + Duration::from_millis(1));

        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].text, "stays");
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        let words = WordList::embedded();
        let dir = tempfile::tempdir().unwrap();

        let mut app1 = app(&words, &dir, "CLEAR");
        app1.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app1.should_quit);

        let mut app2 = app(&words, &dir, "CLEAR");
        app2.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(app2.should_quit);
    }
}
