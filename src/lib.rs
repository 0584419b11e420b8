//! Wordle in the terminal
//!
//! The daily puzzle (or a random offline one), hard mode, a game that resumes
//! where you left it, and a share string when you're done.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_terminal::core::Word;
//! use wordle_terminal::game::{Game, GameConfig};
//! use wordle_terminal::puzzle::Puzzle;
//! use wordle_terminal::wordlists::WordList;
//!
//! let words = WordList::embedded();
//! let puzzle = Puzzle::new(Word::new("light").unwrap(), 0);
//! let mut game = Game::new(&words, puzzle, GameConfig::default());
//!
//! game.try_guess("might").unwrap();
//! game.try_guess("light").unwrap();
//!
//! assert!(game.finish());
//! assert_eq!(game.finish_message().as_deref(), Some("Magnificent"));
//! println!("{}", game.share());
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists
pub mod wordlists;

// Puzzle sources
pub mod puzzle;

// Saved game
pub mod state;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
