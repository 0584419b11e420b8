//! Saved game on disk
//!
//! The game is stored as JSON in `~/.wordle` so a puzzle can be resumed
//! across runs on the same day.

use crate::game::GameState;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// File name of the saved game in the home directory
pub const STATE_FILE: &str = ".wordle";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("error getting home directory")]
    NoHomeDir,

    #[error("error accessing status file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("error decoding wordle status from file: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("error encoding wordle status into file: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Reads and writes the saved game
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$HOME/.wordle` (`%USERPROFILE%` on Windows)
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoHomeDir` if neither variable is set.
    pub fn in_home_dir() -> Result<Self, StoreError> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .filter(|home| !home.is_empty())
            .map(|home| Self::new(Path::new(&home).join(STATE_FILE)))
            .ok_or(StoreError::NoHomeDir)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved game
    ///
    /// A missing or empty file means there is no saved game.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a game.
    pub fn load(&self) -> Result<Option<GameState>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved game");
                return Ok(None);
            }
            Err(source) => return Err(self.io_error(source)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let state: GameState = serde_json::from_str(&content).map_err(StoreError::Decode)?;
        debug!(round = state.round(), puzzle = state.puzzle_number(), "loaded saved game");
        Ok(Some(state))
    }

    /// Write the game, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be encoded or written.
    pub fn save(&self, state: &GameState) -> Result<(), StoreError> {
        let json = serde_json::to_string(state).map_err(StoreError::Encode)?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;
        debug!(round = state.round(), "saved game");
        Ok(())
    }

    /// Delete the saved game
    ///
    /// Returns whether a file was actually removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn remove(&self) -> Result<bool, StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "removed saved game");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
