//! Game engine
//!
//! Owns the target word and the play state of one puzzle. Pure state machine:
//! no I/O, no logging.

mod config;
mod engine;
mod error;
mod state;

pub use config::GameConfig;
pub use engine::Game;
pub use error::{ORDINALS, TryError};
pub use state::{GameState, InvalidState, MAX_ROUNDS};
