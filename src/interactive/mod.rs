//! Interactive TUI interface
//!
//! Board of six rows, a message queue and a virtual keyboard coloured from
//! what the player has found so far.

mod app;
mod keyboard;
mod rendering;

pub use app::{App, ERROR_TTL, Message, MessageStyle, run_tui};
pub use keyboard::{keyboard_lines, status_style};
