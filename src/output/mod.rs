//! Terminal output formatting
//!
//! Share strings, emoji rows and coloured console printing.

pub mod display;
pub mod formatters;
mod share;

pub use display::{print_finish, print_keyboard, print_result, print_share};
pub use share::share_string;
