//! Command implementations

pub mod reset;
pub mod share;
pub mod simple;

pub use reset::reset_status;
pub use share::saved_share;
pub use simple::{play_lines, run_simple};
