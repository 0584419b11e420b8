//! Tracing setup
//!
//! The TUI owns the terminal, so logs only ever go to a file.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter
pub const LOG_FILTER_ENV: &str = "WORDLE_LOG";

const DEFAULT_FILTER: &str = "wordle_terminal=info";

/// Send `tracing` events to `log_file`, appending
///
/// Without a file no subscriber is installed and events are dropped.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_tracing(log_file: Option<&Path>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .init();

    tracing::trace!("tracing initialized");
    Ok(())
}
