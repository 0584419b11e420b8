//! Share command
//!
//! Prints the emoji summary of the saved game without starting a new one.

use crate::output::share_string;
use crate::state::{StateStore, StoreError};

/// Share string of the saved game, if there is one
///
/// # Errors
///
/// Returns an error if the state file exists but cannot be read.
pub fn saved_share(store: &StateStore) -> Result<Option<String>, StoreError> {
    Ok(store.load()?.as_ref().map(share_string))
}
