//! Reset command
//!
//! Deletes the saved game so the next run starts fresh.

use crate::state::{StateStore, StoreError};

/// Remove the state file and describe what happened
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn reset_status(store: &StateStore) -> Result<&'static str, StoreError> {
    if store.remove()? {
        Ok("Status file removed.")
    } else {
        Ok("No status file to remove.")
    }
}
