//! Error absorption helpers
//!
//! Run fallible operations whose failures should be observed but never
//! propagated. Swallowed errors are recorded on the debug channel.

use std::fmt::Display;
use tracing::debug;

/// Run `op`, turning `Err` into `None`
pub fn attempt<T, E>(op: impl FnOnce() -> Result<T, E>) -> Option<T>
where
    E: Display,
{
    match op() {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(error = %err, "ignored error");
            None
        }
    }
}

/// Run `op`, turning `Err` into `None`, tagging the record with `label`
pub fn attempt_labeled<T, E>(label: &str, op: impl FnOnce() -> Result<T, E>) -> Option<T>
where
    E: Display,
{
    match op() {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(%label, error = %err, "ignored error");
            None
        }
    }
}
