use std::{fmt, time::Duration};

use crate::errors;

/// Joining is fatal on failure: none of these are retried within the
/// attempt. Retry policy belongs to whatever supervises the process.
#[derive(thiserror::Error)]
pub enum JoinError {
    #[error("Timed out joining the cluster after {0:?}")]
    Timeout(Duration),
    #[error("None of the configured seed members are reachable")]
    NoReachableMembers,
    #[error("Invalid cluster membership config: {0}")]
    ConfigInvalid(String),
}

impl fmt::Debug for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        errors::error_chain_fmt(self, f)
    }
}
