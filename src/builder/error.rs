//! Build errors for calculator configuration.

use thiserror::Error;

/// Errors that can occur when configuring a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Entry length limit must be at least 1. Omit .max_entry_len() for no limit")]
    ZeroEntryLimit,

    #[error("Invalid calculator config: {0}")]
    InvalidConfig(String),
}
