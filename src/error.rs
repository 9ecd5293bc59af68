//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid date: year {year}, month {month}")]
    InvalidDate { year: i32, month: u32 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to read events file {}: {source}", .path.display())]
    EventFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse events file {}: {source}", .path.display())]
    EventParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Type alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper to create argument errors.
pub fn argument_error(message: impl Into<String>) -> Error {
    Error::InvalidArgument(message.into())
}
