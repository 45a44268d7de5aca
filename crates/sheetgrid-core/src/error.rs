//! Error types for sheetgrid-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetgrid-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Non-positive coordinate, out-of-range coordinate or unparseable cell key
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested grid growth beyond the supported coordinate range
    #[error(
        "Capacity exceeded: requested {column} columns x {row} rows (max: {max_columns} x {max_rows})"
    )]
    CapacityExceeded {
        column: u32,
        row: u32,
        max_columns: u32,
        max_rows: u32,
    },
}

impl Error {
    /// Create a new "invalid input" error with a message
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}
