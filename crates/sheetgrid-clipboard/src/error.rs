//! Clipboard error types

use thiserror::Error;

/// Result type for clipboard operations
pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

/// Errors that can occur while importing clipboard content
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Invalid anchor or capacity exceeded
    #[error("{0}")]
    Core(#[from] sheetgrid_core::Error),

    /// Payload is structurally unusable
    #[error("Malformed clipboard content: {0}")]
    MalformedInput(String),
}

impl ClipboardError {
    pub(crate) fn malformed<S: Into<String>>(msg: S) -> Self {
        ClipboardError::MalformedInput(msg.into())
    }

    /// Whether the error is a malformed payload (callers may retry as plain text)
    pub fn is_malformed(&self) -> bool {
        matches!(self, ClipboardError::MalformedInput(_))
    }

    /// Whether the paste would have grown the grid past its limits
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(
            self,
            ClipboardError::Core(sheetgrid_core::Error::CapacityExceeded { .. })
        )
    }
}
