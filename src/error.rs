//! Error types for title-fix.

use std::io;
use thiserror::Error;

/// Structured error types for title-fix.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller passed an argument of the wrong type or an unknown name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid command-line usage.
    #[error("usage: {0}")]
    Usage(String),

    /// UTF-8 decoding error.
    #[error("invalid UTF-8 at byte {byte}: {message}")]
    Utf8 {
        /// Byte position of invalid UTF-8.
        byte: usize,
        /// Error message.
        message: String,
    },

    /// JSON parsing or serialization error.
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error.
    #[error("CSV serialization failed")]
    Csv(#[from] csv::Error),

    /// I/O error with context.
    #[error("{message}: {path}")]
    Io {
        /// File path where error occurred.
        path: String,
        /// Error description.
        message: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Shorthand for an `InvalidArgument` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns true if the caller violated the engine's argument contract.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
