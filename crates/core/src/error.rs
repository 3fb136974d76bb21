//! Core error types for copybench.
//!
//! The benchmark loops themselves never fail; these errors cover configuration,
//! inspection of the container wrappers, and writing reports.

use thiserror::Error;

/// Core error type for copybench operations.
#[derive(Debug, Error)]
pub enum Error {
    // Configuration errors
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Container errors
    #[error("shared workload is already mutably borrowed")]
    AliasBorrowed,

    #[error("shared workload handle has been released")]
    HandleReleased,

    #[error("index {index} out of range for workload of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    // Output errors
    #[error("failed to encode timing sample as JSON: {reason}")]
    JsonEncodeFailed { reason: String },

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an index out of range error.
    #[must_use]
    pub const fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonEncodeFailed {
            reason: err.to_string(),
        }
    }
}
