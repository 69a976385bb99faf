//! Error types for storage operations.

use thiserror::Error;

/// Errors that a storage adapter can report.
///
/// These are passed through unchanged to whoever triggered the transfer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No stored object exists for the reference.
    #[error("Object not found: {reference}")]
    NotFound { reference: String },

    /// Access denied.
    #[error("Access denied to {reference}: {message}")]
    AccessDenied { reference: String, message: String },

    /// Network error.
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// Local I/O error.
    #[error("I/O error for {path}: {message}")]
    IoError { path: String, message: String },

    /// Other error.
    #[error("{message}")]
    Other { message: String },
}

impl StorageError {
    /// Create an `Other` error from any message.
    pub fn other(message: impl Into<String>) -> Self {
        StorageError::Other {
            message: message.into(),
        }
    }

    /// Check if this error means the referenced object is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::IoError {
            path: String::new(),
            message: err.to_string(),
        }
    }
}
