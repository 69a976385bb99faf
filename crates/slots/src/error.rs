//! Error types for slot transfers.

use rusty_file_slots_storage::StorageError;
use thiserror::Error;

/// Errors surfaced by slot transfer operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlotError {
    /// More files were submitted than there are empty slots.
    #[error("Cannot upload {requested} files: only {available} slots available")]
    InvalidAmount { requested: usize, available: usize },

    /// File extension is not in the allow-list.
    #[error("File {name} has disallowed extension {extension:?}")]
    InvalidExtension { name: String, extension: String },

    /// File exceeds the size limit.
    #[error("File {name} is {size} bytes, limit is {limit} bytes")]
    InvalidSize { name: String, size: u64, limit: u64 },

    /// The slot has no usable reference, or the store no longer has it.
    #[error("No content found for slot {index}")]
    NotFound { index: usize },

    /// Slot index is outside `0..max_slots`.
    #[error("Slot {index} is out of range (max {max_slots})")]
    OutOfRange { index: usize, max_slots: usize },

    /// Error reported by the storage adapter, passed through unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SlotError {
    /// Stable discriminant reported to the host.
    pub fn code(&self) -> &'static str {
        match self {
            SlotError::InvalidAmount { .. } => "invalid-amount",
            SlotError::InvalidExtension { .. } => "invalid-extension",
            SlotError::InvalidSize { .. } => "invalid-size",
            SlotError::NotFound { .. } => "not-found",
            SlotError::OutOfRange { .. } => "out-of-range",
            SlotError::Storage(_) => "storage-error",
        }
    }
}

/// Errors loading an upload configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration JSON could not be parsed.
    #[error("Invalid upload configuration: {0}")]
    Json(#[from] serde_json::Error),
}
