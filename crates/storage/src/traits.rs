//! Storage traits/interfaces for attachment content.

use async_trait::async_trait;
use rusty_file_slots_common::ProgressCallback;

use crate::error::StorageError;
use crate::types::{StoredObject, UploadFile};

/// Remote or local content store used by attachment slots.
///
/// References returned by [`StorageService::put`] are opaque; callers only
/// hand them back to `get` and `delete`.
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Fetch stored content by reference.
    ///
    /// # Arguments
    /// * `reference` - Reference previously returned by `put`
    async fn get(&self, reference: &str) -> Result<StoredObject, StorageError>;

    /// Store a file and return a new reference for it.
    ///
    /// # Arguments
    /// * `file` - The file to store
    /// * `progress` - Optional callback receiving 0-100 percentages
    async fn put(
        &self,
        file: &UploadFile,
        progress: Option<&dyn ProgressCallback>,
    ) -> Result<String, StorageError>;

    /// Remove stored content by reference.
    ///
    /// # Arguments
    /// * `reference` - Reference previously returned by `put`
    async fn delete(&self, reference: &str) -> Result<(), StorageError>;
}
