//! In-memory storage adapter.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use rusty_file_slots_common::ProgressCallback;

use crate::error::StorageError;
use crate::traits::StorageService;
use crate::types::{StoredObject, UploadFile};

/// Storage adapter keeping every object in process memory.
///
/// References are random UUIDs in simple (hyphenless) form.
#[derive(Debug, Default)]
pub struct MemoryStorageService {
    objects: Mutex<HashMap<String, StoredObject>>,
}

impl MemoryStorageService {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Check if an object exists for the reference.
    pub fn contains(&self, reference: &str) -> bool {
        self.lock().contains_key(reference)
    }

    /// Store an object under a fixed reference, replacing any previous one.
    ///
    /// # Arguments
    /// * `reference` - Reference to store under
    /// * `object` - Object to store
    pub fn insert(&self, reference: impl Into<String>, object: StoredObject) {
        self.lock().insert(reference.into(), object);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, StoredObject>> {
        self.objects.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl StorageService for MemoryStorageService {
    async fn get(&self, reference: &str) -> Result<StoredObject, StorageError> {
        self.lock()
            .get(reference)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                reference: reference.to_string(),
            })
    }

    async fn put(
        &self,
        file: &UploadFile,
        progress: Option<&dyn ProgressCallback>,
    ) -> Result<String, StorageError> {
        if let Some(cb) = progress {
            cb.on_progress(0.0);
        }

        let reference: String = uuid::Uuid::new_v4().simple().to_string();
        self.lock()
            .insert(reference.clone(), StoredObject::from(file));
        log::debug!("Stored {} ({} bytes) as {}", file.name, file.size(), reference);

        if let Some(cb) = progress {
            cb.on_progress(100.0);
        }
        Ok(reference)
    }

    async fn delete(&self, reference: &str) -> Result<(), StorageError> {
        match self.lock().remove(reference) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound {
                reference: reference.to_string(),
            }),
        }
    }
}
