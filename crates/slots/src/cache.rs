//! Per-instance cache of decoded slot content.
//!
//! Maps a slot index to the content string produced when that slot's file was
//! decoded, so displaying it again needs no trip to the storage adapter.
//! Entries live as long as the owning coordinator; there is no expiry.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Decoded content keyed by slot index.
#[derive(Debug, Default)]
pub struct ContentCache {
    entries: Mutex<HashMap<usize, String>>,
}

impl ContentCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached content of a slot.
    pub fn get(&self, index: usize) -> Option<String> {
        self.lock().get(&index).cloned()
    }

    /// Check if a slot has cached content.
    pub fn contains(&self, index: usize) -> bool {
        self.lock().contains_key(&index)
    }

    /// Store decoded content for a slot, replacing any previous entry.
    pub fn insert(&self, index: usize, content: String) {
        self.lock().insert(index, content);
    }

    /// Remove a slot's entry.
    ///
    /// # Returns
    /// The removed content, if there was any.
    pub fn remove(&self, index: usize) -> Option<String> {
        self.lock().remove(&index)
    }

    /// Number of cached slots.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<usize, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
