//! Transfer orchestration for attachment slots.
//!
//! This module moves file content in and out of host slots, optionally through
//! a `StorageService` adapter. It handles:
//!
//! - Batch uploads: validate, mark awaiting, transfer, commit or roll back
//! - Downloads served from the content cache, inline references or the adapter
//! - Single deletes and a bulk clear over every slot
//!
//! # Batch semantics
//!
//! Every per-file task in a batch runs to completion; nothing is cancelled
//! when a sibling fails. Tasks that committed stay committed, and the batch
//! reports the first error in completion order.
//!
//! # Example
//!
//! ```ignore
//! use rusty_file_slots::{MemorySlotArray, TransferCoordinator, UploadConfig};
//!
//! let slots = MemorySlotArray::new(3);
//! let coordinator = TransferCoordinator::new(UploadConfig::new(3), &slots);
//! coordinator.upload(&files, Some(&service), None).await?;
//! let content = coordinator.download(0, Some(&service)).await?;
//! ```

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use rusty_file_slots_common::ProgressCallback;
use rusty_file_slots_storage::{StorageService, UploadFile};

use crate::cache::ContentCache;
use crate::config::UploadConfig;
use crate::encode::{encode_file, encode_file_with_progress, encode_object};
use crate::error::SlotError;
use crate::slot::{SlotArray, SlotHandle};
use crate::validate::{is_image_reference, Validator};

/// Coordinates transfers for one attachment block over host-owned slots.
pub struct TransferCoordinator<'a, S: SlotArray + ?Sized> {
    /// Block configuration.
    config: UploadConfig,
    /// Validator derived from the configuration.
    validator: Validator,
    /// Host slot array.
    slots: &'a S,
    /// Decoded content per slot index.
    cache: ContentCache,
}

impl<'a, S: SlotArray + ?Sized> TransferCoordinator<'a, S> {
    /// Create a coordinator over the host's slots.
    ///
    /// # Arguments
    /// * `config` - Block configuration
    /// * `slots` - Host slot array; slot `i` for every `i < config.max_files`
    pub fn new(config: UploadConfig, slots: &'a S) -> Self {
        let validator: Validator = Validator::from_config(&config);
        Self {
            config,
            validator,
            slots,
            cache: ContentCache::new(),
        }
    }

    /// Block configuration.
    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Validator derived from the configuration.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Number of slots.
    pub fn max_files(&self) -> usize {
        self.config.max_files()
    }

    /// Indices of slots without a value, in ascending order.
    pub fn available_slots(&self) -> Vec<usize> {
        (0..self.max_files())
            .filter(|&index| {
                self.slots
                    .slot(index)
                    .is_some_and(|slot| !slot.has_value())
            })
            .collect()
    }

    /// Cached decoded content of a slot.
    pub fn cached(&self, index: usize) -> Option<String> {
        self.cache.get(index)
    }

    /// Whether a transfer is in flight for the slot.
    ///
    /// Index 0 always reports `false`.
    pub fn is_uploading(&self, index: usize) -> bool {
        index > 0
            && index < self.max_files()
            && self
                .slots
                .slot(index)
                .is_some_and(|slot| slot.is_awaiting())
    }

    /// Whether the slot holds a file with an image extension.
    pub fn is_image(&self, index: usize) -> bool {
        if index >= self.max_files() {
            return false;
        }
        self.slots
            .slot(index)
            .and_then(|slot| slot.value())
            .is_some_and(|value| is_image_reference(&value))
    }

    /// Upload a batch of files into the empty slots.
    ///
    /// The `k`-th file goes to the `k`-th empty slot. Files are transferred
    /// concurrently; without an adapter their content is stored inline as the
    /// slot reference.
    ///
    /// # Arguments
    /// * `files` - Files to upload
    /// * `service` - Optional storage adapter
    /// * `progress` - Optional progress callback, forwarded to each transfer
    ///
    /// # Returns
    /// `InvalidAmount` (with no slot touched) when there are more files than
    /// empty slots; otherwise the first per-file error, if any.
    pub async fn upload(
        &self,
        files: &[UploadFile],
        service: Option<&dyn StorageService>,
        progress: Option<&dyn ProgressCallback>,
    ) -> Result<(), SlotError> {
        let available: Vec<usize> = self.available_slots();

        if files.len() > available.len() {
            log::warn!(
                "Rejected upload of {} files, {} slots available",
                files.len(),
                available.len()
            );
            return Err(SlotError::InvalidAmount {
                requested: files.len(),
                available: available.len(),
            });
        }

        let tasks: FuturesUnordered<_> = files
            .iter()
            .zip(available)
            .map(|(file, index)| self.upload_file(index, file, service, progress))
            .collect();

        first_error(tasks).await
    }

    /// Upload one file into one slot.
    async fn upload_file(
        &self,
        index: usize,
        file: &UploadFile,
        service: Option<&dyn StorageService>,
        progress: Option<&dyn ProgressCallback>,
    ) -> Result<(), SlotError> {
        if let Err(e) = self.validator.check(file) {
            log::warn!("Rejected {} for slot {}: {}", file.name, index, e);
            return Err(e);
        }

        let slot: &dyn SlotHandle = self.slot(index)?;
        slot.mark_awaiting();
        log::debug!("Slot {} awaiting upload of {}", index, file.name);

        let Some(service) = service else {
            let content: String = encode_file_with_progress(file, progress);
            slot.set(file.name.clone(), Some(content));
            log::debug!("Slot {} filled inline with {}", index, file.name);
            return Ok(());
        };

        match service.put(file, progress).await {
            Ok(reference) => {
                slot.set(file.name.clone(), Some(reference));
                if self.is_image(index) {
                    self.cache.insert(index, encode_file(file));
                }
                log::debug!("Slot {} filled with {}", index, file.name);
                Ok(())
            }
            Err(e) => {
                log::warn!("Upload of {} to slot {} failed: {}", file.name, index, e);
                slot.clear();
                Err(e.into())
            }
        }
    }

    /// Fetch displayable content for a slot.
    ///
    /// Cached content is returned without I/O. Without an adapter the slot
    /// reference is the content. Content fetched through the adapter is not
    /// cached.
    ///
    /// # Arguments
    /// * `index` - Slot index
    /// * `service` - Optional storage adapter
    ///
    /// # Returns
    /// The content string, or `NotFound` if the slot has no reference or the
    /// adapter cannot produce it (which also clears the slot).
    pub async fn download(
        &self,
        index: usize,
        service: Option<&dyn StorageService>,
    ) -> Result<String, SlotError> {
        if let Some(content) = self.cache.get(index) {
            return Ok(content);
        }

        let slot: &dyn SlotHandle = self.slot(index)?;
        let reference: String = slot.reference().ok_or(SlotError::NotFound { index })?;

        let Some(service) = service else {
            return Ok(reference);
        };

        match service.get(&reference).await {
            Ok(object) => Ok(encode_object(&object, slot.value().as_deref())),
            Err(e) => {
                log::warn!("Download of slot {} failed, clearing it: {}", index, e);
                slot.clear();
                Err(SlotError::NotFound { index })
            }
        }
    }

    /// Remove a slot's content.
    ///
    /// With an adapter and a reference, the stored object is deleted first and
    /// the slot only cleared on success; a failed delete leaves the slot as it
    /// was. Otherwise the slot is cleared locally and this always succeeds.
    ///
    /// # Arguments
    /// * `index` - Slot index
    /// * `service` - Optional storage adapter
    pub async fn delete(
        &self,
        index: usize,
        service: Option<&dyn StorageService>,
    ) -> Result<(), SlotError> {
        let slot: &dyn SlotHandle = self.slot(index)?;

        if let (Some(reference), Some(service)) = (slot.reference(), service) {
            slot.mark_awaiting();
            log::debug!("Slot {} awaiting delete of {}", index, reference);

            if let Err(e) = service.delete(&reference).await {
                log::warn!("Delete of slot {} failed: {}", index, e);
                slot.cancel_await();
                return Err(e.into());
            }
        }

        self.cache.remove(index);
        slot.clear();
        log::debug!("Slot {} cleared", index);
        Ok(())
    }

    /// Delete every slot concurrently.
    ///
    /// # Returns
    /// The first delete error in completion order; other deletes still run and
    /// keep their effects.
    pub async fn clear(&self, service: Option<&dyn StorageService>) -> Result<(), SlotError> {
        let tasks: FuturesUnordered<_> = (0..self.max_files())
            .map(|index| self.delete(index, service))
            .collect();

        first_error(tasks).await
    }

    /// Resolve an in-range slot.
    fn slot(&self, index: usize) -> Result<&'a dyn SlotHandle, SlotError> {
        let max_slots: usize = self.max_files();
        if index >= max_slots {
            return Err(SlotError::OutOfRange { index, max_slots });
        }
        self.slots
            .slot(index)
            .ok_or(SlotError::OutOfRange { index, max_slots })
    }
}

/// Drive every task to completion and keep the first error.
async fn first_error<F>(mut tasks: FuturesUnordered<F>) -> Result<(), SlotError>
where
    F: Future<Output = Result<(), SlotError>>,
{
    let mut first: Option<SlotError> = None;

    while let Some(result) = tasks.next().await {
        if let Err(e) = result {
            first.get_or_insert(e);
        }
    }

    match first {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{MemorySlotArray, SlotState};

    #[test]
    fn test_available_slots() {
        let slots: MemorySlotArray = MemorySlotArray::new(3);
        slots.slot(1).unwrap().set("b.txt".to_string(), None);
        let coordinator = TransferCoordinator::new(UploadConfig::new(3), &slots);

        assert_eq!(coordinator.available_slots(), vec![0, 2]);
    }

    #[test]
    fn test_available_slots_ignores_missing_host_slots() {
        let slots: MemorySlotArray = MemorySlotArray::new(2);
        let coordinator = TransferCoordinator::new(UploadConfig::new(4), &slots);

        assert_eq!(coordinator.available_slots(), vec![0, 1]);
    }

    #[test]
    fn test_is_uploading_excludes_index_zero() {
        let slots: MemorySlotArray = MemorySlotArray::new(3);
        slots.slot(0).unwrap().mark_awaiting();
        slots.slot(1).unwrap().mark_awaiting();
        let coordinator = TransferCoordinator::new(UploadConfig::new(3), &slots);

        assert_eq!(slots.slot(0).unwrap().state(), SlotState::Awaiting);
        assert!(!coordinator.is_uploading(0));
        assert!(coordinator.is_uploading(1));
        assert!(!coordinator.is_uploading(2));
        assert!(!coordinator.is_uploading(3));
    }

    #[test]
    fn test_is_image() {
        let slots: MemorySlotArray = MemorySlotArray::new(4);
        slots.slot(0).unwrap().set("a.JPEG".to_string(), None);
        slots.slot(1).unwrap().set("b.pdf".to_string(), None);
        let coordinator = TransferCoordinator::new(UploadConfig::new(3), &slots);

        assert!(coordinator.is_image(0));
        assert!(!coordinator.is_image(1));
        assert!(!coordinator.is_image(2));
        assert!(!coordinator.is_image(3));
    }

    #[test]
    fn test_slot_out_of_range() {
        let slots: MemorySlotArray = MemorySlotArray::new(3);
        let coordinator = TransferCoordinator::new(UploadConfig::new(2), &slots);

        assert_eq!(
            coordinator.slot(2).err(),
            Some(SlotError::OutOfRange {
                index: 2,
                max_slots: 2
            })
        );
    }

    #[test]
    fn test_validator_from_config() {
        let slots: MemorySlotArray = MemorySlotArray::new(1);
        let coordinator = TransferCoordinator::new(
            UploadConfig::new(1).with_limit(2.0).with_extensions(".pdf"),
            &slots,
        );

        assert_eq!(coordinator.validator().size_limit_bytes(), 2 * 1024 * 1024);
        assert_eq!(coordinator.validator().allowed_extensions(), [".pdf"]);
    }
}
