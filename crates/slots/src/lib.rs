//! Fixed-capacity file attachment slots for a host form engine.
//!
//! A block owns `max_files` host slots named `file-0`, `file-1`, ... and moves
//! file content in and out of them, optionally through a pluggable
//! [`StorageService`] adapter.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: TransferCoordinator (upload / download / delete / clear)
//! Layer 2: Validator, ContentCache, data URL encoding
//! Layer 1: UploadConfig, host SlotArray contract, StorageService adapter
//! ```
//!
//! # Slot lifecycle
//!
//! ```text
//! Empty --mark_awaiting--> Awaiting --set--> Filled
//!   ^                         |                 |
//!   +---------clear-----------+------clear------+
//! ```

pub mod cache;
pub mod config;
pub mod coordinator;
pub mod encode;
pub mod error;
pub mod slot;
pub mod validate;

pub use cache::ContentCache;
pub use config::UploadConfig;
pub use coordinator::TransferCoordinator;
pub use encode::{data_url, encode_file, encode_object};
pub use error::{ConfigError, SlotError};
pub use slot::{MemorySlot, MemorySlotArray, SlotArray, SlotHandle, SlotSnapshot, SlotState};
pub use validate::{
    allowed_extensions, is_image_reference, size_limit_bytes, size_limit_mib, Validator,
};

pub use rusty_file_slots_common::{progress_fn, NoOpProgress, ProgressCallback};
pub use rusty_file_slots_storage::{
    DirectoryStorageService, MemoryStorageService, StorageError, StorageService, StoredObject,
    UploadFile,
};
