//! Storage abstraction for attachment slot content.
//!
//! This crate provides the adapter interface that attachment slots transfer
//! content through, plus two ready-made backends:
//!
//! - **Memory** - Objects kept in process memory, useful for embedding and tests
//! - **Directory** - Objects persisted as files under a local directory
//!
//! # Example
//!
//! ```ignore
//! use rusty_file_slots_storage::{DirectoryStorageService, StorageService, UploadFile};
//!
//! let service = DirectoryStorageService::new("/var/lib/attachments");
//! let reference = service.put(&UploadFile::new("a.png", bytes), None).await?;
//! let object = service.get(&reference).await?;
//! ```

mod directory;
mod error;
mod memory;
mod traits;
mod types;

pub use directory::{DirectoryStorageOptions, DirectoryStorageService, DEFAULT_WRITE_CHUNK_SIZE};
pub use error::StorageError;
pub use memory::MemoryStorageService;
pub use rusty_file_slots_common::{progress_fn, NoOpProgress, ProgressCallback};
pub use traits::StorageService;
pub use types::{StoredObject, UploadFile};
