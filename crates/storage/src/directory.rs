//! Directory-backed storage adapter.
//!
//! Each stored object is a single file directly under the root directory,
//! named `<uuid><extension>`. The file name is the reference, so the mime
//! type of a fetched object is inferred from the reference itself.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rusty_file_slots_common::{extension_of, mime_type_for, percent_of, ProgressCallback};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::StorageError;
use crate::traits::StorageService;
use crate::types::{StoredObject, UploadFile};

/// Default number of bytes written between progress reports (1MB).
pub const DEFAULT_WRITE_CHUNK_SIZE: usize = 1024 * 1024;

/// Options for the directory storage adapter.
#[derive(Debug, Clone)]
pub struct DirectoryStorageOptions {
    /// Bytes written per step; progress is reported after each step.
    pub write_chunk_size: usize,
}

impl Default for DirectoryStorageOptions {
    fn default() -> Self {
        Self {
            write_chunk_size: DEFAULT_WRITE_CHUNK_SIZE,
        }
    }
}

impl DirectoryStorageOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bytes written between progress reports.
    pub fn with_write_chunk_size(mut self, write_chunk_size: usize) -> Self {
        self.write_chunk_size = write_chunk_size;
        self
    }
}

/// Storage adapter persisting objects as files in a local directory.
#[derive(Debug, Clone)]
pub struct DirectoryStorageService {
    /// Directory holding stored objects.
    root: PathBuf,
    /// Adapter options.
    options: DirectoryStorageOptions,
}

impl DirectoryStorageService {
    /// Create an adapter storing objects under `root`.
    ///
    /// The directory is created on the first `put` if it does not exist.
    ///
    /// # Arguments
    /// * `root` - Directory holding stored objects
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: DirectoryStorageOptions::default(),
        }
    }

    /// Set adapter options.
    ///
    /// # Arguments
    /// * `options` - Adapter options
    pub fn with_options(mut self, options: DirectoryStorageOptions) -> Self {
        self.options = options;
        self
    }

    /// Directory holding stored objects.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a reference to its file path.
    ///
    /// References that could escape the root directory resolve to nothing.
    fn object_path(&self, reference: &str) -> Option<PathBuf> {
        if reference.is_empty()
            || reference.contains('/')
            || reference.contains('\\')
            || reference.contains("..")
        {
            return None;
        }
        Some(self.root.join(reference))
    }

    fn resolve(&self, reference: &str) -> Result<PathBuf, StorageError> {
        self.object_path(reference).ok_or_else(|| {
            log::warn!("Rejected storage reference {:?}", reference);
            StorageError::NotFound {
                reference: reference.to_string(),
            }
        })
    }

    async fn write_object(
        &self,
        path: &Path,
        data: &[u8],
        progress: Option<&dyn ProgressCallback>,
    ) -> std::io::Result<()> {
        let mut file: File = File::create(path).await?;
        let total: u64 = data.len() as u64;
        let chunk_size: usize = self.options.write_chunk_size.max(1);
        let mut written: u64 = 0;

        for chunk in data.chunks(chunk_size) {
            file.write_all(chunk).await?;
            written += chunk.len() as u64;
            if let Some(cb) = progress {
                cb.on_progress(percent_of(written, total));
            }
        }

        file.flush().await?;
        Ok(())
    }
}

/// Map an I/O error on a stored object to a storage error.
fn map_io_error(reference: &str, path: &Path, err: std::io::Error) -> StorageError {
    match err.kind() {
        std::io::ErrorKind::NotFound => StorageError::NotFound {
            reference: reference.to_string(),
        },
        std::io::ErrorKind::PermissionDenied => StorageError::AccessDenied {
            reference: reference.to_string(),
            message: err.to_string(),
        },
        _ => StorageError::IoError {
            path: path.display().to_string(),
            message: err.to_string(),
        },
    }
}

#[async_trait]
impl StorageService for DirectoryStorageService {
    async fn get(&self, reference: &str) -> Result<StoredObject, StorageError> {
        let path: PathBuf = self.resolve(reference)?;
        let data: Vec<u8> = tokio::fs::read(&path)
            .await
            .map_err(|e| map_io_error(reference, &path, e))?;

        Ok(StoredObject::new(
            data,
            Some(mime_type_for(reference).to_string()),
        ))
    }

    async fn put(
        &self,
        file: &UploadFile,
        progress: Option<&dyn ProgressCallback>,
    ) -> Result<String, StorageError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::IoError {
                path: self.root.display().to_string(),
                message: e.to_string(),
            })?;

        let reference: String = format!(
            "{}{}",
            uuid::Uuid::new_v4().simple(),
            extension_of(&file.name)
        );
        let path: PathBuf = self.resolve(&reference)?;

        if let Some(cb) = progress {
            cb.on_progress(0.0);
        }

        if let Err(e) = self.write_object(&path, &file.data, progress).await {
            // Drop the partial object so the reference never becomes visible
            let _ = tokio::fs::remove_file(&path).await;
            return Err(map_io_error(&reference, &path, e));
        }

        if file.data.is_empty() {
            if let Some(cb) = progress {
                cb.on_progress(100.0);
            }
        }

        log::debug!(
            "Stored {} ({} bytes) at {}",
            file.name,
            file.size(),
            path.display()
        );
        Ok(reference)
    }

    async fn delete(&self, reference: &str) -> Result<(), StorageError> {
        let path: PathBuf = self.resolve(reference)?;
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| map_io_error(reference, &path, e))
    }
}
