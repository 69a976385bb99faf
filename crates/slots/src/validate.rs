//! File validation against the configured size limit and extension allow-list.

use rusty_file_slots_common::{
    extension_of, has_image_extension, BYTES_PER_MIB, DEFAULT_SIZE_LIMIT_MIB,
};
use rusty_file_slots_storage::UploadFile;

use crate::config::UploadConfig;
use crate::error::SlotError;

/// Normalize a comma separated extension list.
///
/// Spaces are removed and everything is lowercased; entries shorter than two
/// characters or not starting with `.` are dropped.
///
/// # Arguments
/// * `spec` - Raw list such as `".png, .JPG"`
///
/// # Returns
/// The allow-list in source order. Empty means every extension is accepted.
pub fn allowed_extensions(spec: Option<&str>) -> Vec<String> {
    let Some(spec) = spec else {
        return Vec::new();
    };

    spec.to_lowercase()
        .replace(' ', "")
        .split(',')
        .filter(|extension| extension.chars().count() >= 2 && extension.starts_with('.'))
        .map(str::to_string)
        .collect()
}

/// Effective size limit in MiB.
///
/// Absent, zero, negative and NaN limits fall back to 50 MiB.
pub fn size_limit_mib(limit: Option<f64>) -> f64 {
    match limit {
        Some(limit) if limit > 0.0 => limit,
        _ => DEFAULT_SIZE_LIMIT_MIB,
    }
}

/// Effective size limit in bytes (fractional bytes are truncated).
pub fn size_limit_bytes(limit: Option<f64>) -> u64 {
    (size_limit_mib(limit) * BYTES_PER_MIB as f64) as u64
}

/// Check whether a stored name refers to a displayable image.
pub fn is_image_reference(name: &str) -> bool {
    has_image_extension(name)
}

/// Validates candidate files for one attachment block.
#[derive(Debug, Clone, PartialEq)]
pub struct Validator {
    /// Normalized allow-list; empty accepts everything.
    allowed_extensions: Vec<String>,
    /// Maximum accepted size in bytes.
    size_limit: u64,
}

impl Validator {
    /// Derive a validator from configuration.
    pub fn from_config(config: &UploadConfig) -> Self {
        Self {
            allowed_extensions: config.allowed_extensions(),
            size_limit: config.size_limit_bytes(),
        }
    }

    /// Normalized extension allow-list.
    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    /// Maximum accepted size in bytes.
    pub fn size_limit_bytes(&self) -> u64 {
        self.size_limit
    }

    /// Check the file's extension against the allow-list.
    pub fn validate_extension(&self, file: &UploadFile) -> bool {
        if self.allowed_extensions.is_empty() {
            return true;
        }
        let extension: String = extension_of(&file.name);
        self.allowed_extensions.contains(&extension)
    }

    /// Check the file's size against the limit (inclusive).
    pub fn validate_size(&self, file: &UploadFile) -> bool {
        file.size() <= self.size_limit
    }

    /// Run both checks, extension first.
    ///
    /// # Returns
    /// `InvalidExtension` or `InvalidSize` for the first failed check.
    pub fn check(&self, file: &UploadFile) -> Result<(), SlotError> {
        if !self.validate_extension(file) {
            return Err(SlotError::InvalidExtension {
                name: file.name.clone(),
                extension: extension_of(&file.name),
            });
        }

        if !self.validate_size(file) {
            return Err(SlotError::InvalidSize {
                name: file.name.clone(),
                size: file.size(),
                limit: self.size_limit,
            });
        }

        Ok(())
    }
}
