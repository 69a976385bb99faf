//! Upload configuration supplied by the host form definition.
//!
//! The host authors three values per attachment block: the number of file
//! slots, an optional size limit in MiB and an optional comma separated list
//! of allowed extensions. Everything else is derived from these.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validate::{allowed_extensions, size_limit_bytes, size_limit_mib};

/// Configuration of one attachment block.
///
/// # Example
///
/// ```ignore
/// let config = UploadConfig::new(3)
///     .with_limit(10.0)
///     .with_extensions(".png, .jpg");
///
/// assert_eq!(config.size_limit_bytes(), 10 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfig {
    /// Maximum number of files, which is also the number of slots.
    pub max_files: usize,
    /// Maximum file size in MiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    /// Comma separated list of allowed file extensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<String>,
}

impl UploadConfig {
    /// Create a configuration with no size limit or extension restriction.
    ///
    /// # Arguments
    /// * `max_files` - Number of slots
    pub fn new(max_files: usize) -> Self {
        Self {
            max_files,
            limit: None,
            extensions: None,
        }
    }

    /// Parse the host's JSON configuration surface.
    ///
    /// # Arguments
    /// * `json` - Object with `maxFiles` and optional `limit` / `extensions`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the size limit in MiB.
    pub fn with_limit(mut self, limit: f64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the comma separated extension list.
    pub fn with_extensions(mut self, extensions: impl Into<String>) -> Self {
        self.extensions = Some(extensions.into());
        self
    }

    /// Number of slots.
    pub fn max_files(&self) -> usize {
        self.max_files
    }

    /// Effective size limit in MiB (50 unless a positive limit is set).
    pub fn limit_mib(&self) -> f64 {
        size_limit_mib(self.limit)
    }

    /// Effective size limit in bytes.
    pub fn size_limit_bytes(&self) -> u64 {
        size_limit_bytes(self.limit)
    }

    /// Normalized extension allow-list; empty means every extension is accepted.
    pub fn allowed_extensions(&self) -> Vec<String> {
        allowed_extensions(self.extensions.as_deref())
    }
}
