//! Shared types and utilities for rusty-file-slots.
//!
//! This crate provides common functionality used across all rusty-file-slots crates:
//! - File name helpers (extension parsing, image detection, mime inference)
//! - Percentage progress callback trait
//! - Shared constants (size limits, slot naming)

pub mod constants;
pub mod path_utils;
pub mod progress;

// Re-export commonly used items at crate root
pub use constants::*;
pub use path_utils::{extension_of, has_image_extension, mime_type_for, slot_name};
pub use progress::{percent_of, progress_fn, FnProgress, NoOpProgress, ProgressCallback};
