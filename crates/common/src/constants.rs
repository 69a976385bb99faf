//! Shared constants used across rusty-file-slots crates.

/// Number of bytes in one mebibyte.
pub const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Size limit applied when none (or a non-positive one) is configured, in MiB.
pub const DEFAULT_SIZE_LIMIT_MIB: f64 = 50.0;

/// Extensions (lowercase, dot-prefixed) that are treated as displayable images.
pub const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// Prefix of host slot names; slot `i` is called `file-{i}`.
pub const SLOT_NAME_PREFIX: &str = "file-";

/// Mime type used when neither the object nor its name says otherwise.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";
