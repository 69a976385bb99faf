//! File name helpers shared by validation, encoding and the storage adapters.

use crate::constants::{DEFAULT_MIME_TYPE, IMAGE_EXTENSIONS, SLOT_NAME_PREFIX};

/// Extract the lowercase extension of a file name, including the leading dot.
///
/// Only the last dot counts, so `archive.tar.GZ` yields `.gz`. A name without
/// a dot, or whose only dot is the first character (`.bashrc`), has no extension.
///
/// # Arguments
/// * `file_name` - File name to inspect
///
/// # Returns
/// The extension such as `.png`, or an empty string.
pub fn extension_of(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(n) if n > 0 => file_name[n..].to_lowercase(),
        _ => String::new(),
    }
}

/// Check whether a file name carries one of the image extensions.
///
/// # Arguments
/// * `file_name` - File name to inspect
pub fn has_image_extension(file_name: &str) -> bool {
    let extension: String = extension_of(file_name);
    IMAGE_EXTENSIONS.contains(&extension.as_str())
}

/// Infer a mime type from a file name's extension.
///
/// # Arguments
/// * `file_name` - File name to inspect
///
/// # Returns
/// A mime type, falling back to `application/octet-stream`.
pub fn mime_type_for(file_name: &str) -> &'static str {
    match extension_of(file_name).as_str() {
        ".jpg" | ".jpeg" => "image/jpeg",
        ".png" => "image/png",
        ".gif" => "image/gif",
        ".webp" => "image/webp",
        ".svg" => "image/svg+xml",
        ".pdf" => "application/pdf",
        ".txt" => "text/plain",
        ".csv" => "text/csv",
        ".json" => "application/json",
        ".zip" => "application/zip",
        _ => DEFAULT_MIME_TYPE,
    }
}

/// Host name of the value slot at `index`.
pub fn slot_name(index: usize) -> String {
    format!("{}{}", SLOT_NAME_PREFIX, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of_simple() {
        assert_eq!(extension_of("photo.PNG"), ".png");
        assert_eq!(extension_of("report.pdf"), ".pdf");
    }

    #[test]
    fn test_extension_of_uses_last_dot() {
        assert_eq!(extension_of("archive.tar.GZ"), ".gz");
    }

    #[test]
    fn test_extension_of_missing() {
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(""), "");
    }

    #[test]
    fn test_extension_of_leading_dot_only() {
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of(".config.toml"), ".toml");
    }

    #[test]
    fn test_extension_of_trailing_dot() {
        assert_eq!(extension_of("name."), ".");
    }

    #[test]
    fn test_has_image_extension() {
        assert!(has_image_extension("a.jpg"));
        assert!(has_image_extension("a.JPEG"));
        assert!(has_image_extension("dir.v2/a.webp"));
        assert!(!has_image_extension("a.svg"));
        assert!(!has_image_extension("png"));
        assert!(!has_image_extension(""));
    }

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for("a.JPG"), "image/jpeg");
        assert_eq!(mime_type_for("notes.txt"), "text/plain");
        assert_eq!(mime_type_for("blob"), DEFAULT_MIME_TYPE);
        assert_eq!(mime_type_for("x.unknown"), DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_slot_name() {
        assert_eq!(slot_name(0), "file-0");
        assert_eq!(slot_name(12), "file-12");
    }
}
