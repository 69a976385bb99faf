//! Shared data structures for storage operations.

use rusty_file_slots_common::mime_type_for;

/// A file handed to an upload, fully read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Original file name, including its extension.
    pub name: String,
    /// Declared mime type, if the caller knows it.
    pub content_type: Option<String>,
    /// File contents.
    pub data: Vec<u8>,
}

impl UploadFile {
    /// Create a new upload file without a declared mime type.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    /// Set the declared mime type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// File size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Declared mime type, or one inferred from the file name.
    ///
    /// An empty declared type counts as undeclared.
    pub fn mime_type(&self) -> &str {
        match self.content_type.as_deref() {
            Some(content_type) if !content_type.is_empty() => content_type,
            _ => mime_type_for(&self.name),
        }
    }
}

/// Binary content returned by a storage adapter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoredObject {
    /// Stored bytes.
    pub data: Vec<u8>,
    /// Mime type recorded by the adapter, if any.
    pub content_type: Option<String>,
}

impl StoredObject {
    /// Create a stored object.
    pub fn new(data: impl Into<Vec<u8>>, content_type: Option<String>) -> Self {
        Self {
            data: data.into(),
            content_type,
        }
    }

    /// Object size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

impl From<&UploadFile> for StoredObject {
    fn from(file: &UploadFile) -> Self {
        Self {
            data: file.data.clone(),
            content_type: Some(file.mime_type().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_file_size() {
        let file: UploadFile = UploadFile::new("a.bin", vec![0u8; 1536]);
        assert_eq!(file.size(), 1536);
    }

    #[test]
    fn test_upload_file_mime_declared() {
        let file: UploadFile = UploadFile::new("a.bin", vec![1, 2]).with_content_type("image/png");
        assert_eq!(file.mime_type(), "image/png");
    }

    #[test]
    fn test_upload_file_mime_inferred() {
        let file: UploadFile = UploadFile::new("photo.JPG", vec![1, 2]);
        assert_eq!(file.mime_type(), "image/jpeg");

        let empty_declared: UploadFile = UploadFile::new("photo.png", vec![]).with_content_type("");
        assert_eq!(empty_declared.mime_type(), "image/png");
    }

    #[test]
    fn test_stored_object_from_upload_file() {
        let file: UploadFile = UploadFile::new("notes.txt", b"hello".to_vec());
        let object: StoredObject = StoredObject::from(&file);
        assert_eq!(object.data, b"hello");
        assert_eq!(object.content_type.as_deref(), Some("text/plain"));
        assert_eq!(object.size(), 5);
    }
}
