//! Conversion of binary content into displayable data URLs.

use base64::{engine::general_purpose, Engine};
use rusty_file_slots_common::{mime_type_for, ProgressCallback};
use rusty_file_slots_storage::{StoredObject, UploadFile};

/// Encode bytes as a `data:<mime>;base64,<payload>` URL.
///
/// # Arguments
/// * `mime` - Mime type placed in the URL header
/// * `data` - Content bytes
pub fn data_url(mime: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(data))
}

/// Encode an upload file, using its declared or inferred mime type.
pub fn encode_file(file: &UploadFile) -> String {
    data_url(file.mime_type(), &file.data)
}

/// Encode an upload file, reporting start and completion to `progress`.
pub fn encode_file_with_progress(
    file: &UploadFile,
    progress: Option<&dyn ProgressCallback>,
) -> String {
    if let Some(cb) = progress {
        cb.on_progress(0.0);
    }
    let content: String = encode_file(file);
    if let Some(cb) = progress {
        cb.on_progress(100.0);
    }
    content
}

/// Encode an object fetched from storage.
///
/// The object's own content type wins; otherwise it is inferred from
/// `name_hint` (typically the slot's file name).
pub fn encode_object(object: &StoredObject, name_hint: Option<&str>) -> String {
    let mime: &str = match object.content_type.as_deref() {
        Some(content_type) if !content_type.is_empty() => content_type,
        _ => mime_type_for(name_hint.unwrap_or_default()),
    };
    data_url(mime, &object.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_file_slots_common::progress_fn;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("text/plain", b"hello"), "data:text/plain;base64,aGVsbG8=");
        assert_eq!(data_url("text/plain", b""), "data:text/plain;base64,");
    }

    #[test]
    fn test_encode_file_infers_mime() {
        let file: UploadFile = UploadFile::new("a.png", vec![0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(encode_file(&file), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_encode_file_with_progress() {
        let seen: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_clone: Arc<Mutex<Vec<f64>>> = seen.clone();
        let callback = progress_fn(move |p: f64| seen_clone.lock().unwrap().push(p));

        let content: String =
            encode_file_with_progress(&UploadFile::new("a.txt", b"hi".to_vec()), Some(&callback));

        assert_eq!(content, "data:text/plain;base64,aGk=");
        assert_eq!(*seen.lock().unwrap(), vec![0.0, 100.0]);
    }

    #[test]
    fn test_encode_object_prefers_declared_type() {
        let object: StoredObject = StoredObject::new(b"hi".to_vec(), Some("image/gif".to_string()));
        assert_eq!(
            encode_object(&object, Some("a.png")),
            "data:image/gif;base64,aGk="
        );
    }

    #[test]
    fn test_encode_object_falls_back_to_name() {
        let object: StoredObject = StoredObject::new(b"hi".to_vec(), None);
        assert_eq!(
            encode_object(&object, Some("a.png")),
            "data:image/png;base64,aGk="
        );
        assert_eq!(
            encode_object(&object, None),
            "data:application/octet-stream;base64,aGk="
        );
    }
}
