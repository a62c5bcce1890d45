use anyhow::{Context, Result};
use std::path::Path;

use crate::{FileInfo, MAX_FILE_BYTES};

/// A file selected for upload: metadata plus content bytes
///
/// Oversize files keep their real `size` but carry no bytes; the session
/// rejects them before the bytes are ever needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub name: String,
    pub content_type: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        Self {
            content_type: content_type_for(&name).to_string(),
            size: bytes.len() as u64,
            name,
            bytes,
        }
    }

    /// Load an attachment from disk.
    ///
    /// The size comes from file metadata so that an oversize file can still
    /// be handed to the session (which rejects it) without reading it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .with_context(|| format!("Not a file path: {}", path.display()))?;

        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let size = metadata.len();

        let bytes = if size <= MAX_FILE_BYTES {
            std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?
        } else {
            Vec::new()
        };

        Ok(Self {
            content_type: content_type_for(&name).to_string(),
            name,
            size,
            bytes,
        })
    }

    /// Lower-cased extension including the leading dot, if any
    pub fn extension(&self) -> Option<String> {
        let dot = self.name.rfind('.')?;
        if dot == 0 || dot == self.name.len() - 1 {
            return None;
        }
        Some(self.name[dot..].to_lowercase())
    }

    pub fn file_info(&self) -> FileInfo {
        FileInfo {
            name: self.name.clone(),
            content_type: self.content_type.clone(),
            size: self.size,
        }
    }
}

/// MIME type for the extensions the backend accepts
fn content_type_for(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".txt") {
        "text/plain"
    } else if lower.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lower.ends_with(".csv") {
        "text/csv"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_lowercased() {
        let file = FileAttachment::new("Report.PDF", vec![1, 2, 3]);
        assert_eq!(file.extension().as_deref(), Some(".pdf"));
    }

    #[test]
    fn test_extension_absent_without_dot() {
        let file = FileAttachment::new("README", vec![]);
        assert_eq!(file.extension(), None);
    }

    #[test]
    fn test_content_type_mapping() {
        assert_eq!(FileAttachment::new("a.pdf", vec![]).content_type, "application/pdf");
        assert_eq!(FileAttachment::new("a.txt", vec![]).content_type, "text/plain");
        assert_eq!(FileAttachment::new("a.csv", vec![]).content_type, "text/csv");
        assert_eq!(
            FileAttachment::new("a.png", vec![]).content_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn test_file_info_mirrors_attachment() {
        let file = FileAttachment::new("notes.txt", b"hello".to_vec());
        let info = file.file_info();
        assert_eq!(info.name, "notes.txt");
        assert_eq!(info.size, 5);
        assert_eq!(info.content_type, "text/plain");
    }
}
