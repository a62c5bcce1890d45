use thiserror::Error;

use caramelchat_models::{FileAttachment, ALLOWED_EXTENSIONS, MAX_FILE_BYTES};

/// Why an attachment was refused
///
/// The `Display` strings are exactly what the session posts into the thread
/// as a bot-authored error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("File is too large. Maximum size is 10MB.")]
    TooLarge,
    #[error("Unsupported file type. Allowed: .pdf, .txt, .docx, .csv")]
    UnsupportedType,
}

/// Check an attachment against the size ceiling and the extension allow-list.
pub fn validate_attachment(file: &FileAttachment) -> Result<(), FileRejection> {
    if file.size > MAX_FILE_BYTES {
        return Err(FileRejection::TooLarge);
    }

    match file.extension() {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(FileRejection::UnsupportedType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions_pass() {
        for name in ["a.pdf", "b.txt", "c.docx", "d.csv"] {
            let file = FileAttachment::new(name, vec![0u8; 16]);
            assert_eq!(validate_attachment(&file), Ok(()), "{} should pass", name);
        }
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let file = FileAttachment::new("Report.PDF", vec![0u8; 16]);
        assert_eq!(validate_attachment(&file), Ok(()));
    }

    #[test]
    fn test_oversize_file_is_rejected() {
        let mut file = FileAttachment::new("big.pdf", Vec::new());
        file.size = MAX_FILE_BYTES + 1;
        assert_eq!(validate_attachment(&file), Err(FileRejection::TooLarge));
    }

    #[test]
    fn test_file_at_ceiling_passes() {
        let mut file = FileAttachment::new("exact.pdf", Vec::new());
        file.size = MAX_FILE_BYTES;
        assert_eq!(validate_attachment(&file), Ok(()));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let file = FileAttachment::new("image.png", vec![0u8; 16]);
        assert_eq!(validate_attachment(&file), Err(FileRejection::UnsupportedType));
    }

    #[test]
    fn test_extensionless_name_is_rejected() {
        let file = FileAttachment::new("README", vec![0u8; 16]);
        assert_eq!(validate_attachment(&file), Err(FileRejection::UnsupportedType));
    }

    #[test]
    fn test_rejection_messages_name_the_rule() {
        assert!(FileRejection::TooLarge.to_string().contains("10MB"));
        let listed = FileRejection::UnsupportedType.to_string();
        for ext in ALLOWED_EXTENSIONS {
            assert!(listed.contains(ext), "message should list {}", ext);
        }
    }
}
