//! Client-side checks on a selected file, run before anything is sent.

use thiserror::Error;

use crate::config::{ALLOWED_MIME_TYPES, MAX_FILE_SIZE};
use crate::types::SelectedFile;

/// Why a selected file was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("File size must be less than 50MB. Please choose a smaller file.")]
    TooLarge { size: u64 },

    #[error("Invalid file type. Please upload an image, video, or audio file.")]
    InvalidType { mime_type: String },
}

/// Size first, then MIME type. The first failing check is reported.
pub fn validate_file(file: &SelectedFile) -> Result<(), FileRejection> {
    if file.size > MAX_FILE_SIZE {
        return Err(FileRejection::TooLarge { size: file.size });
    }

    if !is_allowed_mime_type(&file.mime_type) {
        return Err(FileRejection::InvalidType {
            mime_type: file.mime_type.clone(),
        });
    }

    Ok(())
}

pub fn is_allowed_mime_type(mime_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime_type)
}

/// Human-readable size, e.g. `1.5 KB`, `2 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_allowed_type() {
        for mime in ALLOWED_MIME_TYPES {
            let file = SelectedFile::new("f", 10, *mime);
            assert!(validate_file(&file).is_ok(), "{} should be accepted", mime);
        }
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let at_limit = SelectedFile::new("a.png", MAX_FILE_SIZE, "image/png");
        assert!(validate_file(&at_limit).is_ok());

        let over = SelectedFile::new("a.png", MAX_FILE_SIZE + 1, "image/png");
        assert_eq!(
            validate_file(&over),
            Err(FileRejection::TooLarge { size: MAX_FILE_SIZE + 1 })
        );
    }

    #[test]
    fn test_size_checked_before_type() {
        let file = SelectedFile::new("a.exe", MAX_FILE_SIZE * 2, "application/x-msdownload");
        let err = validate_file(&file).unwrap_err();
        assert!(matches!(err, FileRejection::TooLarge { .. }));
        assert!(err.to_string().starts_with("File size must be less than 50MB"));
    }

    #[test]
    fn test_rejects_unknown_type() {
        for mime in ["application/pdf", "text/plain", "", "IMAGE/PNG", "image/webp"] {
            let file = SelectedFile::new("f", 10, mime);
            let err = validate_file(&file).unwrap_err();
            assert!(err.to_string().starts_with("Invalid file type"), "{}", mime);
        }
    }

    #[test]
    fn test_m4a_spellings() {
        assert!(is_allowed_mime_type("audio/m4a"));
        assert!(is_allowed_mime_type("audio/mp3"));
        assert!(!is_allowed_mime_type("audio/x-m4a"));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }
}
