//! File classification.
//!
//! No detection model is wired in yet: every file of a given kind gets the
//! same placeholder score so the upload flow can be exercised end to end.

/// Extensions accepted by the upload endpoint (lowercase).
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "mp4", "avi", "mov", "mp3", "wav", "ogg", "m4a",
];

pub const PLACEHOLDER_MESSAGE: &str = "Analysis complete! This is a prototype with dummy results.";

/// Media category derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Video,
    Audio,
    Unknown,
}

impl FileKind {
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" => FileKind::Image,
            "mp4" | "avi" | "mov" => FileKind::Video,
            "mp3" | "wav" | "ogg" | "m4a" => FileKind::Audio,
            _ => FileKind::Unknown,
        }
    }

    pub fn from_filename(filename: &str) -> Self {
        extension(filename)
            .map(|ext| Self::from_extension(&ext))
            .unwrap_or(FileKind::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Image => "Image",
            FileKind::Video => "Video",
            FileKind::Audio => "Audio",
            FileKind::Unknown => "Unknown",
        }
    }

    fn placeholder_confidence(&self) -> f64 {
        match self {
            FileKind::Image => 0.85,
            FileKind::Video => 0.92,
            FileKind::Audio => 0.78,
            FileKind::Unknown => 0.50,
        }
    }
}

/// Lowercased text after the last dot, if any.
pub fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

pub fn is_allowed_file(filename: &str) -> bool {
    extension(filename).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Reduce a client-supplied name to something safe to echo or store.
///
/// Path separators and whitespace become `_`, anything outside
/// `[A-Za-z0-9._-]` is dropped, and leading/trailing `.`/`_` are trimmed.
pub fn sanitize_filename(filename: &str) -> String {
    let spaced: String = filename
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Outcome of analysing one file.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub kind: FileKind,
    /// Likelihood the file is synthetic, in [0, 1]
    pub confidence: f64,
    pub label: String,
}

pub fn analyze(filename: &str) -> Detection {
    let kind = FileKind::from_filename(filename);
    let confidence = kind.placeholder_confidence();
    let percent = (confidence * 100.0) as u32;
    let verdict = if kind == FileKind::Unknown { "Unknown" } else { "Fake" };

    Detection {
        kind,
        confidence,
        label: format!("Testing: {}% {}", percent, verdict),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        assert!(is_allowed_file("photo.png"));
        assert!(is_allowed_file("CLIP.MOV"));
        assert!(is_allowed_file("archive.tar.mp3"));
        assert!(!is_allowed_file("notes.txt"));
        assert!(!is_allowed_file("noextension"));
        assert!(!is_allowed_file("trailingdot."));
    }

    #[test]
    fn test_file_kind() {
        assert_eq!(FileKind::from_filename("a.JPEG"), FileKind::Image);
        assert_eq!(FileKind::from_filename("a.avi"), FileKind::Video);
        assert_eq!(FileKind::from_filename("a.m4a"), FileKind::Audio);
        assert_eq!(FileKind::from_filename("a.bin"), FileKind::Unknown);
        assert_eq!(FileKind::from_filename("a"), FileKind::Unknown);
    }

    #[test]
    fn test_placeholder_results() {
        let image = analyze("a.jpg");
        assert_eq!(image.kind, FileKind::Image);
        assert_eq!(image.confidence, 0.85);
        assert_eq!(image.label, "Testing: 85% Fake");

        assert_eq!(analyze("a.mp4").label, "Testing: 92% Fake");
        assert_eq!(analyze("a.wav").label, "Testing: 78% Fake");
        assert_eq!(analyze("a.xyz").label, "Testing: 50% Unknown");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("my photo.jpg"), "my_photo.jpg");
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\clip.mp4"), "C_Users_me_clip.mp4");
        assert_eq!(sanitize_filename(".hidden.png"), "hidden.png");
        assert_eq!(sanitize_filename("été.png"), "t.png");
        assert_eq!(sanitize_filename("???"), "upload");
    }
}
