//! Application configuration.
//!
//! Centralized configuration for the Deepfake Detector frontend.
//! The page is served by the backend itself, so the upload endpoint is a
//! same-origin path.

/// Upload endpoint (multipart POST).
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Multipart field carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// Maximum file size for upload (in bytes).
///
/// 50 MiB limit, mirrored by the backend body limit.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// MIME types accepted by the file picker.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/gif",
    "video/mp4",
    "video/avi",
    "video/quicktime",
    "audio/mpeg",
    "audio/wav",
    "audio/ogg",
    "audio/mp3",
    "audio/m4a",
];

/// How long an error banner stays on screen (milliseconds).
pub const ERROR_BANNER_TIMEOUT_MS: u32 = 5_000;

/// Scroll offset (px) past which the navbar turns opaque.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Height of the fixed navbar, subtracted from anchor scroll targets.
pub const HEADER_OFFSET: f64 = 70.0;

/// Hero translate per scrolled pixel.
pub const PARALLAX_FACTOR: f64 = 0.5;

// =============================================================================
// User-facing texts
// =============================================================================

/// Submit button label while idle.
pub const ANALYZE_LABEL: &str = "Analyze File";

/// Submit button label while a request is in flight.
pub const ANALYZING_LABEL: &str = "Analyzing...";

pub const MISSING_FILE_MESSAGE: &str = "Please select a file to analyze.";

/// Shown when the server rejects a file without saying why.
pub const GENERIC_ANALYSIS_ERROR: &str = "An error occurred during analysis.";

pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";
