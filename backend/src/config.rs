//! Server configuration.
//!
//! Defaults live here; `main.rs` overrides them from command-line
//! arguments and the environment.

use std::path::PathBuf;
use std::time::Duration;

/// Multipart field carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// Largest accepted file, in bytes (50 MB).
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Allowance on top of the file for multipart boundaries and headers.
pub const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub const DEFAULT_PORT: u16 = 5000;

/// Simulated processing time per upload.
pub const DEFAULT_DELAY_MS: u64 = 1_000;

/// Where `trunk build` puts the frontend.
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served for every path that is not an API route
    pub static_dir: PathBuf,
    pub processing_delay: Duration,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            processing_delay: Duration::from_millis(DEFAULT_DELAY_MS),
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Request body limit enforced by the router.
    pub fn body_limit(&self) -> usize {
        self.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD)
    }

    /// Limit in whole megabytes, as shown to users.
    pub fn max_upload_mb(&self) -> usize {
        self.max_upload_bytes / (1024 * 1024)
    }
}
