//! # Deepfake Detector - upload backend
//!
//! Receives a single image, video or audio file over multipart HTTP and
//! answers with a deepfake likelihood. Also serves the Leptos frontend.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Browser    │────▶│ POST /upload│────▶│ Classifier  │────▶│  JSON reply │
//! │ (multipart) │     │ (axum)      │     │ (by kind)   │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Upload and server error types
//! - [`config`] - Limits, defaults and `ServerConfig`
//! - [`classifier`] - Extension checks and placeholder scoring
//! - [`api`] - HTTP router, handlers and wire types

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{analyze_upload, build_router, serve, start_server, AnalysisResponse, ErrorResponse};
pub use classifier::{analyze, is_allowed_file, sanitize_filename, Detection, FileKind};
pub use config::ServerConfig;
pub use error::{ServerError, UploadError};
