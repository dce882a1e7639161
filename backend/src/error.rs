//! Error types for the upload server.
//!
//! - [`UploadError`] - per-request failures, rendered as JSON error bodies
//! - [`ServerError`] - startup and serving failures

use std::net::SocketAddr;

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::types::ErrorResponse;

// =============================================================================
// Upload Errors
// =============================================================================

/// Why an upload could not be analysed.
///
/// The `Display` text is what the client sees in the `error` field.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No `file` field, or one without a filename.
    #[error("No file selected")]
    NoFile,

    /// Extension outside the allow-list.
    #[error("File type not supported. Please upload image, video, or audio files.")]
    UnsupportedType(String),

    /// Body or file over the configured limit.
    #[error("File too large. Maximum size is {max_mb} MB.")]
    TooLarge { max_mb: usize },

    /// Not a readable multipart request.
    #[error("Invalid upload request: {0}")]
    BadRequest(String),

    /// Anything else; details are logged, not returned.
    #[error("An error occurred while processing your file. Please try again.")]
    Internal(String),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::NoFile | UploadError::UnsupportedType(_) | UploadError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Classify a failure while reading the multipart stream.
    pub fn from_multipart(err: MultipartError, max_mb: usize) -> Self {
        match err.status() {
            StatusCode::PAYLOAD_TOO_LARGE => UploadError::TooLarge { max_mb },
            status if status.is_client_error() => UploadError::BadRequest(err.body_text()),
            _ => UploadError::Internal(err.body_text()),
        }
    }
}

impl From<MultipartRejection> for UploadError {
    fn from(rejection: MultipartRejection) -> Self {
        UploadError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        if let UploadError::Internal(detail) = &self {
            log::error!("Error processing upload: {}", detail);
        }
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Result type for upload handling.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
