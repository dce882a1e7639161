//! HTTP Server for the Deepfake Detector.
//!
//! Hosts the upload endpoint and serves the compiled frontend.
//!
//! # API Endpoints
//!
//! | Method | Path      | Description                               |
//! |--------|-----------|-------------------------------------------|
//! | GET    | `/health` | Health check                              |
//! | POST   | `/upload` | Upload a file (multipart field `file`)    |
//! | GET    | `/*`      | Static frontend files                     |

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::{header, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::types::AnalysisResponse;
use crate::classifier::{analyze, is_allowed_file, sanitize_filename};
use crate::config::{ServerConfig, UPLOAD_FIELD};
use crate::error::{ServerError, ServerResult, UploadError, UploadResult};

#[derive(Clone)]
struct AppState {
    config: Arc<ServerConfig>,
}

/// Build the application router.
pub fn build_router(config: ServerConfig) -> Router {
    // Permissive CORS so a trunk dev server can reach the API
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let static_files = ServeDir::new(&config.static_dir);
    let body_limit = config.body_limit();
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/health", get(health))
        .route("/upload", post(upload_file))
        .layer(DefaultBodyLimit::max(body_limit))
        .fallback_service(static_files)
        .layer(cors)
        .with_state(state)
}

/// Serve on an already-bound listener.
pub async fn serve(listener: TcpListener, config: ServerConfig) -> ServerResult<()> {
    let app = build_router(config);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind `0.0.0.0:<port>` and serve until the process ends.
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    log::info!("🚀 Deepfake Detector running on http://localhost:{}", config.port);
    log::info!("   POST /upload - Analyze a file");
    log::info!("   GET  /health - Health check");
    log::info!("   Static files from {}", config.static_dir.display());

    serve(listener, config).await
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "deepfake-detector",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "upload": "POST /upload"
        }
    }))
}

/// Upload endpoint
async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> UploadResult<Json<AnalysisResponse>> {
    log::info!("File upload request received");

    let result = process_upload(&state.config, multipart?).await;
    match &result {
        Ok(response) => log::info!("Analysis complete for {}", response.filename),
        Err(e) => log::warn!("Upload rejected: {}", e),
    }
    result.map(Json)
}

async fn process_upload(config: &ServerConfig, mut multipart: Multipart) -> UploadResult<AnalysisResponse> {
    let max_mb = config.max_upload_mb();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::from_multipart(e, max_mb))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| UploadError::from_multipart(e, max_mb))?;

        log::info!("📄 Received {} ({} bytes)", file_name, bytes.len());

        let response = analyze_upload(&file_name, bytes.len(), config.max_upload_bytes)?;

        // Stand-in for model inference time
        if !config.processing_delay.is_zero() {
            tokio::time::sleep(config.processing_delay).await;
        }

        return Ok(response);
    }

    Err(UploadError::NoFile)
}

/// Check one file and build the reply the endpoint would send.
///
/// Shared by the HTTP handler and the `analyze` CLI command.
pub fn analyze_upload(raw_name: &str, size: usize, max_bytes: usize) -> UploadResult<AnalysisResponse> {
    if raw_name.is_empty() {
        return Err(UploadError::NoFile);
    }
    // Size before type: an oversize request is refused whatever it contains
    if size > max_bytes {
        return Err(UploadError::TooLarge {
            max_mb: max_bytes / (1024 * 1024),
        });
    }
    if !is_allowed_file(raw_name) {
        return Err(UploadError::UnsupportedType(raw_name.to_string()));
    }

    // Kind comes from the original name; sanitizing may eat the extension
    let detection = analyze(raw_name);
    Ok(AnalysisResponse::new(sanitize_filename(raw_name), detection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_UPLOAD_BYTES;

    #[test]
    fn test_analyze_upload_checks_in_order() {
        assert!(matches!(analyze_upload("", 10, MAX_UPLOAD_BYTES), Err(UploadError::NoFile)));
        assert!(matches!(
            analyze_upload("big.txt", MAX_UPLOAD_BYTES + 1, MAX_UPLOAD_BYTES),
            Err(UploadError::TooLarge { max_mb: 50 })
        ));
        assert!(matches!(
            analyze_upload("big.mp4", MAX_UPLOAD_BYTES + 1, MAX_UPLOAD_BYTES),
            Err(UploadError::TooLarge { max_mb: 50 })
        ));
        assert!(matches!(
            analyze_upload("small.txt", MAX_UPLOAD_BYTES, MAX_UPLOAD_BYTES),
            Err(UploadError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_analyze_upload_success() {
        let response = analyze_upload("holiday clip.MP4", 1024, MAX_UPLOAD_BYTES).unwrap();
        assert!(response.success);
        assert_eq!(response.filename, "holiday_clip.MP4");
        assert_eq!(response.file_type, "Video");
        assert_eq!(response.confidence, 0.92);
    }

    #[test]
    fn test_kind_survives_unicode_name() {
        let response = analyze_upload("фото.jpg", 10, MAX_UPLOAD_BYTES).unwrap();
        assert_eq!(response.file_type, "Image");
        assert_eq!(response.filename, "jpg");
    }
}
