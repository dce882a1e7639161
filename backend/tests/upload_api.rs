//! End-to-end tests against a server on an ephemeral port.

use std::path::PathBuf;
use std::time::Duration;

use detector::config::ServerConfig;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::Value;
use tokio::net::TcpListener;

async fn spawn_server(max_upload_bytes: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = ServerConfig {
        port: addr.port(),
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/static"),
        processing_delay: Duration::ZERO,
        max_upload_bytes,
    };

    tokio::spawn(async move {
        detector::serve(listener, config).await.unwrap();
    });

    format!("http://{}", addr)
}

fn file_form(field: &str, name: &str, mime: &str, len: usize) -> Form {
    let part = Part::bytes(vec![0u8; len])
        .file_name(name.to_string())
        .mime_str(mime)
        .unwrap();
    Form::new().part(field.to_string(), part)
}

async fn post_form(base: &str, form: Form) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/upload", base))
        .multipart(form)
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_image_upload_returns_analysis() {
    let base = spawn_server(detector::config::MAX_UPLOAD_BYTES).await;
    let (status, body) = post_form(&base, file_form("file", "my photo.jpg", "image/jpeg", 1_024)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["file_type"], "Image");
    assert_eq!(body["confidence"], 0.85);
    assert_eq!(body["result"], "Testing: 85% Fake");
    assert_eq!(body["filename"], "my_photo.jpg");
    assert!(body["message"].as_str().unwrap().starts_with("Analysis complete"));
}

#[tokio::test]
async fn test_uppercase_audio_extension() {
    let base = spawn_server(detector::config::MAX_UPLOAD_BYTES).await;
    let (status, body) = post_form(&base, file_form("file", "VOICE.M4A", "audio/m4a", 16)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["file_type"], "Audio");
    assert_eq!(body["confidence"], 0.78);
}

#[tokio::test]
async fn test_unsupported_extension_is_rejected() {
    let base = spawn_server(detector::config::MAX_UPLOAD_BYTES).await;
    let (status, body) = post_form(&base, file_form("file", "notes.txt", "text/plain", 16)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "File type not supported. Please upload image, video, or audio files."
    );
}

#[tokio::test]
async fn test_missing_file_field() {
    let base = spawn_server(detector::config::MAX_UPLOAD_BYTES).await;
    let (status, body) = post_form(&base, file_form("attachment", "a.jpg", "image/jpeg", 16)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file selected");
}

#[tokio::test]
async fn test_file_without_name() {
    let base = spawn_server(detector::config::MAX_UPLOAD_BYTES).await;
    let form = Form::new().part("file", Part::bytes(vec![1, 2, 3]));
    let (status, body) = post_form(&base, form).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file selected");
}

#[tokio::test]
async fn test_file_over_limit() {
    let base = spawn_server(1_024).await;
    let (status, body) = post_form(&base, file_form("file", "big.png", "image/png", 4_096)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("File too large"));
}

#[tokio::test]
async fn test_oversize_file_with_bad_extension_gets_413() {
    let base = spawn_server(1_024).await;
    let (status, body) = post_form(&base, file_form("file", "big.txt", "text/plain", 4_096)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].as_str().unwrap().starts_with("File too large"));
}

#[tokio::test]
async fn test_non_multipart_request() {
    let base = spawn_server(detector::config::MAX_UPLOAD_BYTES).await;
    let response = reqwest::Client::new()
        .post(format!("{}/upload", base))
        .json(&serde_json::json!({ "file": "a.jpg" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_health_and_static_page() {
    let base = spawn_server(detector::config::MAX_UPLOAD_BYTES).await;

    let health: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");

    let page = reqwest::get(format!("{}/", base)).await.unwrap();
    assert_eq!(page.status(), StatusCode::OK);
    assert!(page.text().await.unwrap().contains("Deepfake Detector"));
}
