//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - The user's selection and its metadata
//! - **State Types** - Upload state and submit control
//! - **API Types** - `/upload` response structures
//! - **Display Types** - Result panel, severity tier, icons
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ANALYZE_LABEL, ANALYZING_LABEL, GENERIC_ANALYSIS_ERROR};

// =============================================================================
// File Types
// =============================================================================

/// Metadata every selectable file exposes.
///
/// Implemented by the browser's `web_sys::File` and by [`SelectedFile`].
pub trait FileMeta {
    fn name(&self) -> String;
    fn size(&self) -> u64;
    fn mime_type(&self) -> String;
}

/// A file picked by the user, reduced to what validation looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the picker
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type (may be empty when the browser cannot tell)
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Snapshot the metadata of any [`FileMeta`] handle.
    pub fn of<F: FileMeta + ?Sized>(file: &F) -> Self {
        Self {
            name: file.name(),
            size: file.size(),
            mime_type: file.mime_type(),
        }
    }
}

impl FileMeta for SelectedFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

// =============================================================================
// State Types
// =============================================================================

/// Whether an upload request is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    InFlight,
}

/// What the submit button shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

impl SubmitControl {
    /// Default label; enabled only when a file is waiting.
    pub fn idle(enabled: bool) -> Self {
        Self {
            enabled,
            label: ANALYZE_LABEL.to_string(),
        }
    }

    /// A valid file is selected.
    pub fn ready(file_name: &str) -> Self {
        Self {
            enabled: true,
            label: format!("Analyze \"{}\"", file_name),
        }
    }

    pub fn analyzing() -> Self {
        Self {
            enabled: false,
            label: ANALYZING_LABEL.to_string(),
        }
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::idle(false)
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response body of `POST /upload`.
///
/// Everything is optional: the server's 400 replies carry only `error`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    pub result: Option<String>,
    /// Score in [0, 1]
    pub confidence: Option<f64>,
    pub filename: Option<String>,
    pub file_type: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl UploadResponse {
    /// Decide between a renderable result and an error text.
    ///
    /// Only an HTTP success carrying `success: true` renders; anything else
    /// yields the server's `error`, or a generic text when it sent none.
    pub fn into_outcome(self, http_ok: bool) -> Result<AnalysisResult, String> {
        if http_ok && self.success {
            Ok(AnalysisResult {
                success: true,
                result: self.result.unwrap_or_default(),
                confidence: self.confidence.unwrap_or(0.0).clamp(0.0, 1.0),
                filename: self.filename.unwrap_or_default(),
                file_type: self.file_type.unwrap_or_default(),
                message: self.message.unwrap_or_default(),
                error: None,
            })
        } else {
            Err(self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| GENERIC_ANALYSIS_ERROR.to_string()))
        }
    }
}

/// A successful classification, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub success: bool,
    /// Classification label
    pub result: String,
    /// Score in [0, 1]
    pub confidence: f64,
    pub filename: String,
    /// `image`, `video`, `audio` or anything else
    pub file_type: String,
    pub message: String,
    pub error: Option<String>,
}

// =============================================================================
// Display Types
// =============================================================================

/// Severity bucket derived from the confidence percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityTier {
    /// 70% and above
    High,
    /// 40% up to 69%
    Medium,
    /// Below 40%
    Low,
}

impl SeverityTier {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            70.. => SeverityTier::High,
            40..=69 => SeverityTier::Medium,
            _ => SeverityTier::Low,
        }
    }

    /// Bootstrap contextual colour.
    pub fn color(&self) -> &'static str {
        match self {
            SeverityTier::High => "danger",
            SeverityTier::Medium => "warning",
            SeverityTier::Low => "success",
        }
    }

    /// Font Awesome icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            SeverityTier::High => "exclamation-triangle",
            SeverityTier::Medium => "question-circle",
            SeverityTier::Low => "check-circle",
        }
    }
}

/// Icon shown next to the result, picked from the reported file type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileIcon {
    Image,
    Video,
    Headphones,
    File,
}

impl FileIcon {
    pub fn from_file_type(file_type: &str) -> Self {
        match file_type.to_ascii_lowercase().as_str() {
            "image" => FileIcon::Image,
            "video" => FileIcon::Video,
            "audio" => FileIcon::Headphones,
            _ => FileIcon::File,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FileIcon::Image => "image",
            FileIcon::Video => "video",
            FileIcon::Headphones => "headphones",
            FileIcon::File => "file",
        }
    }
}

/// Everything the result panel displays.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultPanel {
    pub label: String,
    pub filename: String,
    pub file_type: String,
    /// `round(confidence * 100)`
    pub confidence_percent: u8,
    pub tier: SeverityTier,
    pub file_icon: FileIcon,
    pub message: String,
}

impl ResultPanel {
    pub fn confidence_text(&self) -> String {
        format!("{}%", self.confidence_percent)
    }

    /// Inline style for the proportional fill bar.
    pub fn fill_style(&self) -> String {
        format!("width: {}%", self.confidence_percent)
    }
}

impl From<&AnalysisResult> for ResultPanel {
    fn from(result: &AnalysisResult) -> Self {
        let confidence_percent = (result.confidence.clamp(0.0, 1.0) * 100.0).round() as u8;
        Self {
            label: result.result.clone(),
            filename: result.filename.clone(),
            file_type: result.file_type.clone(),
            confidence_percent,
            tier: SeverityTier::from_percent(confidence_percent),
            file_icon: FileIcon::from_file_type(&result.file_type),
            message: result.message.clone(),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// Request never completed.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON.
    #[error("Invalid response: {0}")]
    Decode(String),}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(confidence: f64, file_type: &str) -> AnalysisResult {
        AnalysisResult {
            success: true,
            result: "FAKE".into(),
            confidence,
            filename: "a.jpg".into(),
            file_type: file_type.into(),
            message: "m".into(),
            error: None,
        }
    }

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(SeverityTier::from_percent(100), SeverityTier::High);
        assert_eq!(SeverityTier::from_percent(70), SeverityTier::High);
        assert_eq!(SeverityTier::from_percent(69), SeverityTier::Medium);
        assert_eq!(SeverityTier::from_percent(40), SeverityTier::Medium);
        assert_eq!(SeverityTier::from_percent(39), SeverityTier::Low);
        assert_eq!(SeverityTier::from_percent(0), SeverityTier::Low);
    }

    #[test]
    fn test_file_icon_is_case_insensitive() {
        assert_eq!(FileIcon::from_file_type("Image"), FileIcon::Image);
        assert_eq!(FileIcon::from_file_type("VIDEO"), FileIcon::Video);
        assert_eq!(FileIcon::from_file_type("audio"), FileIcon::Headphones);
        assert_eq!(FileIcon::from_file_type("Unknown"), FileIcon::File);
        assert_eq!(FileIcon::from_file_type(""), FileIcon::File);
        assert_eq!(FileIcon::Headphones.name(), "headphones");
    }

    #[test]
    fn test_panel_high_confidence() {
        let panel = ResultPanel::from(&analysis(0.85, "image"));
        assert_eq!(panel.confidence_text(), "85%");
        assert_eq!(panel.tier, SeverityTier::High);
        assert_eq!(panel.tier.color(), "danger");
        assert_eq!(panel.file_icon, FileIcon::Image);
        assert_eq!(panel.fill_style(), "width: 85%");
    }

    #[test]
    fn test_panel_medium_and_low() {
        let medium = ResultPanel::from(&analysis(0.5, "video"));
        assert_eq!(medium.tier.color(), "warning");
        assert_eq!(medium.tier.icon(), "question-circle");

        let low = ResultPanel::from(&analysis(0.1, "audio"));
        assert_eq!(low.tier.color(), "success");
        assert_eq!(low.confidence_text(), "10%");
    }

    #[test]
    fn test_panel_rounds_percentage() {
        // 69.6% rounds up into the high tier
        let panel = ResultPanel::from(&analysis(0.696, "image"));
        assert_eq!(panel.confidence_percent, 70);
        assert_eq!(panel.tier, SeverityTier::High);

        let panel = ResultPanel::from(&analysis(0.394, "image"));
        assert_eq!(panel.confidence_percent, 39);
        assert_eq!(panel.tier, SeverityTier::Low);
    }

    #[test]
    fn test_response_success_deserialization() {
        let json = r#"{
            "success": true,
            "result": "Testing: 85% Fake",
            "confidence": 0.85,
            "file_type": "Image",
            "filename": "a.jpg",
            "message": "Analysis complete!"
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        let result = response.into_outcome(true).unwrap();
        assert_eq!(result.result, "Testing: 85% Fake");
        assert_eq!(result.file_type, "Image");
        assert!((result.confidence - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_response_without_success_field() {
        // Shape of the server's 400 replies
        let response: UploadResponse = serde_json::from_str(r#"{"error": "No file selected"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.into_outcome(false).unwrap_err(), "No file selected");
    }

    #[test]
    fn test_failure_falls_back_to_generic_message() {
        let response = UploadResponse { success: false, ..Default::default() };
        assert_eq!(response.into_outcome(true).unwrap_err(), GENERIC_ANALYSIS_ERROR);
    }

    #[test]
    fn test_http_error_with_success_flag_is_not_rendered() {
        let response = UploadResponse {
            success: true,
            confidence: Some(0.9),
            ..Default::default()
        };
        assert!(response.into_outcome(false).is_err());
    }

    #[test]
    fn test_confidence_is_clamped() {
        let response = UploadResponse {
            success: true,
            confidence: Some(1.7),
            ..Default::default()
        };
        let result = response.into_outcome(true).unwrap();
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_submit_control_labels() {
        assert_eq!(SubmitControl::ready("a.jpg").label, "Analyze \"a.jpg\"");
        assert!(!SubmitControl::analyzing().enabled);
        assert_eq!(SubmitControl::idle(true).label, ANALYZE_LABEL);
    }

    #[test]
    fn test_app_error_messages() {
        assert_eq!(
            AppError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(AppError::Decode("eof".into()).to_string(), "Invalid response: eof");
    }
}
