//! JSON bodies returned by the upload endpoint.

use serde::{Deserialize, Serialize};

use crate::classifier::{Detection, PLACEHOLDER_MESSAGE};

/// Successful analysis of an uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    /// Human-readable verdict
    pub result: String,
    /// Likelihood in [0, 1]
    pub confidence: f64,
    /// `Image`, `Video`, `Audio` or `Unknown`
    pub file_type: String,
    /// Sanitized name of the uploaded file
    pub filename: String,
    pub message: String,
}

impl AnalysisResponse {
    pub fn new(filename: String, detection: Detection) -> Self {
        Self {
            success: true,
            result: detection.label,
            confidence: detection.confidence,
            file_type: detection.kind.as_str().to_string(),
            filename,
            message: PLACEHOLDER_MESSAGE.to_string(),
        }
    }
}

/// Body of every non-2xx reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::analyze;
    use serde_json::json;

    #[test]
    fn test_analysis_wire_format() {
        let response = AnalysisResponse::new("a.jpg".into(), analyze("a.jpg"));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["file_type"], json!("Image"));
        assert_eq!(value["confidence"], json!(0.85));
        assert_eq!(value["filename"], json!("a.jpg"));
        assert_eq!(value["result"], json!("Testing: 85% Fake"));
    }

    #[test]
    fn test_error_wire_format() {
        let value = serde_json::to_value(ErrorResponse::new("No file selected")).unwrap();
        assert_eq!(value, json!({ "success": false, "error": "No file selected" }));
    }
}
