//! HTTP client for the `/upload` endpoint.

use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::{Blob, File, FormData};

use crate::config::{UPLOAD_ENDPOINT, UPLOAD_FIELD};
use crate::controller::{ServerReply, UploadClient};
use crate::types::{AppError, AppResult, FileMeta, UploadResponse};

impl FileMeta for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn size(&self) -> u64 {
        // Blob sizes are non-negative integers carried as f64
        Blob::size(self).max(0.0) as u64
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Posts the selected browser file as `multipart/form-data`.
#[derive(Clone, Debug)]
pub struct HttpUploadClient {
    endpoint: String,
}

impl HttpUploadClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpUploadClient {
    fn default() -> Self {
        Self::new(UPLOAD_ENDPOINT)
    }
}

#[async_trait(?Send)]
impl UploadClient for HttpUploadClient {
    type File = File;

    async fn upload(&self, file: &File) -> AppResult<ServerReply> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let http_ok = response.ok();
        let status = response.status();

        // Error statuses carry a JSON body too
        let body = response
            .json::<UploadResponse>()
            .await
            .map_err(|e| AppError::Decode(format!("status {}: {}", status, e)))?;

        Ok(ServerReply { http_ok, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(HttpUploadClient::default().endpoint(), "/upload");
        assert_eq!(HttpUploadClient::new("http://localhost:5000/upload").endpoint(), "http://localhost:5000/upload");
    }
}
