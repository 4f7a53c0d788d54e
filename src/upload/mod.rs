//! Upload client for the document ingestion endpoint.
//!
//! One multipart POST per user action, guarded client-side by the size
//! limit before any bytes leave the machine. No retry: a failed upload is
//! surfaced and the user re-invokes manually.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::traits::{HttpClient, HttpError};

/// Client-side upload size limit: 10 MiB, checked before any network call.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Bounded wait for the upload request.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Multipart field name expected by the backend.
pub const UPLOAD_FIELD: &str = "file";

/// Error type for upload operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UploadError {
    /// File exceeds the client-side size limit; nothing was transmitted
    #[error("File is too large ({size} bytes, limit is {limit})")]
    SizeExceeded { size: u64, limit: u64 },

    /// The bounded wait elapsed
    #[error("Upload timed out")]
    Timeout,

    /// Server-reported or transport failure
    #[error("Upload failed: {0}")]
    Failed(String),

    /// Could not reach the server
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Server replied with something that is not the expected JSON
    #[error("Server returned an invalid response")]
    InvalidResponse,
}

/// Successful upload confirmation from the server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub message: String,
}

/// Error body shape used by the backend for failures.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Configuration for the upload client.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: UPLOAD_TIMEOUT,
        }
    }
}

impl UploadConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the upload endpoint.
    pub fn url(&self) -> String {
        format!("{}/upload/", self.base_url.trim_end_matches('/'))
    }
}

/// Client for the document upload endpoint.
///
/// Generic over the transport so tests can verify that guarded uploads
/// never reach the network.
pub struct UploadClient<C: HttpClient> {
    config: UploadConfig,
    transport: C,
}

impl<C: HttpClient> UploadClient<C> {
    pub fn new(transport: C) -> Self {
        Self {
            config: UploadConfig::default(),
            transport,
        }
    }

    pub fn with_config(transport: C, config: UploadConfig) -> Self {
        Self { config, transport }
    }

    /// Upload a single file and return the server's confirmation message.
    ///
    /// Preconditions are checked before any network call; a violating file
    /// is rejected immediately and never transmitted.
    pub async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, UploadError> {
        let size = bytes.len() as u64;
        if size > MAX_UPLOAD_BYTES {
            warn!(
                "Rejecting upload of {} ({} bytes exceeds {} byte limit)",
                file_name, size, MAX_UPLOAD_BYTES
            );
            return Err(UploadError::SizeExceeded {
                size,
                limit: MAX_UPLOAD_BYTES,
            });
        }

        debug!("Uploading {} ({} bytes)", file_name, size);

        let response = self
            .transport
            .post_multipart_file(&self.config.url(), UPLOAD_FIELD, file_name, bytes)
            .await
            .map_err(|e| match e {
                HttpError::Timeout(_) => UploadError::Timeout,
                HttpError::ConnectionFailed(msg) => UploadError::Connection(msg),
                HttpError::Other(msg) => UploadError::Failed(msg),
            })?;

        if response.is_success() {
            serde_json::from_slice::<UploadResponse>(&response.body)
                .map_err(|_| UploadError::InvalidResponse)
        } else {
            let detail = serde_json::from_slice::<ErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| format!("server error (HTTP {})", response.status));
            Err(UploadError::Failed(detail))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::Response;
    use bytes::Bytes;

    fn client_with(mock: &MockHttpClient) -> UploadClient<MockHttpClient> {
        UploadClient::new(mock.clone())
    }

    #[tokio::test]
    async fn test_oversized_file_never_reaches_transport() {
        let mock = MockHttpClient::new();
        let client = client_with(&mock);

        let bytes = vec![0u8; (MAX_UPLOAD_BYTES + 1) as usize];
        let result = client.upload("big.pdf", bytes).await;

        assert!(matches!(result, Err(UploadError::SizeExceeded { .. })));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_upload_parses_message() {
        let mock = MockHttpClient::new();
        mock.push_response(MockResponse::Success(Response::new(
            200,
            Bytes::from_static(b"{\"message\":\"File processed successfully! Added 4 chunks\"}"),
        )));
        let client = client_with(&mock);

        let response = client.upload("notes.txt", vec![1, 2, 3]).await.unwrap();
        assert_eq!(
            response.message,
            "File processed successfully! Added 4 chunks"
        );

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].field, "file");
        assert_eq!(requests[0].file_name, "notes.txt");
        assert_eq!(requests[0].url, "http://localhost:8000/upload/");
    }

    #[tokio::test]
    async fn test_server_error_carries_detail() {
        let mock = MockHttpClient::new();
        mock.push_response(MockResponse::Success(Response::new(
            500,
            Bytes::from_static(b"{\"detail\":\"bad format\"}"),
        )));
        let client = client_with(&mock);

        let result = client.upload("a.txt", vec![0; 2048]).await;
        match result {
            Err(UploadError::Failed(detail)) => assert!(detail.contains("bad format")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_without_detail() {
        let mock = MockHttpClient::new();
        mock.push_response(MockResponse::Success(Response::new(
            502,
            Bytes::from_static(b"Bad Gateway"),
        )));
        let client = client_with(&mock);

        let result = client.upload("a.txt", vec![1]).await;
        match result {
            Err(UploadError::Failed(detail)) => assert!(detail.contains("502")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_maps_to_upload_timeout() {
        let mock = MockHttpClient::new();
        mock.push_response(MockResponse::Error(HttpError::Timeout("10s".into())));
        let client = client_with(&mock);

        let result = client.upload("a.txt", vec![1]).await;
        assert_eq!(result, Err(UploadError::Timeout));
    }

    #[tokio::test]
    async fn test_success_with_non_json_body_is_invalid_response() {
        let mock = MockHttpClient::new();
        mock.push_response(MockResponse::Success(Response::new(
            200,
            Bytes::from_static(b"<html>ok</html>"),
        )));
        let client = client_with(&mock);

        let result = client.upload("a.txt", vec![1]).await;
        assert_eq!(result, Err(UploadError::InvalidResponse));
    }

    #[test]
    fn test_config_url_handles_trailing_slash() {
        assert_eq!(
            UploadConfig::with_base_url("http://h:8000/").url(),
            "http://h:8000/upload/"
        );
        assert_eq!(
            UploadConfig::with_base_url("http://h:8000").url(),
            "http://h:8000/upload/"
        );
    }
}
