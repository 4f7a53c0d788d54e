//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction for the upload HTTP call, enabling
//! dependency injection and mocking in tests.

use async_trait::async_trait;
use bytes::Bytes;

/// HTTP transport errors.
#[derive(Debug, Clone)]
pub enum HttpError {
    /// Connection to the server failed
    ConnectionFailed(String),
    /// Request timed out
    Timeout(String),
    /// Other transport error
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            HttpError::Other(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as a string.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }
}

/// Trait for the multipart upload transport.
///
/// The production implementation is [`crate::adapters::ReqwestHttpClient`];
/// tests use [`crate::adapters::mock::MockHttpClient`], which records every
/// request so tests can assert that no network call was made.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POST a single file as `multipart/form-data` under the given field name.
    ///
    /// Returns the raw response; status and body interpretation belong to the
    /// caller.
    async fn post_multipart_file(
        &self,
        url: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".to_string()).to_string(),
            "Connection failed: refused"
        );
        assert_eq!(
            HttpError::Timeout("10s".to_string()).to_string(),
            "Request timed out: 10s"
        );
        assert_eq!(
            HttpError::Other("boom".to_string()).to_string(),
            "HTTP error: boom"
        );
    }

    #[test]
    fn test_response_is_success() {
        assert!(Response::new(200, Bytes::new()).is_success());
        assert!(Response::new(204, Bytes::new()).is_success());
        assert!(!Response::new(301, Bytes::new()).is_success());
        assert!(!Response::new(500, Bytes::new()).is_success());
    }

    #[test]
    fn test_response_text() {
        let resp = Response::new(200, Bytes::from_static(b"{\"message\":\"ok\"}"));
        assert_eq!(resp.text().unwrap(), "{\"message\":\"ok\"}");
    }
}
