//! Reqwest-based HTTP client adapter.
//!
//! Production implementation of the [`HttpClient`] trait used for document
//! uploads. The request timeout is owned by the underlying `reqwest::Client`
//! so callers see a plain [`HttpError::Timeout`] when it elapses.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{HttpClient, HttpError, Response};

/// HTTP client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a client with the given request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    /// Create a client wrapping a custom `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying reqwest::Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_multipart_file(
        &self,
        url: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Response, HttpError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = ReqwestHttpClient::with_timeout(Duration::from_secs(10));
        let _ = client.inner();

        let custom = reqwest::Client::new();
        let client = ReqwestHttpClient::with_client(custom);
        let _ = client.inner();
    }

    #[tokio::test]
    async fn test_post_multipart_connection_refused() {
        let client = ReqwestHttpClient::with_timeout(Duration::from_secs(1));
        let result = client
            .post_multipart_file("http://127.0.0.1:59999/upload/", "file", "a.txt", vec![1, 2])
            .await;
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(matches!(
                e,
                HttpError::ConnectionFailed(_) | HttpError::Other(_)
            ));
        }
    }
}
