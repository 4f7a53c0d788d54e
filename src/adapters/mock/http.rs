//! Mock HTTP client for testing.
//!
//! Records every upload request and returns scripted responses, letting
//! tests assert both what was sent and that nothing was sent at all (the
//! client-side size guard must never reach the transport).

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, Response};

/// A recorded upload request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    /// Request URL
    pub url: String,
    /// Multipart field name
    pub field: String,
    /// File name carried in the part
    pub file_name: String,
    /// Payload size in bytes
    pub size: usize,
}

/// Scripted result for the next request.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

/// Mock HTTP client for testing.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Scripted responses, consumed in order; empty falls back to 200 `{}`
    responses: Arc<Mutex<Vec<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedUpload>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request.
    pub fn push_response(&self, response: MockResponse) {
        self.responses.lock().unwrap().push(response);
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<RecordedUpload> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests that reached the transport.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post_multipart_file(
        &self,
        url: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedUpload {
            url: url.to_string(),
            field: field.to_string(),
            file_name: file_name.to_string(),
            size: bytes.len(),
        });

        let next = {
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                None
            } else {
                Some(responses.remove(0))
            }
        };

        match next {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Ok(Response::new(200, bytes::Bytes::from_static(b"{}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_records_requests() {
        let mock = MockHttpClient::new();
        mock.post_multipart_file("http://x/upload/", "file", "a.txt", vec![0; 3])
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].file_name, "a.txt");
        assert_eq!(requests[0].size, 3);
    }

    #[tokio::test]
    async fn test_scripted_responses_consumed_in_order() {
        let mock = MockHttpClient::new();
        mock.push_response(MockResponse::Success(Response::new(
            500,
            Bytes::from_static(b"{\"detail\":\"nope\"}"),
        )));
        mock.push_response(MockResponse::Error(HttpError::Timeout("10s".into())));

        let first = mock
            .post_multipart_file("http://x/upload/", "file", "a.txt", vec![])
            .await
            .unwrap();
        assert_eq!(first.status, 500);

        let second = mock
            .post_multipart_file("http://x/upload/", "file", "a.txt", vec![])
            .await;
        assert!(matches!(second, Err(HttpError::Timeout(_))));
    }
}
