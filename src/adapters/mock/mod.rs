//! Mock adapters for testing.

pub mod http;
pub mod websocket;

pub use http::{MockHttpClient, MockResponse, RecordedUpload};
pub use websocket::MockChatSocket;
