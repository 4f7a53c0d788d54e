//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - multipart upload transport
//! - [`ChatSocket`] - streaming chat connection

pub mod http;
pub mod websocket;

pub use http::{HttpClient, HttpError, Response};
pub use websocket::ChatSocket;
