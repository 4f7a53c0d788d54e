//! Adapter implementations of the trait abstractions.
//!
//! Production adapters wrap reqwest and tokio-tungstenite; the [`mock`]
//! module provides scripted in-memory implementations for tests.

pub mod mock;
pub mod reqwest_http;
pub mod tungstenite_ws;

pub use reqwest_http::ReqwestHttpClient;
pub use tungstenite_ws::TungsteniteChatSocket;
