//! WebSocket client for the streaming chat endpoint.

pub mod client;
pub mod frames;

pub use client::{WsClient, WsClientConfig, WsConnectionState, WsError};
pub use frames::{ChatFrame, STREAM_END_SENTINEL};
