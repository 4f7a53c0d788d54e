//! Chat socket trait abstraction.
//!
//! Abstracts the streaming chat connection so the app wiring can be driven
//! by either the production tungstenite client or a scripted mock in tests.

use async_trait::async_trait;
use tokio::sync::{broadcast, watch};

use crate::websocket::{ChatFrame, WsConnectionState, WsError};

/// Trait for the streaming chat connection.
///
/// Inbound frames are fanned out over a broadcast channel; connection state
/// is observable via a watch channel. Frames arriving while no subscriber
/// exists are dropped, matching the UI's "transcript starts at activation"
/// semantics.
#[async_trait]
pub trait ChatSocket: Send + Sync {
    /// Send raw user text to the server.
    async fn send_text(&self, text: String) -> Result<(), WsError>;

    /// Subscribe to classified inbound frames.
    fn subscribe(&self) -> broadcast::Receiver<ChatFrame>;

    /// Get a receiver for connection state changes.
    fn state(&self) -> watch::Receiver<WsConnectionState>;

    /// Tear the connection down.
    fn shutdown(&self);
}
