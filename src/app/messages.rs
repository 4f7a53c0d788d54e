//! AppMessage enum for async communication within the application.
//!
//! Background tasks (the socket reader, an in-flight upload) never touch
//! `App` directly; they send one of these over the unbounded channel and
//! the event loop applies it.

use crate::websocket::ChatFrame;

/// Messages received from async operations.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A classified frame arrived on the chat stream
    Frame(ChatFrame),
    /// The chat socket is up
    SocketConnected,
    /// The chat socket is gone; no reconnect is attempted
    SocketDisconnected { reason: Option<String> },
    /// An accepted send failed to transmit
    SendFailed { error: String },
    /// Upload completed and was confirmed by the server
    UploadFinished {
        file_name: String,
        size_bytes: u64,
        message: String,
    },
    /// Upload failed (locally or server-side)
    UploadFailed { error: String },
}
