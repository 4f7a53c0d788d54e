//! Chat socket integration for the App.
//!
//! Connects the socket, then forwards inbound frames and connection state
//! changes into the app channel. Forwarding is generic over [`ChatSocket`]
//! so tests can drive the same wiring with a mock socket.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::{info, warn};

use crate::traits::ChatSocket;
use crate::adapters::TungsteniteChatSocket;
use crate::websocket::{WsClientConfig, WsConnectionState};

use super::AppMessage;

/// Connect to the chat endpoint and wire it into the app channel.
///
/// On failure the app stays usable (sends are rejected as disconnected);
/// there is no reconnect attempt.
pub async fn start_chat_socket(
    message_tx: mpsc::UnboundedSender<AppMessage>,
    config: WsClientConfig,
) -> Option<Arc<dyn ChatSocket>> {
    info!("Connecting chat socket to {}", config.url());

    match TungsteniteChatSocket::connect(config).await {
        Ok(socket) => {
            let socket: Arc<dyn ChatSocket> = Arc::new(socket);
            spawn_socket_tasks(Arc::clone(&socket), message_tx.clone());
            let _ = message_tx.send(AppMessage::SocketConnected);
            Some(socket)
        }
        Err(e) => {
            warn!("Chat socket connection failed: {}", e);
            let _ = message_tx.send(AppMessage::SocketDisconnected {
                reason: Some(e.to_string()),
            });
            None
        }
    }
}

/// Forward frames and state changes from a connected socket into the app
/// channel.
pub fn spawn_socket_tasks(
    socket: Arc<dyn ChatSocket>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) {
    let mut frames = socket.subscribe();
    let frame_tx = message_tx.clone();
    tokio::spawn(async move {
        loop {
            match frames.recv().await {
                Ok(frame) => {
                    if frame_tx.send(AppMessage::Frame(frame)).is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Dropped {} chat frames", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    let mut state = socket.state();
    tokio::spawn(async move {
        while state.changed().await.is_ok() {
            if *state.borrow() == WsConnectionState::Disconnected {
                let _ = message_tx.send(AppMessage::SocketDisconnected { reason: None });
                break;
            }
        }
    });
}
