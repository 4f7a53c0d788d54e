//! Tungstenite-based chat socket adapter.
//!
//! Wraps [`WsClient`] behind the [`ChatSocket`] trait, fanning its inbound
//! frames out over a broadcast channel so the app wiring stays identical
//! between production and the mock socket used in tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{broadcast, watch, Mutex};

use crate::traits::ChatSocket;
use crate::websocket::{ChatFrame, WsClient, WsClientConfig, WsConnectionState, WsError};

pub struct TungsteniteChatSocket {
    /// The underlying WebSocket client (taken on shutdown)
    client: Arc<Mutex<Option<WsClient>>>,
    /// Broadcast sender for inbound frames
    incoming_tx: broadcast::Sender<ChatFrame>,
    /// Watch receiver for connection state
    state_rx: watch::Receiver<WsConnectionState>,
}

impl TungsteniteChatSocket {
    /// Connect to the chat endpoint using the provided configuration.
    pub async fn connect(config: WsClientConfig) -> Result<Self, WsError> {
        let client = WsClient::connect(config).await?;

        let state_rx = client.state_receiver();
        let (incoming_tx, _) = broadcast::channel(100);

        let client_arc = Arc::new(Mutex::new(Some(client)));
        let client_for_task = client_arc.clone();
        let incoming_tx_clone = incoming_tx.clone();

        // Forward frames from the client's mpsc channel to the broadcast
        // channel until the connection closes.
        tokio::spawn(async move {
            loop {
                let frame = {
                    let mut guard = client_for_task.lock().await;
                    if let Some(ref mut c) = *guard {
                        c.recv().await
                    } else {
                        break;
                    }
                };

                match frame {
                    Some(frame) => {
                        // Ignore send errors (no subscribers)
                        let _ = incoming_tx_clone.send(frame);
                    }
                    None => break,
                }
            }
        });

        Ok(Self {
            client: client_arc,
            incoming_tx,
            state_rx,
        })
    }

    /// Connect with default configuration.
    pub async fn connect_default() -> Result<Self, WsError> {
        Self::connect(WsClientConfig::default()).await
    }
}

#[async_trait]
impl ChatSocket for TungsteniteChatSocket {
    async fn send_text(&self, text: String) -> Result<(), WsError> {
        let guard = self.client.lock().await;
        if let Some(ref client) = *guard {
            client.send_text(text).await
        } else {
            Err(WsError::Disconnected)
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<ChatFrame> {
        self.incoming_tx.subscribe()
    }

    fn state(&self) -> watch::Receiver<WsConnectionState> {
        self.state_rx.clone()
    }

    fn shutdown(&self) {
        let client_arc = self.client.clone();
        tokio::spawn(async move {
            let mut guard = client_arc.lock().await;
            if let Some(client) = guard.take() {
                client.shutdown();
            }
        });
    }
}
