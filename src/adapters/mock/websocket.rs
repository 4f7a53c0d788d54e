//! Mock chat socket for testing.
//!
//! Allows frame injection, outbound capture, and connection state control.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, watch};

use crate::traits::ChatSocket;
use crate::websocket::{ChatFrame, WsConnectionState, WsError};

pub struct MockChatSocket {
    /// Broadcast sender for inbound frames
    incoming_tx: broadcast::Sender<ChatFrame>,
    /// Watch sender for connection state
    state_tx: watch::Sender<WsConnectionState>,
    /// Watch receiver for connection state
    state_rx: watch::Receiver<WsConnectionState>,
    /// Captured outbound text
    sent: Arc<Mutex<Vec<String>>>,
    /// Whether send_text should fail
    fail_sends: Arc<Mutex<bool>>,
}

impl MockChatSocket {
    /// Create a mock socket in connected state.
    pub fn new() -> Self {
        let (incoming_tx, _) = broadcast::channel(100);
        let (state_tx, state_rx) = watch::channel(WsConnectionState::Connected);

        Self {
            incoming_tx,
            state_tx,
            state_rx,
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_sends: Arc::new(Mutex::new(false)),
        }
    }

    /// Inject an inbound frame, delivered to all subscribers.
    pub fn inject_frame(&self, frame: ChatFrame) {
        // Ignore send errors (no subscribers)
        let _ = self.incoming_tx.send(frame);
    }

    /// Inject a raw text payload, classified like the real socket boundary.
    pub fn inject_text(&self, payload: &str) {
        self.inject_frame(ChatFrame::classify(payload));
    }

    /// Flip the connection state.
    pub fn set_state(&self, state: WsConnectionState) {
        let _ = self.state_tx.send(state);
    }

    /// Make subsequent send_text calls fail.
    pub fn fail_sends(&self, fail: bool) {
        *self.fail_sends.lock().unwrap() = fail;
    }

    /// Get all captured outbound text.
    pub fn sent_texts(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockChatSocket {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatSocket for MockChatSocket {
    async fn send_text(&self, text: String) -> Result<(), WsError> {
        if *self.fail_sends.lock().unwrap() {
            return Err(WsError::SendFailed("mock send failure".to_string()));
        }
        self.sent.lock().unwrap().push(text);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<ChatFrame> {
        self.incoming_tx.subscribe()
    }

    fn state(&self) -> watch::Receiver<WsConnectionState> {
        self.state_rx.clone()
    }

    fn shutdown(&self) {
        let _ = self.state_tx.send(WsConnectionState::Disconnected);
    }
}
