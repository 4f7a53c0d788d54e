use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, error, info, warn};

use super::frames::ChatFrame;

/// WebSocket connection errors
#[derive(Debug, Clone)]
pub enum WsError {
    ConnectionFailed(String),
    Disconnected,
    SendFailed(String),
}

impl std::fmt::Display for WsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WsError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            WsError::Disconnected => write!(f, "Disconnected from server"),
            WsError::SendFailed(msg) => write!(f, "Send failed: {}", msg),
        }
    }
}

impl std::error::Error for WsError {}

/// WebSocket connection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WsConnectionState {
    Connected,
    Disconnected,
}

/// Configuration for the chat WebSocket client
#[derive(Debug, Clone)]
pub struct WsClientConfig {
    pub host: String,
}

impl Default for WsClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost:8000".to_string(),
        }
    }
}

impl WsClientConfig {
    pub fn with_host(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Full URL of the chat endpoint.
    pub fn url(&self) -> String {
        format!("ws://{}/chat", self.host)
    }
}

/// WebSocket client for the streaming chat endpoint.
///
/// Outbound frames are raw user text; inbound text frames are classified
/// into [`ChatFrame`]s at this boundary. There is no reconnect policy: once
/// the connection drops, the client reports `Disconnected` and stays there
/// until the process is restarted.
pub struct WsClient {
    /// Channel for raw outbound user text
    outgoing_tx: mpsc::Sender<String>,
    /// Receiver for classified inbound frames
    incoming_rx: mpsc::Receiver<ChatFrame>,
    /// Watch receiver for connection state changes
    state_rx: watch::Receiver<WsConnectionState>,
    /// Flag to signal shutdown
    shutdown: Arc<AtomicBool>,
}

impl WsClient {
    /// Connect to the chat endpoint.
    ///
    /// Returns a WsClient on success, or WsError if the initial connection
    /// fails.
    pub async fn connect(config: WsClientConfig) -> Result<Self, WsError> {
        let url = config.url();

        let ws_stream = connect_async(&url)
            .await
            .map_err(|e| WsError::ConnectionFailed(e.to_string()))?;

        info!("Connected to chat endpoint at {}", url);

        let (ws_sink, ws_stream) = ws_stream.0.split();

        let (incoming_tx, incoming_rx) = mpsc::channel::<ChatFrame>(100);
        let (outgoing_tx, outgoing_rx) = mpsc::channel::<String>(100);
        let (state_tx, state_rx) = watch::channel(WsConnectionState::Connected);

        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            run_connection_loop(
                ws_sink,
                ws_stream,
                incoming_tx,
                outgoing_rx,
                state_tx,
                shutdown_clone,
            )
            .await;
        });

        Ok(Self {
            outgoing_tx,
            incoming_rx,
            state_rx,
            shutdown,
        })
    }

    /// Check if currently connected
    pub fn is_connected(&self) -> bool {
        matches!(*self.state_rx.borrow(), WsConnectionState::Connected)
    }

    /// Subscribe to connection state changes
    pub fn state_receiver(&self) -> watch::Receiver<WsConnectionState> {
        self.state_rx.clone()
    }

    /// Send raw user text to the server
    pub async fn send_text(&self, text: String) -> Result<(), WsError> {
        self.outgoing_tx
            .send(text)
            .await
            .map_err(|e| WsError::SendFailed(e.to_string()))
    }

    /// Get a sender handle for outbound text
    pub fn outgoing_sender(&self) -> mpsc::Sender<String> {
        self.outgoing_tx.clone()
    }

    /// Receive the next classified inbound frame
    pub async fn recv(&mut self) -> Option<ChatFrame> {
        self.incoming_rx.recv().await
    }

    /// Gracefully shutdown the WebSocket connection
    pub fn shutdown(&self) {
        info!("Shutting down chat WebSocket client");
        self.shutdown.store(true, Ordering::SeqCst);
    }
}

impl Drop for WsClient {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Run the connection loop until the stream ends or shutdown is requested.
async fn run_connection_loop(
    mut ws_sink: futures_util::stream::SplitSink<
        tokio_tungstenite::WebSocketStream<
            tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
        >,
        Message,
    >,
    mut ws_stream: futures_util::stream::SplitStream<
        tokio_tungstenite::WebSocketStream<
            tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
        >,
    >,
    incoming_tx: mpsc::Sender<ChatFrame>,
    mut outgoing_rx: mpsc::Receiver<String>,
    state_tx: watch::Sender<WsConnectionState>,
    shutdown: Arc<AtomicBool>,
) {
    loop {
        if shutdown.load(Ordering::SeqCst) {
            debug!("Shutdown signal received, closing connection");
            let _ = ws_sink.close().await;
            break;
        }

        tokio::select! {
            msg = ws_stream.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let frame = ChatFrame::classify(&text);
                        debug!("Received frame: {:?}", frame);
                        if incoming_tx.send(frame).await.is_err() {
                            warn!("Incoming channel closed, shutting down");
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) => {
                        info!("Received close frame from server");
                        break;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        debug!("Received ping, sending pong");
                        let _ = ws_sink.send(Message::Pong(data)).await;
                    }
                    Some(Ok(_)) => {
                        // Ignore other frame types (Pong, Binary, Frame)
                    }
                    Some(Err(e)) => {
                        error!("WebSocket error: {}", e);
                        break;
                    }
                    None => {
                        info!("WebSocket stream ended");
                        break;
                    }
                }
            }
            outbound = outgoing_rx.recv() => {
                match outbound {
                    Some(text) => {
                        debug!("Sending user text ({} bytes)", text.len());
                        if let Err(e) = ws_sink.send(Message::Text(text)).await {
                            error!("Failed to send message: {}", e);
                            break;
                        }
                    }
                    None => {
                        debug!("Outgoing channel closed, shutting down");
                        let _ = ws_sink.close().await;
                        break;
                    }
                }
            }
        }
    }

    info!("Connection loop ended");
    let _ = state_tx.send(WsConnectionState::Disconnected);
}
