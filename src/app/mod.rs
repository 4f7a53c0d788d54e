//! Application state and event handling.

mod handlers;
mod messages;
mod types;
mod upload;
mod websocket;

pub use messages::AppMessage;
pub use types::{ActiveView, Focus};
pub use upload::run_upload;
pub use websocket::{spawn_socket_tasks, start_chat_socket};

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::models::{DocumentRegistry, ThemePreference};
use crate::notifications::NoticeQueue;
use crate::state::ChatSession;
use crate::storage;
use crate::traits::ChatSocket;
use crate::ui::theme::Palette;
use crate::upload::UploadConfig;
use crate::view_state::AppViewState;
use crate::widgets::InputBox;

/// Top-level application state, mutated only on the event loop.
pub struct App {
    /// Flag indicating the app should quit
    pub should_quit: bool,
    /// Which view is rendered
    pub active_view: ActiveView,
    /// Sidebar collapse toggle (cosmetic only)
    pub sidebar_collapsed: bool,
    /// Which input receives keystrokes
    pub focus: Focus,
    /// Persisted theme preference
    pub theme: ThemePreference,
    /// Chat transcript and phase machine
    pub session: ChatSession,
    /// Uploaded documents
    pub documents: DocumentRegistry,
    /// Transient notices
    pub notices: NoticeQueue,
    /// Message input
    pub input: InputBox,
    /// Upload path input
    pub upload_input: InputBox,
    /// Whether the upload panel is open
    pub upload_panel_open: bool,
    /// One upload at a time
    pub upload_in_flight: bool,
    /// Chat socket handle, if connected at startup
    pub socket: Option<Arc<dyn ChatSocket>>,
    /// Upload endpoint configuration
    pub upload_config: UploadConfig,
    /// Sender side of the app channel, cloned into async tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver side, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Tick counter for animations and notice expiry
    pub tick_count: u64,
    /// Redraw flag
    pub needs_redraw: bool,
    /// Where the theme preference is persisted
    data_dir: PathBuf,
}

impl App {
    /// Create the app, loading the persisted theme from `data_dir`.
    pub fn new(data_dir: PathBuf) -> Self {
        let theme = storage::load_theme(&data_dir);
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            active_view: ActiveView::Chat,
            sidebar_collapsed: false,
            focus: Focus::Message,
            theme,
            session: ChatSession::new(),
            documents: DocumentRegistry::new(),
            notices: NoticeQueue::new(),
            input: InputBox::new(),
            upload_input: InputBox::new(),
            upload_panel_open: false,
            upload_in_flight: false,
            socket: None,
            upload_config: UploadConfig::default(),
            message_tx,
            message_rx: Some(message_rx),
            tick_count: 0,
            needs_redraw: true,
            data_dir,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_preference(self.theme)
    }

    /// Borrow everything the renderer needs for one frame.
    pub fn view_state(&self) -> AppViewState<'_> {
        AppViewState {
            active_view: self.active_view,
            sidebar_collapsed: self.sidebar_collapsed,
            theme: self.theme,
            palette: self.palette(),
            messages: self.session.messages(),
            awaiting_response: self.session.is_awaiting_response(),
            connected: self.session.is_connected(),
            documents: &self.documents,
            notice: self.notices.latest(),
            input: &self.input,
            upload_panel_open: self.upload_panel_open,
            upload_input: &self.upload_input,
            upload_in_flight: self.upload_in_flight,
            focus: self.focus,
            tick_count: self.tick_count,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        if let Some(socket) = &self.socket {
            socket.shutdown();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick and expire old notices.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        let had_notices = !self.notices.is_empty();
        self.notices.expire(self.tick_count);
        if had_notices || self.session.is_awaiting_response() {
            self.mark_dirty();
        }
    }

    /// Switch the rendered view; exactly one view is ever active.
    pub fn set_active_view(&mut self, view: ActiveView) {
        if self.active_view != view {
            self.active_view = view;
            self.mark_dirty();
        }
    }

    pub fn cycle_view(&mut self) {
        self.set_active_view(self.active_view.next());
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.mark_dirty();
    }

    /// Flip the theme and persist the new value.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = storage::save_theme(&self.data_dir, self.theme) {
            warn!("Failed to persist theme: {}", e);
        }
        self.mark_dirty();
    }

    /// Adopt a connected socket.
    pub fn attach_socket(&mut self, socket: Arc<dyn ChatSocket>) {
        self.session.set_connected(true);
        self.socket = Some(socket);
        self.mark_dirty();
    }

    pub fn toggle_upload_panel(&mut self) {
        self.upload_panel_open = !self.upload_panel_open;
        self.focus = if self.upload_panel_open {
            Focus::UploadPath
        } else {
            Focus::Message
        };
        self.mark_dirty();
    }

    pub fn close_upload_panel(&mut self) {
        self.upload_panel_open = false;
        self.focus = Focus::Message;
        self.mark_dirty();
    }

    /// Submit the message input to the chat session.
    pub fn submit_message(&mut self) {
        let content = self.input.content().trim().to_string();
        if content.is_empty() {
            return;
        }

        match self.session.prepare_send(&content) {
            Ok(()) => {
                self.input.clear();
                let socket = match &self.socket {
                    // Invariant: a connected session always has a socket handle
                    Some(socket) => Arc::clone(socket),
                    None => {
                        self.session.send_failed();
                        return;
                    }
                };
                let message_tx = self.message_tx.clone();
                tokio::spawn(async move {
                    if let Err(e) = socket.send_text(content).await {
                        let _ = message_tx.send(AppMessage::SendFailed {
                            error: e.to_string(),
                        });
                    }
                });
            }
            Err(rejected) => {
                self.notices.error(rejected.to_string(), self.tick_count);
            }
        }
        self.mark_dirty();
    }

    /// Kick off an upload for the path in the upload input.
    pub fn submit_upload(&mut self) {
        if self.upload_in_flight {
            self.notices
                .error("An upload is already in progress", self.tick_count);
            return;
        }

        let path = self.upload_input.content().trim().to_string();
        if path.is_empty() {
            self.notices.error("Choose a file first", self.tick_count);
            return;
        }

        self.upload_in_flight = true;
        self.mark_dirty();
        upload::spawn_upload(self.upload_config.clone(), path, self.message_tx.clone());
    }

    /// Apply a message from an async task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Frame(frame) => {
                self.session.apply_frame(frame);
            }
            AppMessage::SocketConnected => {
                info!("Chat socket connected");
                self.session.set_connected(true);
            }
            AppMessage::SocketDisconnected { reason } => {
                warn!("Chat socket disconnected: {:?}", reason);
                self.session.set_connected(false);
                self.notices.error("Connection error", self.tick_count);
            }
            AppMessage::SendFailed { error } => {
                warn!("Send failed: {}", error);
                self.session.send_failed();
                self.notices.error("Failed to send message", self.tick_count);
            }
            AppMessage::UploadFinished {
                file_name,
                size_bytes,
                message,
            } => {
                self.upload_in_flight = false;
                self.documents.add(file_name, size_bytes, Local::now());
                self.notices.info(message, self.tick_count);
                self.upload_input.clear();
                self.close_upload_panel();
            }
            AppMessage::UploadFailed { error } => {
                self.upload_in_flight = false;
                self.notices.error(error, self.tick_count);
            }
        }
        self.mark_dirty();
    }
}
