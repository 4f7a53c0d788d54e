//! Chat session state: transcript plus the send/receive state machine.

use thiserror::Error;
use tracing::debug;

use crate::models::{ChatMessage, MessageRole};
use crate::websocket::ChatFrame;

/// Assistant greeting shown before any traffic.
pub const GREETING: &str = "Hello! Upload documents to get started!";

/// Where the session is in the request/response cycle.
///
/// `send` is only legal in `Idle`; the end-of-turn frame returns the
/// machine to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    AwaitingResponse,
}

/// Why a send attempt was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendRejected {
    #[error("Not connected to the chat server")]
    Disconnected,

    #[error("Please wait for the current response to complete before sending another message")]
    ResponsePending,
}

/// The chat session owns the transcript, the connection flag, and the
/// request/response phase. All mutation happens on the UI event loop.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    phase: SessionPhase,
    connected: bool,
}

impl ChatSession {
    /// Create a session with the fixed assistant greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            phase: SessionPhase::Idle,
            connected: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.phase == SessionPhase::AwaitingResponse
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Record a connection state change.
    ///
    /// Losing the connection clears a pending response (the reply will
    /// never arrive) but keeps the transcript as rendered so far.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
        if !connected {
            self.phase = SessionPhase::Idle;
        }
    }

    /// Validate a send and record its user message.
    ///
    /// On `Ok` the caller must actually transmit `text`; the session is now
    /// in `AwaitingResponse`. On `Err` nothing changed.
    pub fn prepare_send(&mut self, text: &str) -> Result<(), SendRejected> {
        if !self.connected {
            return Err(SendRejected::Disconnected);
        }
        if self.phase == SessionPhase::AwaitingResponse {
            return Err(SendRejected::ResponsePending);
        }

        self.messages.push(ChatMessage::user(text));
        self.phase = SessionPhase::AwaitingResponse;
        Ok(())
    }

    /// Roll back the phase after a transmit failure.
    ///
    /// The user message stays in the transcript; only the pending flag is
    /// cleared so the user can try again.
    pub fn send_failed(&mut self) {
        self.phase = SessionPhase::Idle;
    }

    /// Apply a classified inbound frame.
    pub fn apply_frame(&mut self, frame: ChatFrame) {
        match frame {
            ChatFrame::Fragment(text) => self.apply_fragment(text),
            ChatFrame::End => {
                debug!("Stream ended, returning to idle");
                self.phase = SessionPhase::Idle;
            }
        }
    }

    /// Merge a fragment into the transcript.
    ///
    /// Invariant: consecutive fragments concatenate into the single trailing
    /// assistant message; a new entry is created only when the trailing
    /// message is not an assistant message.
    fn apply_fragment(&mut self, text: String) {
        match self.messages.last_mut() {
            Some(last) if last.role == MessageRole::Assistant => last.append_fragment(&text),
            _ => self.messages.push(ChatMessage::assistant(text)),
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected_session() -> ChatSession {
        let mut session = ChatSession::new();
        session.set_connected(true);
        session
    }

    #[test]
    fn test_new_session_has_greeting_and_is_idle() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].content, GREETING);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(!session.is_connected());
    }

    #[test]
    fn test_send_rejected_while_disconnected() {
        let mut session = ChatSession::new();
        let result = session.prepare_send("Hi");
        assert_eq!(result, Err(SendRejected::Disconnected));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_send_rejected_while_awaiting_response() {
        let mut session = connected_session();
        session.prepare_send("first").unwrap();

        let result = session.prepare_send("second");
        assert_eq!(result, Err(SendRejected::ResponsePending));
        // Only the first user message was recorded
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_fragments_concatenate_in_arrival_order() {
        let mut session = connected_session();
        session.prepare_send("question").unwrap();

        for fragment in ["The ", "answer ", "is 42."] {
            session.apply_frame(ChatFrame::Fragment(fragment.to_string()));
        }

        let last = session.messages().last().unwrap();
        assert_eq!(last.role, MessageRole::Assistant);
        assert_eq!(last.content, "The answer is 42.");
        // greeting + user + single merged assistant message
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn test_end_frame_clears_pending_without_appending() {
        let mut session = connected_session();
        session.prepare_send("question").unwrap();
        session.apply_frame(ChatFrame::Fragment("partial".to_string()));
        let before = session.messages().to_vec();

        session.apply_frame(ChatFrame::End);

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.messages(), before.as_slice());
    }

    #[test]
    fn test_full_turn_scenario() {
        // Transcript [{assistant,"Hello!"}] -> send "Hi" -> two fragments -> sentinel
        let mut session = ChatSession {
            messages: vec![ChatMessage::assistant("Hello!")],
            phase: SessionPhase::Idle,
            connected: true,
        };

        session.prepare_send("Hi").unwrap();
        assert!(session.is_awaiting_response());
        assert_eq!(session.messages()[1], ChatMessage::user("Hi"));

        session.apply_frame(ChatFrame::Fragment("Sure".to_string()));
        session.apply_frame(ChatFrame::Fragment(", ok".to_string()));
        assert_eq!(
            session.messages().last().unwrap(),
            &ChatMessage::assistant("Sure, ok")
        );

        session.apply_frame(ChatFrame::End);
        assert!(!session.is_awaiting_response());
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn test_unsolicited_fragment_merges_into_trailing_assistant_message() {
        let mut session = connected_session();
        // Trailing message is the assistant greeting; a fragment arriving
        // outside a turn appends to it rather than creating a new entry.
        session.apply_frame(ChatFrame::Fragment(" Really.".to_string()));
        assert_eq!(session.messages().len(), 1);
        assert!(session.messages()[0].content.ends_with(" Really."));
    }

    #[test]
    fn test_disconnect_clears_pending_and_keeps_transcript() {
        let mut session = connected_session();
        session.prepare_send("Hi").unwrap();
        session.apply_frame(ChatFrame::Fragment("par".to_string()));

        session.set_connected(false);

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages().last().unwrap().content, "par");
    }

    #[test]
    fn test_send_failed_rolls_back_phase_only() {
        let mut session = connected_session();
        session.prepare_send("Hi").unwrap();
        session.send_failed();

        assert_eq!(session.phase(), SessionPhase::Idle);
        // The user message stays visible
        assert_eq!(session.messages().len(), 2);
    }
}
