use serde::{Deserialize, Serialize};

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// A single entry in the chat transcript.
///
/// Insertion order is display order. Streamed assistant output is merged
/// into the trailing assistant message rather than appended as new entries;
/// see [`crate::state::ChatSession::apply_frame`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Append a streamed fragment to this message's content.
    pub fn append_fragment(&mut self, fragment: &str) {
        self.content.push_str(fragment);
    }

    /// True if this message was produced by the assistant.
    pub fn is_assistant(&self) -> bool {
        self.role == MessageRole::Assistant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&MessageRole::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(serde_json::to_string(&MessageRole::User).unwrap(), "\"user\"");
    }

    #[test]
    fn test_append_fragment_concatenates() {
        let mut msg = ChatMessage::assistant("Hel");
        msg.append_fragment("lo");
        msg.append_fragment("!");
        assert_eq!(msg.content, "Hello!");
    }

    #[test]
    fn test_constructors_set_role() {
        assert!(ChatMessage::assistant("x").is_assistant());
        assert!(!ChatMessage::user("x").is_assistant());
        assert_eq!(ChatMessage::system("x").role, MessageRole::System);
    }
}
