//! Data model types shared across the application.

pub mod document;
pub mod message;
pub mod theme;

pub use document::{format_size_kb, DocumentRegistry, UploadRecord};
pub use message::{ChatMessage, MessageRole};
pub use theme::ThemePreference;
