//! Application state owned by the event loop.

pub mod session;

pub use session::{ChatSession, SendRejected, SessionPhase, GREETING};
