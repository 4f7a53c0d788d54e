//! View state for decoupling UI rendering from application state.
//!
//! UI rendering is a pure function: data in, cells out. [`AppViewState`]
//! borrows exactly what the render functions need from the `App`, so the
//! `ui` modules never import `App` and the app/ui dependency stays one-way.

use crate::app::{ActiveView, Focus};
use crate::models::{ChatMessage, DocumentRegistry, ThemePreference};
use crate::notifications::Notice;
use crate::ui::theme::Palette;
use crate::widgets::InputBox;

/// Everything the UI needs to render one frame.
pub struct AppViewState<'a> {
    /// Current view
    pub active_view: ActiveView,
    /// Whether the sidebar is collapsed to the icon rail
    pub sidebar_collapsed: bool,
    /// Persisted theme preference
    pub theme: ThemePreference,
    /// Colors resolved from the theme
    pub palette: Palette,
    /// Chat transcript in display order
    pub messages: &'a [ChatMessage],
    /// True while a response is streaming in
    pub awaiting_response: bool,
    /// Chat socket connectivity
    pub connected: bool,
    /// Uploaded documents
    pub documents: &'a DocumentRegistry,
    /// Most recent live notice, if any
    pub notice: Option<&'a Notice>,
    /// Message input
    pub input: &'a InputBox,
    /// Whether the upload panel is open in the chat view
    pub upload_panel_open: bool,
    /// Upload path input
    pub upload_input: &'a InputBox,
    /// True while an upload request is in flight
    pub upload_in_flight: bool,
    /// Which input receives keystrokes
    pub focus: Focus,
    /// Tick counter for animations
    pub tick_count: u64,
}

impl<'a> AppViewState<'a> {
    /// Spinner frame index for the current tick.
    pub fn spinner_index(&self, frames: usize) -> usize {
        (self.tick_count as usize) % frames.max(1)
    }
}
