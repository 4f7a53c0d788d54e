//! UI rendering for the doctruth shell.
//!
//! Layout: a collapsible sidebar on the left, the active view on the right,
//! and a one-line notice bar along the bottom of the main panel. Exactly one
//! of the three views renders per frame; all functions here are pure over
//! [`AppViewState`].

mod conversation;
mod documents;
pub mod helpers;
pub mod layout;
mod settings;
mod sidebar;
pub mod theme;

pub use helpers::{estimate_wrapped_line_count, inner_rect, SPINNER_FRAMES};
pub use layout::{split_main, split_shell, SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_WIDTH};
pub use theme::Palette;

use ratatui::{
    style::Style,
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::ActiveView;
use crate::notifications::NoticeKind;
use crate::view_state::AppViewState;

/// Render one frame of the application.
pub fn render(frame: &mut Frame, view: &AppViewState) {
    let area = frame.area();
    let palette = &view.palette;

    // Paint the themed background first
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.text)),
        area,
    );

    let (sidebar_area, main_area) = split_shell(area, view.sidebar_collapsed);
    let (content_area, notice_area) = split_main(main_area);

    sidebar::render_sidebar(frame, sidebar_area, view);

    match view.active_view {
        ActiveView::Chat => conversation::render_chat_view(frame, content_area, view),
        ActiveView::Documents => documents::render_documents_view(frame, content_area, view),
        ActiveView::Settings => settings::render_settings_view(frame, content_area, view),
    }

    if let Some(notice) = view.notice {
        let color = match notice.kind {
            NoticeKind::Info => palette.success,
            NoticeKind::Error => palette.error,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", notice.text),
                Style::default().fg(color),
            )),
            notice_area,
        );
    }
}
