//! Sidebar navigation panel.
//!
//! Pure function of `(active_view, palette, document_count)` plus the
//! cosmetic collapse flag; selecting a view happens in the key handlers,
//! never here.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::ActiveView;
use crate::view_state::AppViewState;

/// App title shown at the top of the sidebar.
const TITLE: &str = "Dr. TRUTH";

/// Hotkey shown next to each view entry.
fn hotkey(view: ActiveView) -> char {
    match view {
        ActiveView::Chat => '1',
        ActiveView::Documents => '2',
        ActiveView::Settings => '3',
    }
}

/// Short form for the collapsed rail.
fn icon(view: ActiveView) -> &'static str {
    match view {
        ActiveView::Chat => "[C]",
        ActiveView::Documents => "[D]",
        ActiveView::Settings => "[S]",
    }
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let palette = &view.palette;

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border));

    let mut lines: Vec<Line> = Vec::new();

    if view.sidebar_collapsed {
        lines.push(Line::from(Span::styled(
            "DT",
            Style::default()
                .fg(palette.header)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        for entry in ActiveView::ALL {
            let style = if entry == view.active_view {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.dim)
            };
            lines.push(Line::from(Span::styled(icon(entry), style)));
        }
    } else {
        lines.push(Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(palette.header)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        for entry in ActiveView::ALL {
            let active = entry == view.active_view;
            let marker = if active { "> " } else { "  " };
            let style = if active {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            let mut spans = vec![
                Span::styled(marker, style),
                Span::styled(format!("[{}] {}", hotkey(entry), entry.label()), style),
            ];
            if entry == ActiveView::Documents && view.documents.len() > 0 {
                spans.push(Span::styled(
                    format!(" ({})", view.documents.len()),
                    Style::default().fg(palette.dim),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        let status = if view.connected {
            Span::styled("* connected", Style::default().fg(palette.success))
        } else {
            Span::styled("* offline", Style::default().fg(palette.error))
        };
        lines.push(Line::from(status));
        lines.push(Line::from(Span::styled(
            format!("theme: {}", view.theme.as_str()),
            Style::default().fg(palette.dim),
        )));
        lines.push(Line::from(Span::styled(
            "Ctrl+B collapse",
            Style::default().fg(palette.dim),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
