//! Settings view: the theme toggle.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::ThemePreference;
use crate::view_state::AppViewState;

pub fn render_settings_view(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let palette = &view.palette;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" Settings ");

    let mode_label = match view.theme {
        ThemePreference::Dark => "Dark Mode",
        ThemePreference::Light => "Light Mode",
    };

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("  Theme: ", Style::default().fg(palette.text)),
            Span::styled(
                mode_label,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "  Press t to toggle the theme",
            Style::default().fg(palette.dim),
        )),
        Line::from(Span::styled(
            "  The preference persists across sessions",
            Style::default().fg(palette.dim),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
