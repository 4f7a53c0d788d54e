//! Chat view: transcript, streaming indicator, upload panel, message input.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::Focus;
use crate::models::MessageRole;
use crate::view_state::AppViewState;

use super::helpers::{estimate_wrapped_line_count, SPINNER_FRAMES};

const INPUT_HEIGHT: u16 = 3;
const UPLOAD_PANEL_HEIGHT: u16 = 6;

pub fn render_chat_view(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let upload_height = if view.upload_panel_open {
        UPLOAD_PANEL_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(upload_height),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .split(area);

    render_transcript(frame, chunks[0], view);
    if view.upload_panel_open {
        render_upload_panel(frame, chunks[1], view);
    }
    render_message_input(frame, chunks[2], view);
}

fn role_prefix(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => "you",
        MessageRole::Assistant => "dr. truth",
        MessageRole::System => "system",
    }
}

fn render_transcript(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let palette = &view.palette;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" Chat ");
    let inner_width = area.width.saturating_sub(2);

    let mut lines: Vec<Line> = Vec::new();
    for message in view.messages {
        let prefix_color = match message.role {
            MessageRole::User => palette.user,
            MessageRole::Assistant => palette.assistant,
            MessageRole::System => palette.dim,
        };
        lines.push(Line::from(Span::styled(
            format!("{}:", role_prefix(message.role)),
            Style::default()
                .fg(prefix_color)
                .add_modifier(Modifier::BOLD),
        )));
        for content_line in message.content.lines() {
            lines.push(Line::from(Span::styled(
                content_line.to_string(),
                Style::default().fg(palette.text),
            )));
        }
        lines.push(Line::default());
    }

    if view.awaiting_response {
        let spinner = SPINNER_FRAMES[view.spinner_index(SPINNER_FRAMES.len())];
        lines.push(Line::from(Span::styled(
            format!("{} thinking...", spinner),
            Style::default().fg(palette.dim),
        )));
    }

    // Stick to the bottom of the transcript
    let total: usize = lines
        .iter()
        .map(|l| {
            let text: String = l.spans.iter().map(|s| s.content.as_ref()).collect();
            estimate_wrapped_line_count(&text, inner_width)
        })
        .sum();
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = total.saturating_sub(visible) as u16;

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_upload_panel(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let palette = &view.palette;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(" Upload Document ");
    frame.render_widget(block, area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        });

    view.upload_input.render_with_title(
        inner[0],
        frame.buffer_mut(),
        " File path ",
        "/path/to/document.pdf",
        view.focus == Focus::UploadPath,
        palette,
    );

    let hint = if view.upload_in_flight {
        Span::styled("uploading...", Style::default().fg(palette.dim))
    } else {
        Span::styled(
            "PDF, DOCX, or TXT (max 10 MB) - Enter to upload, Esc to close",
            Style::default().fg(palette.dim),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(hint)), inner[1]);
}

fn render_message_input(frame: &mut Frame, area: Rect, view: &AppViewState) {
    view.input.render_with_title(
        area,
        frame.buffer_mut(),
        " Message ",
        "Type your message...",
        view.focus == Focus::Message && !view.upload_panel_open,
        &view.palette,
    );
}
