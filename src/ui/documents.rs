//! Documents view: the upload registry as a simple table.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::view_state::AppViewState;

pub fn render_documents_view(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let palette = &view.palette;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(" Uploaded Documents ");

    if view.documents.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No documents uploaded yet",
            Style::default().fg(palette.dim),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new([
        Cell::from("Name"),
        Cell::from("Size"),
        Cell::from("Date"),
    ])
    .style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows = view.documents.records().iter().map(|record| {
        Row::new([
            Cell::from(record.name.clone()).style(Style::default().fg(palette.text)),
            Cell::from(record.size.clone()).style(Style::default().fg(palette.dim)),
            Cell::from(record.date.clone()).style(Style::default().fg(palette.dim)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(60),
            Constraint::Percentage(15),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
