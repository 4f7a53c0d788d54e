//! Shell layout: sidebar plus main panel.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Sidebar width when open
pub const SIDEBAR_WIDTH: u16 = 26;

/// Sidebar width when collapsed to the icon rail
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 6;

/// Height of the notice bar at the bottom of the main panel
pub const NOTICE_BAR_HEIGHT: u16 = 1;

/// Split the screen into (sidebar, main) areas.
pub fn split_shell(area: Rect, sidebar_collapsed: bool) -> (Rect, Rect) {
    let sidebar_width = if sidebar_collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_WIDTH
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Split the main panel into (content, notice bar).
pub fn split_main(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(NOTICE_BAR_HEIGHT)])
        .split(area);

    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_shell_open() {
        let (sidebar, main) = split_shell(Rect::new(0, 0, 100, 40), false);
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(main.width, 100 - SIDEBAR_WIDTH);
        assert_eq!(sidebar.height, 40);
    }

    #[test]
    fn test_split_shell_collapsed() {
        let (sidebar, main) = split_shell(Rect::new(0, 0, 100, 40), true);
        assert_eq!(sidebar.width, SIDEBAR_COLLAPSED_WIDTH);
        assert_eq!(main.width, 100 - SIDEBAR_COLLAPSED_WIDTH);
    }

    #[test]
    fn test_split_main_reserves_notice_bar() {
        let (content, notices) = split_main(Rect::new(0, 0, 80, 24));
        assert_eq!(notices.height, NOTICE_BAR_HEIGHT);
        assert_eq!(content.height, 24 - NOTICE_BAR_HEIGHT);
    }
}
