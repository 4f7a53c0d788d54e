//! Helper functions and constants for UI rendering.

use ratatui::layout::Rect;

/// Spinner frames for the awaiting-response indicator
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Estimate how many terminal rows a string occupies when wrapped.
pub fn estimate_wrapped_line_count(text: &str, width: u16) -> usize {
    if width == 0 {
        return 0;
    }
    text.lines()
        .map(|line| {
            let len = line.chars().count();
            if len == 0 {
                1
            } else {
                len.div_ceil(width as usize)
            }
        })
        .sum::<usize>()
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_rect_shrinks_symmetrically() {
        let area = Rect::new(0, 0, 10, 6);
        let inner = inner_rect(area, 1);
        assert_eq!(inner, Rect::new(1, 1, 8, 4));
    }

    #[test]
    fn test_inner_rect_saturates() {
        let area = Rect::new(0, 0, 1, 1);
        let inner = inner_rect(area, 2);
        assert_eq!(inner.width, 0);
        assert_eq!(inner.height, 0);
    }

    #[test]
    fn test_wrapped_line_count() {
        assert_eq!(estimate_wrapped_line_count("hello", 10), 1);
        assert_eq!(estimate_wrapped_line_count("hello world", 5), 3);
        assert_eq!(estimate_wrapped_line_count("a\nb", 10), 2);
        assert_eq!(estimate_wrapped_line_count("", 10), 1);
        assert_eq!(estimate_wrapped_line_count("x", 0), 0);
    }
}
