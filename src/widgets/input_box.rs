use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::Palette;

/// A single-line text input with cursor handling and horizontal scrolling.
///
/// Cursor position is a character index; edits convert to byte offsets so
/// multi-byte input is safe.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    /// The text content of the input box
    content: String,
    /// Current cursor position (character index)
    cursor_position: usize,
    /// Scroll offset in characters
    scroll_offset: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor (Backspace)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor (Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.char_count() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Render inside a bordered block with an optional placeholder.
    pub fn render_with_title(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        placeholder: &str,
        focused: bool,
        palette: &Palette,
    ) {
        let inner_width = area.width.saturating_sub(2);

        // Keep the cursor visible, leaving one cell for the cursor block
        let mut scroll_offset = self.scroll_offset;
        if inner_width > 0 {
            if self.cursor_position < scroll_offset {
                scroll_offset = self.cursor_position;
            }
            if self.cursor_position >= scroll_offset + inner_width as usize {
                scroll_offset = self.cursor_position - inner_width as usize + 1;
            }
        }

        let border_color = if focused {
            palette.accent
        } else {
            palette.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title.to_string());
        block.render(area, buf);

        let inner_area = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: inner_width,
            height: if area.height > 2 { 1 } else { 0 },
        };
        if inner_area.width == 0 || inner_area.height == 0 {
            return;
        }

        if self.content.is_empty() && !focused {
            buf.set_string(
                inner_area.x,
                inner_area.y,
                placeholder,
                Style::default().fg(palette.dim),
            );
            return;
        }

        // Visible slice, clipped to the available cells by display width
        let mut x = inner_area.x;
        let mut remaining = inner_width;
        for c in self.content.chars().skip(scroll_offset) {
            let w = c.width().unwrap_or(0) as u16;
            if w > remaining {
                break;
            }
            buf.set_string(x, inner_area.y, c.to_string(), Style::default().fg(palette.text));
            x += w;
            remaining -= w;
        }

        if focused {
            let cursor_x = (self.cursor_position - scroll_offset) as u16;
            if cursor_x < inner_width {
                let cursor_char = self
                    .content
                    .chars()
                    .nth(self.cursor_position)
                    .unwrap_or(' ');
                let cursor_style = Style::default().fg(palette.bg).bg(palette.accent);
                buf.set_string(
                    inner_area.x + cursor_x,
                    inner_area.y,
                    cursor_char.to_string(),
                    cursor_style,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_input_box_is_empty() {
        let input = InputBox::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_position(), 0);
        assert_eq!(input.content(), "");
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = InputBox::new();
        input.insert_char('H');
        input.insert_char('i');
        assert_eq!(input.content(), "Hi");
        assert_eq!(input.cursor_position(), 2);

        input.backspace();
        assert_eq!(input.content(), "H");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_insert_mid_string() {
        let mut input = InputBox::new();
        for c in "Hlo".chars() {
            input.insert_char(c);
        }
        input.move_cursor_left();
        input.move_cursor_left();
        input.insert_char('e');
        assert_eq!(input.content(), "Helo");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputBox::new();
        input.insert_char('é');
        input.insert_char('b');
        input.move_cursor_left();
        input.move_cursor_left();
        input.delete_char();
        assert_eq!(input.content(), "b");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = InputBox::new();
        input.move_cursor_left();
        assert_eq!(input.cursor_position(), 0);

        input.insert_char('a');
        input.move_cursor_right();
        assert_eq!(input.cursor_position(), 1);

        input.move_cursor_home();
        assert_eq!(input.cursor_position(), 0);
        input.move_cursor_end();
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut input = InputBox::new();
        for c in "hello".chars() {
            input.insert_char(c);
        }
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_position(), 0);
    }
}
