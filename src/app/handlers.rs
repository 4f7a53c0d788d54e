//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{ActiveView, App, Focus};
use crate::widgets::InputBox;

impl App {
    /// Handle one key press. The caller filters to `KeyEventKind::Press`.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keybinds (always active)
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_sidebar();
                return;
            }
            KeyCode::Tab => {
                self.cycle_view();
                return;
            }
            _ => {}
        }

        match self.active_view {
            ActiveView::Chat => self.handle_chat_key(key),
            ActiveView::Documents => self.handle_list_view_key(key),
            ActiveView::Settings => {
                if key.code == KeyCode::Char('t') {
                    self.toggle_theme();
                } else {
                    self.handle_list_view_key(key);
                }
            }
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        // Upload panel toggle mirrors the paperclip button
        if key.code == KeyCode::Char('u') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.toggle_upload_panel();
            return;
        }

        if self.upload_panel_open && self.focus == Focus::UploadPath {
            match key.code {
                KeyCode::Esc => self.close_upload_panel(),
                KeyCode::Enter => self.submit_upload(),
                _ => {
                    edit_input(&mut self.upload_input, key);
                    self.mark_dirty();
                }
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit_message(),
            _ => {
                edit_input(&mut self.input, key);
                self.mark_dirty();
            }
        }
    }

    /// Keys for the views without a focused input.
    fn handle_list_view_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('1') | KeyCode::Char('c') => self.set_active_view(ActiveView::Chat),
            KeyCode::Char('2') | KeyCode::Char('d') => self.set_active_view(ActiveView::Documents),
            KeyCode::Char('3') | KeyCode::Char('s') => self.set_active_view(ActiveView::Settings),
            _ => {}
        }
    }
}

/// Route editing keys into an input box.
fn edit_input(input: &mut InputBox, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(c);
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete_char(),
        KeyCode::Left => input.move_cursor_left(),
        KeyCode::Right => input.move_cursor_right(),
        KeyCode::Home => input.move_cursor_home(),
        KeyCode::End => input.move_cursor_end(),
        _ => {}
    }
}
