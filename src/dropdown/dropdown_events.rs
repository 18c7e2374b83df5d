use crossterm::event::{KeyCode, KeyEvent};

use super::dropdown_state::LabeledDropdown;

impl LabeledDropdown {
    /// Handle a key press while this dropdown has focus
    ///
    /// Returns false when the key is left for the page to handle.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let len = self.options().len();
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if !self.select_highlighted() {
                    self.on_toggle();
                }
                true
            }
            KeyCode::Esc => {
                if self.is_open() {
                    self.panel.close();
                    return true;
                }
                false
            }
            KeyCode::Down => {
                if self.is_open() {
                    self.panel.highlight_next(len);
                } else {
                    self.on_toggle();
                }
                true
            }
            KeyCode::Up => {
                if self.is_open() {
                    self.panel.highlight_prev(len);
                }
                true
            }
            _ => false,
        }
    }
}
