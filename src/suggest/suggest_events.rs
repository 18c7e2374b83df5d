use crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::CursorMove;

use super::suggest_state::SuggestInput;

impl SuggestInput {
    /// Handle a key press while this field has focus
    ///
    /// Returns false when the key is left for the page to handle.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                if self.panel_visible() {
                    self.select_highlighted();
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
                    let len = self.suggestions().len();
                    self.panel.highlight_next(len);
                } else {
                    self.on_focus();
                }
                true
            }
            KeyCode::Up => {
                if self.is_open() {
                    let len = self.suggestions().len();
                    self.panel.highlight_prev(len);
                }
                true
            }
            KeyCode::Tab | KeyCode::BackTab => false,
            _ => {
                if self.textarea.input(key) {
                    self.text_edited();
                }
                true
            }
        }
    }

    /// Keep the query on one line after an edit and restart the highlight
    fn text_edited(&mut self) {
        if self.textarea.lines().len() > 1 {
            let (row, col) = self.textarea.cursor();
            let cursor_chars: usize = self.textarea.lines()[..row]
                .iter()
                .map(|line| line.chars().count())
                .sum::<usize>()
                + col;
            let joined = self.textarea.lines().concat();
            self.on_text_change(&joined);
            let column = u16::try_from(cursor_chars).unwrap_or(u16::MAX);
            self.textarea.move_cursor(CursorMove::Jump(0, column));
        } else {
            self.panel.reset_highlight();
        }
    }
}
