use std::io;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app_state::App;
use super::{mouse_click, mouse_hover, mouse_scroll};
use crate::layout::region_at;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => {
                self.handle_mouse_event(mouse_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        // Not a global key, delegate to the focused field
        let handled = match self.focus.and_then(|index| self.fields.get_mut(index)) {
            Some(field) => field.handle_key(key),
            None => false,
        };
        if handled {
            return;
        }

        // Esc with nothing left to close exits
        if key.code == KeyCode::Esc {
            self.should_quit = true;
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Tab / Shift+Tab: Move focus between fields
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                true
            }
            KeyCode::BackTab => {
                self.focus_prev();
                true
            }
            _ => false,
        }
    }

    /// Route a mouse event to the component under the pointer
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => mouse_click::handle_click(self, region, mouse),
            MouseEventKind::Moved => mouse_hover::handle_hover(self, region),
            MouseEventKind::ScrollDown => mouse_scroll::handle_scroll_down(self, region),
            MouseEventKind::ScrollUp => mouse_scroll::handle_scroll_up(self, region),
            _ => {}
        }
    }
}
