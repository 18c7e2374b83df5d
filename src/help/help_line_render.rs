//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::{App, PromptField};

/// Hint text for the current focus
pub fn help_text(app: &App) -> &'static str {
    match app.focused_field() {
        Some(PromptField::Suggest(input)) if input.panel_visible() => {
            " ↑/↓: Highlight | Enter: Select | Esc: Close | Tab: Next Field | Ctrl+C: Quit"
        }
        Some(PromptField::Suggest(input)) if input.is_open() => {
            " Type to filter | Esc: Close | Tab: Next Field | Ctrl+C: Quit"
        }
        Some(PromptField::Suggest(_)) => {
            " Type to filter | ↓: Suggestions | Tab: Next Field | Esc/Ctrl+C: Quit"
        }
        Some(PromptField::Dropdown(dropdown)) if dropdown.is_open() => {
            " ↑/↓: Highlight | Enter: Select | Esc: Close | Tab: Next Field | Ctrl+C: Quit"
        }
        Some(PromptField::Dropdown(_)) => {
            " Enter/Space: Open | Tab: Next Field | Esc/Ctrl+C: Quit"
        }
        None => " Tab/Click: Focus Field | Esc/Ctrl+C: Quit",
    }
}

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(help_text(app)).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
