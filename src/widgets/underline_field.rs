//! Single-row field drawn over an underline
//!
//! Text is centered when it fits. Longer text scrolls so the cursor column
//! stays on screen.

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Visible slice of a field's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWindow {
    pub text: String,
    /// Column of the first visible character, relative to the field
    pub start: u16,
    /// Column of the cursor, relative to the field
    pub cursor: u16,
}

/// Fit `text` into `width` columns with the cursor after `cursor_chars` characters
pub fn field_window(text: &str, cursor_chars: usize, width: u16) -> FieldWindow {
    let width = usize::from(width);
    let chars: Vec<char> = text.chars().collect();
    let cursor_chars = cursor_chars.min(chars.len());
    let before_width: usize = chars[..cursor_chars].iter().filter_map(|c| c.width()).sum();
    let text_width = text.width();

    if text_width < width {
        let start = (width - text_width) / 2;
        return FieldWindow {
            text: text.to_string(),
            start: start as u16,
            cursor: (start + before_width) as u16,
        };
    }

    // Drop leading characters until the cursor fits inside the field
    let mut skip = 0;
    let mut skipped_width = 0;
    while skip < cursor_chars && before_width - skipped_width >= width {
        skipped_width += chars[skip].width().unwrap_or(0);
        skip += 1;
    }

    let mut visible = String::new();
    let mut visible_width = 0;
    for c in &chars[skip..] {
        let w = c.width().unwrap_or(0);
        if visible_width + w > width {
            break;
        }
        visible.push(*c);
        visible_width += w;
    }

    FieldWindow {
        text: visible,
        start: 0,
        cursor: (before_width - skipped_width).min(width.saturating_sub(1)) as u16,
    }
}

/// Draw `window` (or the dimmed placeholder when `text` is empty) over an underline
///
/// Returns the cursor position on screen.
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    window: &FieldWindow,
    placeholder: &str,
    focused: bool,
) -> Position {
    let underline_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(underline_color));
    let inner = block.inner(area);

    frame.render_widget(block, area);

    if window.text.is_empty() {
        let placeholder = Paragraph::new(Line::from(placeholder))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(placeholder, inner);
        return Position::new(inner.x + inner.width / 2, inner.y);
    }

    let text_area = Rect {
        x: inner.x + window.start,
        width: inner.width.saturating_sub(window.start),
        ..inner
    };
    let text = Paragraph::new(Line::from(window.text.as_str())).style(Style::default().fg(Color::White));
    frame.render_widget(text, text_area);

    Position::new(inner.x + window.cursor, inner.y)
}

#[cfg(test)]
#[path = "underline_field_tests.rs"]
mod underline_field_tests;
