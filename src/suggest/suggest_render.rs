//! Suggestion field rendering

use ratatui::{Frame, layout::Rect};

use super::SuggestInput;
use crate::widgets::option_list::{self, RenderedList};
use crate::widgets::underline_field;

/// Render the text field and record its area for hit-testing
pub fn render_field(input: &mut SuggestInput, frame: &mut Frame, area: Rect, focused: bool) {
    let cursor_chars = input.textarea.cursor().1;
    let window = underline_field::field_window(input.query(), cursor_chars, area.width);
    let cursor = underline_field::render_field(frame, area, &window, input.placeholder(), focused);

    if focused {
        frame.set_cursor_position(cursor);
    }

    input.panel.set_rendered_areas(area, None);
}

/// Render the suggestion panel below the field
///
/// Draws nothing when the panel is closed or no option matches the query.
pub fn render_popup(input: &mut SuggestInput, frame: &mut Frame) -> Option<RenderedList> {
    if !input.panel_visible() {
        return None;
    }

    let suggestions: Vec<String> = input.suggestions().into_iter().map(str::to_owned).collect();
    let items: Vec<&str> = suggestions.iter().map(String::as_str).collect();

    let rendered = option_list::render_list(&mut input.panel, frame, &items);
    let field_area = input.panel.field_area();
    input.panel.set_rendered_areas(field_area, Some(rendered.area));

    Some(rendered)
}
