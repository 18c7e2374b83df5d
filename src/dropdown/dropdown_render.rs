//! Dropdown button rendering

use ratatui::{Frame, layout::Rect};

use super::LabeledDropdown;
use crate::widgets::option_list::{self, RenderedList};
use crate::widgets::underline_field;

const CHEVRON_CLOSED: &str = "▾";
const CHEVRON_OPEN: &str = "▴";

/// Label text followed by the open/closed chevron
pub fn button_text(dropdown: &LabeledDropdown) -> String {
    let chevron = if dropdown.is_open() {
        CHEVRON_OPEN
    } else {
        CHEVRON_CLOSED
    };
    format!("{} {}", dropdown.label(), chevron)
}

/// Render the button and record its area for hit-testing
pub fn render_button(dropdown: &mut LabeledDropdown, frame: &mut Frame, area: Rect, focused: bool) {
    let text = button_text(dropdown);
    let window = underline_field::field_window(&text, 0, area.width);
    underline_field::render_field(frame, area, &window, "", focused);

    dropdown.panel.set_rendered_areas(area, None);
}

/// Render every option below the button while open
pub fn render_popup(dropdown: &mut LabeledDropdown, frame: &mut Frame) -> Option<RenderedList> {
    if !dropdown.panel_visible() {
        return None;
    }

    let options = dropdown.options().clone();
    let items: Vec<&str> = options.iter().collect();

    let rendered = option_list::render_list(&mut dropdown.panel, frame, &items);
    let field_area = dropdown.panel.field_area();
    dropdown.panel.set_rendered_areas(field_area, Some(rendered.area));

    Some(rendered)
}
