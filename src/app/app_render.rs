use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::app_state::{App, PromptField};
use crate::dropdown::dropdown_render;
use crate::suggest::suggest_render;

// Text row plus underline
const FIELD_HEIGHT: u16 = 2;
const SEPARATOR: &str = "+";
const COLUMN_SPACING: u16 = 3;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [_, row_area, _, help_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let mut constraints = vec![Constraint::Length(self.title.width() as u16)];
        for _ in &self.fields {
            constraints.push(Constraint::Length(SEPARATOR.width() as u16));
            constraints.push(Constraint::Length(self.field_width));
        }
        let columns = Layout::horizontal(constraints)
            .flex(Flex::Center)
            .spacing(COLUMN_SPACING)
            .split(row_area);

        let title = Paragraph::new(self.title.as_str()).style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, text_row(columns[0]));

        for (index, field) in self.fields.iter_mut().enumerate() {
            let separator_area = columns[1 + index * 2];
            let field_area = columns[2 + index * 2];
            let focused = self.focus == Some(index);

            frame.render_widget(Paragraph::new(SEPARATOR), text_row(separator_area));

            match field {
                PromptField::Suggest(input) => {
                    suggest_render::render_field(input, frame, field_area, focused)
                }
                PromptField::Dropdown(dropdown) => {
                    dropdown_render::render_button(dropdown, frame, field_area, focused)
                }
            }
            self.layout_regions.record_field(field.id(), field_area);
        }

        // Lists go last so they draw over neighbouring fields
        for field in self.fields.iter_mut() {
            let id = field.id();
            let rendered = match field {
                PromptField::Suggest(input) => suggest_render::render_popup(input, frame),
                PromptField::Dropdown(dropdown) => dropdown_render::render_popup(dropdown, frame),
            };
            if let Some(list) = rendered {
                self.layout_regions.record_list(id, list);
            }
        }

        crate::help::help_line_render::render_line(self, frame, help_area);
    }
}

fn text_row(area: Rect) -> Rect {
    Rect { height: 1, ..area }
}
