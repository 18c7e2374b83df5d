use ratatui::layout::Position;
use tui_textarea::{CursorMove, TextArea};

use crate::dismiss::{DismissRegistry, WidgetId};
use crate::options::OptionSet;
use crate::panel::Panel;

/// Text field bound to a static list of suggestions
pub struct SuggestInput {
    options: OptionSet,
    placeholder: String,
    pub textarea: TextArea<'static>,
    pub panel: Panel,
}

impl SuggestInput {
    pub fn new(
        id: WidgetId,
        options: OptionSet,
        placeholder: impl Into<String>,
        registry: DismissRegistry,
        max_visible: usize,
    ) -> Self {
        Self {
            options,
            placeholder: placeholder.into(),
            textarea: TextArea::default(),
            panel: Panel::new(id, registry, max_visible),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.panel.owner()
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Options matching the current query, in original order
    pub fn suggestions(&self) -> Vec<&str> {
        self.options.filter(self.query())
    }

    /// Open with at least one match; an open panel with no matches is not drawn
    pub fn panel_visible(&self) -> bool {
        self.is_open() && !self.suggestions().is_empty()
    }

    /// Replace the query text. The panel stays as it is.
    pub fn on_text_change(&mut self, text: &str) {
        let single_line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();

        self.textarea = TextArea::new(vec![single_line]);
        self.textarea.move_cursor(CursorMove::End);
        self.panel.reset_highlight();
    }

    pub fn on_focus(&mut self) {
        self.panel.open();
    }

    /// Commit `option` as the query text and close
    pub fn on_select(&mut self, option: &str) {
        log::debug!("{:?} selected {:?}", self.id(), option);
        self.on_text_change(option);
        self.panel.close();
    }

    /// Close when `position` is outside the field and its panel
    pub fn on_outside_interaction(&mut self, position: Position) {
        if self.panel.is_open() && !self.panel.contains(position) {
            self.panel.close();
        }
    }

    /// Focus moved to another widget
    pub fn on_blur(&mut self) {
        self.panel.close();
    }

    /// The suggestion under the highlight, if the panel is drawn
    pub fn highlighted_suggestion(&self) -> Option<&str> {
        if !self.is_open() {
            return None;
        }
        self.suggestions().get(self.panel.highlighted()).copied()
    }

    pub fn select_highlighted(&mut self) -> bool {
        match self.highlighted_suggestion().map(str::to_owned) {
            Some(option) => {
                self.on_select(&option);
                true
            }
            None => false,
        }
    }
}
