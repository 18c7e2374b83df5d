use ratatui::layout::Position;

use crate::dismiss::{DismissRegistry, WidgetId};
use crate::options::OptionSet;
use crate::panel::Panel;

/// Dropdown whose label shows the last selected option
pub struct LabeledDropdown {
    options: OptionSet,
    label: String,
    pub panel: Panel,
}

impl LabeledDropdown {
    pub fn new(
        id: WidgetId,
        options: OptionSet,
        label: impl Into<String>,
        registry: DismissRegistry,
        max_visible: usize,
    ) -> Self {
        Self {
            options,
            label: label.into(),
            panel: Panel::new(id, registry, max_visible),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.panel.owner()
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Initial label until something is selected
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Open with at least one option
    pub fn panel_visible(&self) -> bool {
        self.is_open() && !self.options.is_empty()
    }

    pub fn on_toggle(&mut self) {
        self.panel.toggle();
    }

    /// Show `option` as the label and close
    pub fn on_select(&mut self, option: &str) {
        log::debug!("{:?} selected {:?}", self.id(), option);
        self.label = option.to_string();
        self.panel.close();
    }

    /// Close when `position` is outside the button and its panel
    pub fn on_outside_interaction(&mut self, position: Position) {
        if self.panel.is_open() && !self.panel.contains(position) {
            self.panel.close();
        }
    }

    pub fn on_blur(&mut self) {
        self.panel.close();
    }

    pub fn highlighted_option(&self) -> Option<&str> {
        if !self.is_open() {
            return None;
        }
        self.options.as_slice().get(self.panel.highlighted()).map(String::as_str)
    }

    pub fn select_highlighted(&mut self) -> bool {
        match self.highlighted_option().map(str::to_owned) {
            Some(option) => {
                self.on_select(&option);
                true
            }
            None => false,
        }
    }
}
