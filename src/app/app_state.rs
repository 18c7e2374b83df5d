use crossterm::event::KeyEvent;
use ratatui::layout::Position;

use crate::config::{Config, FieldConfig, FieldKind};
use crate::dismiss::{DismissRegistry, WidgetId};
use crate::dropdown::LabeledDropdown;
use crate::layout::LayoutRegions;
use crate::options::OptionSet;
use crate::panel::Panel;
use crate::suggest::SuggestInput;

/// A widget slot on the page
pub enum PromptField {
    Suggest(SuggestInput),
    Dropdown(LabeledDropdown),
}

impl PromptField {
    pub fn from_config(
        id: WidgetId,
        field: &FieldConfig,
        registry: &DismissRegistry,
        max_visible: usize,
    ) -> Self {
        let options = OptionSet::new(field.options.iter().cloned());
        match field.kind {
            FieldKind::Suggest => PromptField::Suggest(SuggestInput::new(
                id,
                options,
                field.label.as_str(),
                registry.clone(),
                max_visible,
            )),
            FieldKind::Dropdown => PromptField::Dropdown(LabeledDropdown::new(
                id,
                options,
                field.label.as_str(),
                registry.clone(),
                max_visible,
            )),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.panel().owner()
    }

    pub fn panel(&self) -> &Panel {
        match self {
            PromptField::Suggest(input) => &input.panel,
            PromptField::Dropdown(dropdown) => &dropdown.panel,
        }
    }

    pub fn panel_mut(&mut self) -> &mut Panel {
        match self {
            PromptField::Suggest(input) => &mut input.panel,
            PromptField::Dropdown(dropdown) => &mut dropdown.panel,
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel().is_open()
    }

    /// Text shown in the field: the query or the dropdown label
    pub fn displayed_text(&self) -> &str {
        match self {
            PromptField::Suggest(input) => input.query(),
            PromptField::Dropdown(dropdown) => dropdown.label(),
        }
    }

    /// Rows the open panel lists
    pub fn rows(&self) -> Vec<&str> {
        match self {
            PromptField::Suggest(input) => input.suggestions(),
            PromptField::Dropdown(dropdown) => dropdown.options().iter().collect(),
        }
    }

    /// Commit the row at `index` of the panel list
    pub fn select_row(&mut self, index: usize) {
        let Some(option) = self.rows().get(index).map(|row| row.to_string()) else {
            return;
        };
        match self {
            PromptField::Suggest(input) => input.on_select(&option),
            PromptField::Dropdown(dropdown) => dropdown.on_select(&option),
        }
    }

    pub fn on_outside_interaction(&mut self, position: Position) {
        match self {
            PromptField::Suggest(input) => input.on_outside_interaction(position),
            PromptField::Dropdown(dropdown) => dropdown.on_outside_interaction(position),
        }
    }

    pub fn on_blur(&mut self) {
        match self {
            PromptField::Suggest(input) => input.on_blur(),
            PromptField::Dropdown(dropdown) => dropdown.on_blur(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self {
            PromptField::Suggest(input) => input.handle_key(key),
            PromptField::Dropdown(dropdown) => dropdown.handle_key(key),
        }
    }
}

/// Application state
pub struct App {
    pub title: String,
    pub field_width: u16,
    pub fields: Vec<PromptField>,
    pub focus: Option<usize>,
    pub registry: DismissRegistry,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
}

impl App {
    /// Build the page described by `config`
    pub fn new(config: &Config) -> Self {
        let registry = DismissRegistry::new();
        let fields = config
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                PromptField::from_config(WidgetId(index), field, &registry, config.panel.max_visible)
            })
            .collect();

        Self {
            title: config.page.title.clone(),
            field_width: config.page.field_width,
            fields,
            focus: None,
            registry,
            layout_regions: LayoutRegions::new(),
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn field(&self, id: WidgetId) -> Option<&PromptField> {
        self.fields.get(id.0)
    }

    pub fn field_mut(&mut self, id: WidgetId) -> Option<&mut PromptField> {
        self.fields.get_mut(id.0)
    }

    pub fn focused_field(&self) -> Option<&PromptField> {
        self.focus.and_then(|index| self.fields.get(index))
    }

    /// Move focus to `index`
    ///
    /// The field losing focus closes its panel. A suggestion field gaining
    /// focus opens its panel.
    pub fn focus_field(&mut self, index: usize) {
        if index >= self.fields.len() || self.focus == Some(index) {
            return;
        }

        self.blur();
        self.focus = Some(index);
        if let PromptField::Suggest(input) = &mut self.fields[index] {
            input.on_focus();
        }
    }

    /// Drop focus from the current field
    pub fn blur(&mut self) {
        if let Some(field) = self.focus.take().and_then(|index| self.fields.get_mut(index)) {
            field.on_blur();
        }
    }

    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let next = match self.focus {
            Some(index) => (index + 1) % self.fields.len(),
            None => 0,
        };
        self.focus_field(next);
    }

    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let last = self.fields.len() - 1;
        let prev = match self.focus {
            Some(0) | None => last,
            Some(index) => index - 1,
        };
        self.focus_field(prev);
    }

    /// Notify every listening widget that a press landed outside it
    pub fn dispatch_outside_interaction(&mut self, position: Position) {
        for owner in self.registry.dispatch(position) {
            if let Some(field) = self.field_mut(owner) {
                field.on_outside_interaction(position);
            }
        }
    }
}
