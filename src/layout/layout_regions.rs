use ratatui::layout::Rect;

use crate::dismiss::WidgetId;
use crate::widgets::option_list::RenderedList;

/// Screen component under a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The text field or dropdown button
    Field(WidgetId),
    /// A row in an open option list
    ListItem { owner: WidgetId, index: usize },
    /// Border or empty space inside an open option list
    List(WidgetId),
}

/// Areas drawn in the last frame
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub fields: Vec<(WidgetId, Rect)>,
    /// Lists in draw order; later entries sit on top
    pub lists: Vec<(WidgetId, RenderedList)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.lists.clear();
    }

    pub fn record_field(&mut self, owner: WidgetId, area: Rect) {
        self.fields.push((owner, area));
    }

    pub fn record_list(&mut self, owner: WidgetId, list: RenderedList) {
        self.lists.push((owner, list));
    }

    pub fn field_area(&self, owner: WidgetId) -> Option<Rect> {
        self.fields
            .iter()
            .find(|(id, _)| *id == owner)
            .map(|(_, area)| *area)
    }

    pub fn list(&self, owner: WidgetId) -> Option<&RenderedList> {
        self.lists
            .iter()
            .find(|(id, _)| *id == owner)
            .map(|(_, list)| list)
    }
}
