//! Mouse click handling
//!
//! A press on a list row commits that row before outside-interaction
//! listeners run, so the selection is never lost to the dismissal.

use crossterm::event::MouseEvent;
use ratatui::layout::Position;

use super::app_state::{App, PromptField};
use crate::dismiss::WidgetId;
use crate::layout::Region;

/// Handle left mouse button press for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    let position = Position::new(mouse.column, mouse.row);

    if let Some(Region::ListItem { owner, index }) = region {
        select_list_item(app, owner, index);
    }

    app.dispatch_outside_interaction(position);

    match region {
        Some(Region::Field(owner)) => click_field(app, owner),
        Some(Region::ListItem { .. }) | Some(Region::List(_)) => {}
        None => app.blur(),
    }
}

fn select_list_item(app: &mut App, owner: WidgetId, index: usize) {
    if let Some(field) = app.field_mut(owner) {
        field.select_row(index);
    }
}

fn click_field(app: &mut App, owner: WidgetId) {
    app.focus_field(owner.0);

    if let Some(PromptField::Dropdown(dropdown)) = app.field_mut(owner) {
        dropdown.on_toggle();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
