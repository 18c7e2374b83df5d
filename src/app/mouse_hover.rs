//! Mouse hover handling
//!
//! Hovering a list row moves that list's highlight onto it.

use super::app_state::App;
use crate::layout::Region;

/// Handle mouse hover for the given region
pub fn handle_hover(app: &mut App, region: Option<Region>) {
    let Some(Region::ListItem { owner, index }) = region else {
        return;
    };
    let Some(field) = app.field_mut(owner) else {
        return;
    };

    let len = field.rows().len();
    field.panel_mut().set_highlight(index, len);
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
