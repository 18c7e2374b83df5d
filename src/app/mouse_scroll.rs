//! Mouse wheel handling for option lists

use super::app_state::App;
use crate::dismiss::WidgetId;
use crate::layout::Region;

const WHEEL_LINES: usize = 1;

fn list_owner(region: Option<Region>) -> Option<WidgetId> {
    match region {
        Some(Region::ListItem { owner, .. }) | Some(Region::List(owner)) => Some(owner),
        _ => None,
    }
}

pub fn handle_scroll_down(app: &mut App, region: Option<Region>) {
    let Some(field) = list_owner(region).and_then(|owner| app.field_mut(owner)) else {
        return;
    };
    let len = field.rows().len();
    field.panel_mut().scroll_down(WHEEL_LINES, len);
}

pub fn handle_scroll_up(app: &mut App, region: Option<Region>) {
    let Some(field) = list_owner(region).and_then(|owner| app.field_mut(owner)) else {
        return;
    };
    field.panel_mut().scroll_up(WHEEL_LINES);
}
