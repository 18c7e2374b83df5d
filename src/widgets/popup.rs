use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, kept inside `bounds`
///
/// The popup starts at the anchor's left edge and shifts left when it would
/// run past the right edge. Height is cut to the rows left below the anchor.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(bounds.width);
    let popup_y = anchor.y.saturating_add(anchor.height).min(bounds.bottom());
    let room_below = bounds.bottom().saturating_sub(popup_y);

    let max_x = bounds.right().saturating_sub(popup_width);
    let popup_x = anchor.x.min(max_x).max(bounds.x);

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: height.min(room_below),
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
