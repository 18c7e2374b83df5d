//! Tests for option list rendering and row hit-testing

use super::*;
use crate::dismiss::{DismissRegistry, WidgetId};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn draw(panel: &mut Panel, items: &[&str], width: u16, height: u16) -> (RenderedList, String) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut rendered = None;
    terminal
        .draw(|f| {
            rendered = Some(render_list(panel, f, items));
        })
        .unwrap();
    (rendered.unwrap(), terminal.backend().to_string())
}

fn open_panel(max_visible: usize) -> Panel {
    let mut panel = Panel::new(WidgetId(0), DismissRegistry::new(), max_visible);
    panel.set_rendered_areas(Rect::new(2, 1, 16, 2), None);
    panel.open();
    panel
}

#[test]
fn test_content_width_accounts_for_marker_and_border() {
    assert_eq!(content_width(&["Neon"]), 4 + 2 + 1 + 2);
    assert_eq!(content_width(&[]), 5);
}

#[test]
fn test_render_list_sits_below_field() {
    let mut panel = open_panel(6);
    let (list, output) = draw(&mut panel, &["Moody", "Noir"], 40, 12);

    assert_eq!(list.area.y, 3);
    assert_eq!(list.area.x, 2);
    assert_eq!(list.area.height, 4);
    assert_eq!(list.rows, 0..2);
    assert!(output.contains("► Moody"));
    assert!(output.contains("  Noir"));
}

#[test]
fn test_render_list_caps_visible_rows() {
    let mut panel = open_panel(3);
    let items = ["a", "b", "c", "d", "e"];
    let (list, output) = draw(&mut panel, &items, 40, 20);

    assert_eq!(list.rows, 0..3);
    assert_eq!(list.area.height, 5);
    assert!(!output.contains(" d "));
}

#[test]
fn test_render_list_follows_highlight() {
    let mut panel = open_panel(2);
    let items = ["Moody", "Vibrant", "Minimal", "Cinematic"];
    panel.set_highlight(3, items.len());
    let (list, output) = draw(&mut panel, &items, 40, 20);

    assert_eq!(list.rows, 2..4);
    assert!(output.contains("► Cinematic"));
    assert!(!output.contains("Moody"));
}

#[test]
fn test_row_at_maps_screen_row_to_item() {
    let list = RenderedList {
        area: Rect::new(2, 3, 16, 5),
        rows: 4..7,
    };

    assert_eq!(row_at(&list, 5, 4), Some(4));
    assert_eq!(row_at(&list, 5, 6), Some(6));
}

#[test]
fn test_row_at_ignores_border_and_outside() {
    let list = RenderedList {
        area: Rect::new(2, 3, 16, 5),
        rows: 0..3,
    };

    assert_eq!(row_at(&list, 5, 3), None);
    assert_eq!(row_at(&list, 2, 4), None);
    assert_eq!(row_at(&list, 5, 7), None);
    assert_eq!(row_at(&list, 30, 4), None);
}

#[test]
fn test_short_terminal_reports_only_drawn_rows() {
    let mut panel = open_panel(6);
    let items = ["a", "b", "c", "d", "e", "f"];
    let (list, output) = draw(&mut panel, &items, 40, 7);

    assert_eq!(list.area.height, 4);
    assert_eq!(list.rows, 0..2);
    assert!(output.contains("► a"));
    assert_eq!(row_at(&list, 5, 5), Some(1));
    assert_eq!(row_at(&list, 5, 6), None);
}

#[test]
fn test_short_terminal_keeps_highlight_on_screen() {
    let mut panel = open_panel(6);
    let items = ["a", "b", "c", "d", "e", "f"];
    panel.set_highlight(4, items.len());
    let (list, output) = draw(&mut panel, &items, 40, 7);

    assert_eq!(list.rows, 3..5);
    assert!(output.contains("► e"));
    assert!(output.contains("  d"));
}

#[test]
fn test_fit_rows_shrinks_around_highlight() {
    assert_eq!(fit_rows(2..8, 5, 6), 2..8);
    assert_eq!(fit_rows(2..8, 3, 3), 2..5);
    assert_eq!(fit_rows(2..8, 7, 3), 5..8);
    assert_eq!(fit_rows(0..4, 2, 0), 0..0);
}
