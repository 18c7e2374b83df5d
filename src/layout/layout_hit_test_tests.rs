//! Tests for region hit-testing

use ratatui::layout::Rect;

use super::*;
use crate::dismiss::WidgetId;
use crate::widgets::option_list::RenderedList;

fn page_regions() -> LayoutRegions {
    let mut regions = LayoutRegions::new();
    regions.record_field(WidgetId(0), Rect::new(10, 5, 20, 2));
    regions.record_field(WidgetId(1), Rect::new(34, 5, 20, 2));
    regions
}

#[test]
fn test_region_at_field() {
    let regions = page_regions();
    assert_eq!(region_at(&regions, 12, 5), Some(Region::Field(WidgetId(0))));
    assert_eq!(region_at(&regions, 40, 6), Some(Region::Field(WidgetId(1))));
}

#[test]
fn test_region_at_empty_space() {
    let regions = page_regions();
    assert_eq!(region_at(&regions, 0, 0), None);
    assert_eq!(region_at(&regions, 31, 5), None);
}

#[test]
fn test_region_at_list_item() {
    let mut regions = page_regions();
    regions.record_list(
        WidgetId(0),
        RenderedList {
            area: Rect::new(10, 7, 20, 5),
            rows: 2..5,
        },
    );

    assert_eq!(
        region_at(&regions, 12, 8),
        Some(Region::ListItem {
            owner: WidgetId(0),
            index: 2
        })
    );
    assert_eq!(
        region_at(&regions, 12, 10),
        Some(Region::ListItem {
            owner: WidgetId(0),
            index: 4
        })
    );
}

#[test]
fn test_region_at_list_border() {
    let mut regions = page_regions();
    regions.record_list(
        WidgetId(0),
        RenderedList {
            area: Rect::new(10, 7, 20, 5),
            rows: 0..3,
        },
    );

    assert_eq!(region_at(&regions, 10, 8), Some(Region::List(WidgetId(0))));
    assert_eq!(region_at(&regions, 12, 11), Some(Region::List(WidgetId(0))));
}

#[test]
fn test_list_drawn_over_field_wins() {
    let mut regions = page_regions();
    regions.record_field(WidgetId(2), Rect::new(10, 9, 20, 2));
    regions.record_list(
        WidgetId(0),
        RenderedList {
            area: Rect::new(10, 7, 20, 5),
            rows: 0..3,
        },
    );

    assert_eq!(
        region_at(&regions, 12, 9),
        Some(Region::ListItem {
            owner: WidgetId(0),
            index: 1
        })
    );
}
