//! Option list popup shared by both widgets
//!
//! Draws the visible slice of a panel's rows below the field, with the
//! highlighted row marked.

use std::ops::Range;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::panel::Panel;
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_BORDER_WIDTH: u16 = 2;
const MARKER_WIDTH: u16 = 2;
const ROW_PADDING: u16 = 1;

/// Where a list was drawn and which rows it shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    pub area: Rect,
    pub rows: Range<usize>,
}

/// Width needed to show every row without truncation
pub fn content_width(items: &[&str]) -> u16 {
    let widest = items.iter().map(|item| item.width()).max().unwrap_or(0);
    let widest = u16::try_from(widest).unwrap_or(u16::MAX);
    widest
        .saturating_add(MARKER_WIDTH)
        .saturating_add(ROW_PADDING)
        .saturating_add(POPUP_BORDER_WIDTH)
}

/// Render `items` under the panel's field area
pub fn render_list(panel: &mut Panel, frame: &mut Frame, items: &[&str]) -> RenderedList {
    let anchor = panel.field_area();
    let rows = panel.visible_rows(items.len());
    let width = content_width(items).max(anchor.width);
    let height = (rows.len() as u16).saturating_add(POPUP_BORDER_HEIGHT);

    let area = popup::popup_below_anchor(anchor, frame.area(), width, height);

    let highlighted = panel.highlighted();
    let capacity = usize::from(area.height.saturating_sub(POPUP_BORDER_HEIGHT));
    let rows = fit_rows(rows, highlighted, capacity);
    let list_items: Vec<ListItem> = rows
        .clone()
        .map(|index| {
            let text = items[index];
            let line = if index == highlighted {
                Line::from(Span::styled(
                    format!("► {}", text),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", text),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, area);

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, area);

    RenderedList { area, rows }
}

/// Shrink `rows` to `capacity`, keeping `highlighted` inside when it was
fn fit_rows(rows: Range<usize>, highlighted: usize, capacity: usize) -> Range<usize> {
    if rows.len() <= capacity {
        return rows;
    }
    if capacity == 0 {
        return rows.start..rows.start;
    }

    let start = if rows.contains(&highlighted) && highlighted >= rows.start + capacity {
        highlighted + 1 - capacity
    } else {
        rows.start
    };
    start..start + capacity
}

/// Index of the row under `(column, row)`, if any
pub fn row_at(list: &RenderedList, column: u16, row: u16) -> Option<usize> {
    let inner = popup::inset_rect(list.area, 1, 1);
    if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
        return None;
    }

    let index = list.rows.start + usize::from(row - inner.y);
    (index < list.rows.end).then_some(index)
}

#[cfg(test)]
#[path = "option_list_tests.rs"]
mod option_list_tests;
