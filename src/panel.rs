//! Open/closed panel state shared by both widgets
//!
//! A panel is Open exactly while it holds a `ListenerGuard`. Closing drops the
//! guard, which unregisters the outside-interaction listener.

use ratatui::layout::{Position, Rect};

use crate::dismiss::{DismissRegistry, ListenerGuard, WidgetId};
use crate::scroll::ScrollState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Closed,
    Open,
}

#[derive(Debug)]
pub struct Panel {
    owner: WidgetId,
    registry: DismissRegistry,
    listener: Option<ListenerGuard>,
    highlighted: usize,
    scroll: ScrollState,
    field_area: Rect,
    list_area: Option<Rect>,
}

impl Panel {
    pub fn new(owner: WidgetId, registry: DismissRegistry, max_visible: usize) -> Self {
        Self {
            owner,
            registry,
            listener: None,
            highlighted: 0,
            scroll: ScrollState::new(max_visible),
            field_area: Rect::default(),
            list_area: None,
        }
    }

    pub fn owner(&self) -> WidgetId {
        self.owner
    }

    pub fn phase(&self) -> PanelPhase {
        if self.listener.is_some() {
            PanelPhase::Open
        } else {
            PanelPhase::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase() == PanelPhase::Open
    }

    pub fn open(&mut self) {
        if self.listener.is_some() {
            return;
        }
        let guard = self.registry.listen(self.owner);
        guard.set_bounds(&[self.field_area]);
        self.listener = Some(guard);
        self.reset_highlight();
        log::debug!("Panel {:?} opened", self.owner);
    }

    pub fn close(&mut self) {
        if self.listener.take().is_some() {
            self.list_area = None;
            log::debug!("Panel {:?} closed", self.owner);
        }
    }

    pub fn toggle(&mut self) {
        match self.phase() {
            PanelPhase::Open => self.close(),
            PanelPhase::Closed => self.open(),
        }
    }

    /// Whether `position` lies inside the field or the drawn list
    pub fn contains(&self, position: Position) -> bool {
        self.field_area.contains(position)
            || self.list_area.is_some_and(|area| area.contains(position))
    }

    /// Record where the field and list were drawn this frame
    pub fn set_rendered_areas(&mut self, field_area: Rect, list_area: Option<Rect>) {
        self.field_area = field_area;
        self.list_area = list_area;
        if let Some(guard) = &self.listener {
            match list_area {
                Some(list) => guard.set_bounds(&[field_area, list]),
                None => guard.set_bounds(&[field_area]),
            }
        }
    }

    pub fn field_area(&self) -> Rect {
        self.field_area
    }

    pub fn list_area(&self) -> Option<Rect> {
        self.list_area
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn reset_highlight(&mut self) {
        self.highlighted = 0;
        self.scroll.reset();
    }

    pub fn highlight_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.set_highlight((self.highlighted + 1) % len, len);
    }

    pub fn highlight_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let prev = self.highlighted.checked_sub(1).unwrap_or(len - 1);
        self.set_highlight(prev.min(len - 1), len);
    }

    pub fn set_highlight(&mut self, index: usize, len: usize) {
        if index >= len {
            return;
        }
        self.highlighted = index;
        self.scroll.update_bounds(len);
        self.scroll.ensure_visible(index);
    }

    pub fn scroll_down(&mut self, lines: usize, len: usize) {
        self.scroll.update_bounds(len);
        self.scroll.scroll_down(lines);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll.scroll_up(lines);
    }

    /// Indices of the rows drawn under the visual scroll cap
    pub fn visible_rows(&mut self, len: usize) -> std::ops::Range<usize> {
        self.scroll.update_bounds(len);
        self.scroll.visible_range(len)
    }

    pub fn max_visible(&self) -> usize {
        self.scroll.viewport_height
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod panel_tests;
