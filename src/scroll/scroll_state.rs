use std::ops::Range;

/// Vertical scroll window over a list of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: usize,
    pub max_offset: usize,
    pub viewport_height: usize,
}

impl ScrollState {
    pub fn new(viewport_height: usize) -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height,
        }
    }

    pub fn update_bounds(&mut self, content_len: usize) {
        self.max_offset = content_len.saturating_sub(self.viewport_height);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Move the window the least distance needed to show `index`
    pub fn ensure_visible(&mut self, index: usize) {
        if self.viewport_height == 0 {
            return;
        }

        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.viewport_height {
            self.offset = (index + 1 - self.viewport_height).min(self.max_offset);
        }
    }

    /// Row indices currently inside the window
    pub fn visible_range(&self, content_len: usize) -> Range<usize> {
        let start = self.offset.min(content_len);
        let end = (start + self.viewport_height).min(content_len);
        start..end
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
