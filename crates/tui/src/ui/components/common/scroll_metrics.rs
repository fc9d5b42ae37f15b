//! Vertical scroll bookkeeping for the overview page.

/// Offset, content height, and viewport height in terminal rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollMetrics {
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Returns the maximum valid scroll offset.
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Returns whether content exceeds the current viewport.
    pub fn is_scrollable(&self) -> bool {
        self.content_height > self.viewport_height && self.viewport_height > 0
    }

    /// Records both dimensions after a layout pass and clamps the offset.
    pub fn update(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.clamp_offset();
    }

    /// Scrolls by relative line count (`+` down, `-` up).
    pub fn scroll_lines(&mut self, delta: i16) {
        if delta == 0 || !self.is_scrollable() {
            return;
        }
        let current = i32::from(self.offset);
        let max = i32::from(self.max_offset());
        let next = (current + i32::from(delta)).clamp(0, max);
        self.offset = next as u16;
    }

    /// Scrolls by viewport page increments.
    pub fn scroll_pages(&mut self, delta_pages: i16) {
        if delta_pages == 0 || self.viewport_height == 0 {
            return;
        }
        let delta = i32::from(self.viewport_height).saturating_mul(i32::from(delta_pages));
        self.scroll_lines(delta.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Adjusts the offset the least amount needed to show rows `top..top + height`.
    ///
    /// Spans taller than the viewport are aligned to their top row.
    pub fn ensure_visible(&mut self, top: u16, height: u16) {
        if self.viewport_height == 0 {
            return;
        }
        let bottom = top.saturating_add(height);
        if top < self.offset || height >= self.viewport_height {
            self.offset = top;
        } else if bottom > self.offset + self.viewport_height {
            self.offset = bottom - self.viewport_height;
        }
        self.clamp_offset();
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}
