use ratatui::layout::Rect;

use super::layout::OverviewLayout;
use crate::ui::components::common::ScrollMetrics;

/// Interaction state for the overview page.
///
/// `layout` and `viewport` are refreshed on every draw so mouse hit-testing
/// always uses the geometry that is on screen.
#[derive(Debug, Default)]
pub struct OverviewState {
    /// Flat index of the focused group label.
    pub focused: Option<usize>,
    pub scroll: ScrollMetrics,
    pub layout: Option<OverviewLayout>,
    pub viewport: Rect,
}

impl OverviewState {
    /// Moves focus by `delta` labels, wrapping around `group_count`.
    pub fn move_focus(&mut self, delta: isize, group_count: usize) {
        if group_count == 0 {
            self.focused = None;
            return;
        }
        let count = group_count as isize;
        let next = match self.focused {
            Some(current) => (current as isize + delta).rem_euclid(count),
            None if delta < 0 => count - 1,
            None => 0,
        };
        self.focused = Some(next as usize);
        self.reveal_focused();
    }

    /// Scrolls so the focused group is inside the viewport.
    pub fn reveal_focused(&mut self) {
        let Some(index) = self.focused else {
            return;
        };
        if let Some(group) = self.layout.as_ref().and_then(|layout| layout.groups.get(index)) {
            self.scroll.ensure_visible(group.top, group.height);
        }
    }

    /// Group whose label sits under the screen cell `(column, row)`.
    pub fn label_at_screen(&self, column: u16, row: u16) -> Option<usize> {
        let layout = self.layout.as_ref()?;
        if !self.viewport.contains((column, row).into()) {
            return None;
        }
        let x = column - self.viewport.x;
        let y = row - self.viewport.y + self.scroll.offset();
        layout.label_at(x, y)
    }
}
