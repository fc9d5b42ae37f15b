//! Responsive geometry for the overview, in content coordinates.
//!
//! Everything is laid out from origin `(0, 0)` at the available width; the
//! painter shifts rows by the scroll offset and hit-testing converts screen
//! positions back into this space.

use ratatui::layout::{Position, Rect};

use super::overview::OverviewView;
use super::palette_group::{SWATCH_SLOTS, SWATCHES_PER_ROW};

pub const SWATCH_WIDTH: u16 = 7;
pub const SWATCH_HEIGHT: u16 = 3;
pub const SWATCH_GAP: u16 = 1;
/// Column holding "Primary" / "Secondary" / "Neutral" in the wide layout.
pub const SECTION_COLUMN: u16 = 12;
/// Column holding group labels in the wide layout.
pub const LABEL_COLUMN: u16 = 9;
pub const LABEL_GUTTER: u16 = 2;

const SLOT_PITCH: u16 = SWATCH_WIDTH + SWATCH_GAP;
const GRID_LEFT: u16 = SECTION_COLUMN + LABEL_COLUMN + LABEL_GUTTER;

/// Minimum width at which both swatch rows sit side by side.
pub const WIDE_MIN_WIDTH: u16 = GRID_LEFT + SLOT_PITCH * SWATCH_SLOTS as u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Section titles and labels on their own lines, rows stacked.
    Narrow,
    /// Section/label columns on the left, ten swatches across, shade header shown.
    Wide,
}

impl Breakpoint {
    pub fn for_width(width: u16) -> Self {
        if width >= WIDE_MIN_WIDTH { Breakpoint::Wide } else { Breakpoint::Narrow }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupGeometry {
    /// Clickable label region.
    pub label: Rect,
    /// One rect per slot, by flat slot index.
    pub slots: [Rect; SWATCH_SLOTS],
    /// Rows occupied by the whole group (label included).
    pub top: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGeometry {
    pub title: Rect,
    /// Rule drawn under the section, if any.
    pub divider: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewLayout {
    pub breakpoint: Breakpoint,
    pub width: u16,
    /// Total content height in rows.
    pub height: u16,
    /// Cells for the decorative shade numbers; empty in the narrow layout.
    pub shade_header: Vec<Rect>,
    pub sections: Vec<SectionGeometry>,
    /// Flattened in display order, matching [`OverviewView::groups`].
    pub groups: Vec<GroupGeometry>,
}

impl OverviewLayout {
    pub fn compute(view: &OverviewView<'_>, width: u16) -> Self {
        match Breakpoint::for_width(width) {
            Breakpoint::Wide => Self::wide(view, width),
            Breakpoint::Narrow => Self::narrow(view, width),
        }
    }

    fn wide(view: &OverviewView<'_>, width: u16) -> Self {
        let shade_header = (0..SWATCH_SLOTS as u16)
            .map(|index| Rect::new(GRID_LEFT + index * SLOT_PITCH, 0, SWATCH_WIDTH, 1))
            .collect();

        let mut sections = Vec::with_capacity(view.sections.len());
        let mut groups = Vec::with_capacity(view.group_count());
        let mut y = 2;
        // Only the first section carries a bottom rule.
        for (section_index, section) in view.sections.iter().enumerate() {
            let title = Rect::new(0, y + SWATCH_HEIGHT / 2, SECTION_COLUMN, 1);
            for _ in &section.groups {
                let slots = std::array::from_fn(|index| {
                    Rect::new(GRID_LEFT + index as u16 * SLOT_PITCH, y, SWATCH_WIDTH, SWATCH_HEIGHT)
                });
                groups.push(GroupGeometry {
                    label: Rect::new(SECTION_COLUMN, y + SWATCH_HEIGHT / 2, LABEL_COLUMN, 1),
                    slots,
                    top: y,
                    height: SWATCH_HEIGHT,
                });
                y += SWATCH_HEIGHT + 1;
            }
            if section.groups.is_empty() {
                y += 2;
            }
            let divider = (section_index == 0).then(|| {
                let rule = Rect::new(0, y, width, 1);
                y += 2;
                rule
            });
            sections.push(SectionGeometry { title, divider });
            if divider.is_none() {
                y += 1;
            }
        }

        Self {
            breakpoint: Breakpoint::Wide,
            width,
            height: y,
            shade_header,
            sections,
            groups,
        }
    }

    fn narrow(view: &OverviewView<'_>, width: u16) -> Self {
        let mut sections = Vec::with_capacity(view.sections.len());
        let mut groups = Vec::with_capacity(view.group_count());
        let mut y = 0;
        for (section_index, section) in view.sections.iter().enumerate() {
            let title = Rect::new(0, y, width.min(SECTION_COLUMN), 1);
            y += 2;
            for group in &section.groups {
                let top = y;
                let label_width = (group.label.text().chars().count() as u16).max(1);
                let label = Rect::new(0, y, label_width.min(width), 1);
                y += 1;
                let slots = std::array::from_fn(|index| {
                    let row = (index / SWATCHES_PER_ROW) as u16;
                    let column = (index % SWATCHES_PER_ROW) as u16;
                    Rect::new(column * SLOT_PITCH, y + row * SWATCH_HEIGHT, SWATCH_WIDTH, SWATCH_HEIGHT)
                });
                y += 2 * SWATCH_HEIGHT;
                groups.push(GroupGeometry {
                    label,
                    slots,
                    top,
                    height: y - top,
                });
                y += 1;
            }
            let divider = (section_index == 0).then(|| {
                let rule = Rect::new(0, y, width, 1);
                y += 2;
                rule
            });
            sections.push(SectionGeometry { title, divider });
        }

        Self {
            breakpoint: Breakpoint::Narrow,
            width,
            height: y,
            shade_header: Vec::new(),
            sections,
            groups,
        }
    }

    /// Flat group index whose label contains the content position `(x, y)`.
    pub fn label_at(&self, x: u16, y: u16) -> Option<usize> {
        let position = Position::new(x, y);
        self.groups.iter().position(|group| group.label.contains(position))
    }
}

#[cfg(test)]
mod tests {
    use swatchbook_tokens::default_palette;

    use super::super::overview::render_overview;
    use super::super::palette_group::Activation;
    use super::*;

    fn noop(_: &Activation, _: &str) {}

    #[test]
    fn breakpoint_switches_at_wide_minimum() {
        assert_eq!(Breakpoint::for_width(WIDE_MIN_WIDTH), Breakpoint::Wide);
        assert_eq!(Breakpoint::for_width(WIDE_MIN_WIDTH - 1), Breakpoint::Narrow);
    }

    #[test]
    fn wide_layout_puts_ten_slots_on_one_line_under_the_header() {
        let view = render_overview(default_palette(), &noop);
        let layout = OverviewLayout::compute(&view, 120);
        assert_eq!(layout.breakpoint, Breakpoint::Wide);
        assert_eq!(layout.shade_header.len(), 10);
        assert_eq!(layout.groups.len(), 9);

        let purple = &layout.groups[0];
        assert!(purple.slots.iter().all(|slot| slot.y == purple.top));
        for (header, slot) in layout.shade_header.iter().zip(purple.slots.iter()) {
            assert_eq!(header.x, slot.x);
        }
        assert!(layout.sections[0].divider.is_some());
        assert!(layout.sections[1].divider.is_none());
    }

    #[test]
    fn narrow_layout_stacks_rows_and_hides_header() {
        let view = render_overview(default_palette(), &noop);
        let layout = OverviewLayout::compute(&view, 60);
        assert_eq!(layout.breakpoint, Breakpoint::Narrow);
        assert!(layout.shade_header.is_empty());

        let purple = &layout.groups[0];
        assert_eq!(purple.slots[0].y + SWATCH_HEIGHT, purple.slots[5].y);
        assert_eq!(purple.slots[0].x, purple.slots[5].x);
        assert!(purple.label.y < purple.slots[0].y);
    }

    #[test]
    fn groups_never_overlap_vertically() {
        let view = render_overview(default_palette(), &noop);
        for width in [60, 120] {
            let layout = OverviewLayout::compute(&view, width);
            for pair in layout.groups.windows(2) {
                assert!(pair[0].top + pair[0].height <= pair[1].top, "width {width}: {pair:?}");
            }
            let last = layout.groups.last().unwrap();
            assert!(last.top + last.height <= layout.height);
        }
    }

    #[test]
    fn label_hit_testing_maps_to_group_index() {
        let view = render_overview(default_palette(), &noop);
        let layout = OverviewLayout::compute(&view, 120);
        let teal = &layout.groups[4].label;
        assert_eq!(layout.label_at(teal.x, teal.y), Some(4));
        assert_eq!(layout.label_at(teal.right() - 1, teal.y), Some(4));
        assert_eq!(layout.label_at(layout.groups[4].slots[0].x, layout.groups[4].slots[0].y), None);
    }
}
