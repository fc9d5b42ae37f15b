//! Palette group renderer: a clickable label plus two rows of five swatch slots.

use std::fmt;

use crossterm::event::{KeyEvent, MouseEvent};
use heck::ToTitleCase;
use swatchbook_tokens::PaletteTable;
use tracing::debug;

use super::swatches::{SwatchView, build_swatch_list};

pub const SWATCHES_PER_ROW: usize = 5;
pub const SWATCH_ROWS: usize = 2;
/// Slots per group; shades past this index are not shown.
pub const SWATCH_SLOTS: usize = SWATCHES_PER_ROW * SWATCH_ROWS;

/// Input that activated a group label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Mouse(MouseEvent),
    Key(KeyEvent),
}

/// Receives label activations as `(event, group_name)`.
pub trait LabelHandler {
    fn on_activate(&self, event: &Activation, group: &str);
}

impl<F> LabelHandler for F
where
    F: Fn(&Activation, &str),
{
    fn on_activate(&self, event: &Activation, group: &str) {
        self(event, group)
    }
}

/// The button in front of a group's swatches.
pub struct GroupLabel<'h> {
    group: String,
    text: String,
    handler: &'h dyn LabelHandler,
}

impl<'h> GroupLabel<'h> {
    fn new(group: &str, handler: &'h dyn LabelHandler) -> Self {
        Self {
            group: group.to_string(),
            text: group.to_title_case(),
            handler,
        }
    }

    /// Group name as keyed in the palette table.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Display text (title-cased group name).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Forwards `event` to the handler together with this label's group name.
    pub fn activate(&self, event: &Activation) {
        self.handler.on_activate(event, &self.group);
    }
}

impl fmt::Debug for GroupLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupLabel")
            .field("group", &self.group)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// Five slots; `None` marks an empty cell.
pub type SwatchRow = [Option<SwatchView>; SWATCHES_PER_ROW];

/// Render tree for one color group.
#[derive(Debug)]
pub struct PaletteGroupView<'h> {
    pub label: GroupLabel<'h>,
    /// Row one holds swatch indices 0..5, row two 5..10.
    pub rows: [SwatchRow; SWATCH_ROWS],
}

impl PaletteGroupView<'_> {
    /// Filled slots in display order.
    pub fn swatches(&self) -> impl Iterator<Item = &SwatchView> + '_ {
        self.rows.iter().flatten().flatten()
    }

    pub fn swatch_count(&self) -> usize {
        self.swatches().count()
    }

    /// Slot by flat index (0..10), `None` when empty or out of range.
    pub fn slot(&self, index: usize) -> Option<&SwatchView> {
        self.rows
            .get(index / SWATCHES_PER_ROW)
            .and_then(|row| row.get(index % SWATCHES_PER_ROW))
            .and_then(Option::as_ref)
    }
}

/// Builds the label and swatch grid for `group_name`.
///
/// The swatch list is built once and sliced into rows; groups with fewer than
/// ten shades leave trailing slots empty, and a group missing from the table
/// renders its label with no swatches.
pub fn render_palette_group<'h>(table: &PaletteTable, group_name: &str, handler: &'h dyn LabelHandler) -> PaletteGroupView<'h> {
    let swatches = build_swatch_list(table, group_name);
    if swatches.len() > SWATCH_SLOTS {
        debug!(group = group_name, shades = swatches.len(), "group has more shades than slots; extra shades hidden");
    }

    let mut rows: [SwatchRow; SWATCH_ROWS] = Default::default();
    for (index, swatch) in swatches.into_iter().take(SWATCH_SLOTS).enumerate() {
        rows[index / SWATCHES_PER_ROW][index % SWATCHES_PER_ROW] = Some(swatch);
    }

    PaletteGroupView {
        label: GroupLabel::new(group_name, handler),
        rows,
    }
}
