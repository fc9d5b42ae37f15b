//! # Swatchbook TUI Library
//!
//! Terminal overview of a design-token color palette, built on Ratatui.
//!
//! ## Key Features
//!
//! - Overview page with Primary, Secondary, and Neutral sections, each color
//!   group shown as a clickable label and two rows of five swatches
//! - Per-swatch WCAG grade badges and legible text tone
//! - Details panel per group with contrast ratios and clipboard copy
//! - Responsive layout (stacked rows on narrow terminals) and an xterm-256
//!   fallback for terminals without truecolor
//!
//! ## Architecture
//!
//! The page is described by a pure render tree (`render_overview` →
//! `render_palette_group` → `build_swatch_list`) that borrows the palette and
//! a caller-supplied [`LabelHandler`]. Widgets paint that tree; components
//! route input to it and turn label activations into application effects.

mod app;
mod cmd;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use swatchbook_tokens::PaletteTable;
use swatchbook_util::UserPreferences;

pub use ui::components::overview::{
    Activation, GroupLabel, LabelHandler, OverviewView, PaletteGroupView, SECTIONS, SHADE_LABELS, SWATCH_SLOTS, SectionView, SwatchRow,
    SwatchView, build_swatch_list, render_overview, render_palette_group,
};

/// Startup options for [`run`].
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Theme id or alias requested on the command line.
    pub theme: Option<String>,
    /// Preference store used for the saved theme; in-memory when `None`.
    pub preferences: Option<UserPreferences>,
}

/// Runs the overview until the user quits.
///
/// # Errors
///
/// Terminal setup failures (raw mode, alternate screen) and input read
/// errors.
pub fn run(palette: Arc<PaletteTable>, options: RunOptions) -> Result<()> {
    ui::runtime::run_app(palette, options)
}
