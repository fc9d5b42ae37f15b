//! Palette overview page: the render tree (`build_swatch_list`,
//! `render_palette_group`, `render_overview`), its responsive layout, and the
//! widgets and component that put it on screen.

pub mod layout;
#[allow(clippy::module_inception)]
pub mod overview;
mod overview_component;
pub mod overview_widget;
pub mod palette_group;
mod state;
pub mod swatch;
pub mod swatches;

pub use overview::{OverviewView, SECTIONS, SHADE_LABELS, SectionView, render_overview};
pub use overview_component::OverviewComponent;
pub use palette_group::{
    Activation, GroupLabel, LabelHandler, PaletteGroupView, SWATCH_ROWS, SWATCH_SLOTS, SWATCHES_PER_ROW, SwatchRow, render_palette_group,
};
pub use state::OverviewState;
pub use swatches::{SwatchView, build_swatch_list};
