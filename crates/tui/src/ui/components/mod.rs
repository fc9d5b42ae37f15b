//! UI components: the palette overview, the group details panel, and the hint bar.

pub mod common;
pub mod component;
pub mod details;
pub mod hint_bar;
pub mod overview;

pub use component::*;
pub use details::DetailsComponent;
pub use hint_bar::HintBarComponent;
pub use overview::OverviewComponent;
