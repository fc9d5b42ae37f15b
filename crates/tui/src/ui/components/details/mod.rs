mod details_component;
mod state;

pub use details_component::{DetailsComponent, group_copy_payload};
pub use state::DetailsState;
