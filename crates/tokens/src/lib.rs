//! # Swatchbook design tokens
//!
//! Typed model of a design-token color palette plus the helpers every view of
//! it needs:
//!
//! - [`PaletteTable`] / [`ColorGroup`] / [`ColorEntry`]: the immutable palette,
//!   keyed by group name and numeric [`ShadeKey`].
//! - [`HexColor`] and the WCAG contrast math in [`color`].
//! - [`accessibility_label`] and [`text_color`] for legibility metadata.
//! - Loading from the embedded default palette, JSON, or YAML, with missing
//!   contrast, name, and base fields filled in on the way in.

pub mod accessibility;
pub mod color;
mod extend;
pub mod loader;
pub mod palette;

pub use accessibility::{TextTone, WcagGrade, accessibility_label, text_color};
pub use color::{HexColor, contrast_ratio, relative_luminance};
pub use loader::{TokenError, default_palette, load_from_path, parse_json, parse_yaml};
pub use palette::{ColorEntry, ColorGroup, PaletteTable, ShadeKey};
