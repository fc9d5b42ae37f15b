//! UI rendering module: components, the root view, the runtime loop, and themes.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
