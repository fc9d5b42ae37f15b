//! Component system for the Swatchbook TUI.
//!
//! Components own a rectangle of the screen. They react to input by mutating
//! their slice of [`App`] and report anything with wider reach (opening the
//! details panel, clipboard writes, quitting) back as [`Effect`]s, which the
//! runtime applies after the handler returns.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::{App, Effect};

/// A UI component with its own input handling and rendering.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: the runtime routes key and mouse events to the
///    component that currently owns input.
/// 2. **Effects**: returned effects are applied by the runtime, never by the
///    component itself.
/// 3. **Rendering**: `render()` draws into the provided area. It may refresh
///    cached geometry in `App` (for hit-testing) but must not change what the
///    user sees on the next frame.
pub(crate) trait Component {
    /// Handle key events while this component owns input.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events while this component owns input.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
