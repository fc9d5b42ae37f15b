//! Leaf widget painting a single swatch slot.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use super::swatches::SwatchView;
use crate::ui::theme::ColorMode;

/// Marker drawn after the key of a group's base shade.
pub const BASE_MARKER: &str = "◆";

/// A filled cell: shade key on the first line, grade badge on the last.
///
/// An empty slot (`swatch: None`) paints nothing, leaving the background.
#[derive(Debug, Clone, Copy)]
pub struct SwatchCell<'a> {
    swatch: Option<&'a SwatchView>,
    color_mode: ColorMode,
}

impl<'a> SwatchCell<'a> {
    pub fn new(swatch: Option<&'a SwatchView>, color_mode: ColorMode) -> Self {
        Self { swatch, color_mode }
    }
}

impl Widget for SwatchCell<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(swatch) = self.swatch else {
            return;
        };
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let fill = self.color_mode.color(swatch.color.hex.rgb());
        let ink = self.color_mode.color(swatch.text_tone.rgb());
        let style = Style::default().bg(fill).fg(ink);
        buf.set_style(area, style);

        let key = if swatch.is_base {
            format!("{}{BASE_MARKER}", swatch.key)
        } else {
            swatch.key.to_string()
        };
        let key_style = if swatch.is_base { style.add_modifier(Modifier::BOLD) } else { style };
        put_centered(buf, area, area.y, &key, key_style);

        if area.height > 1 {
            put_centered(buf, area, area.bottom() - 1, &swatch.accessibility_label, style);
        }
    }
}

fn put_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let width = text.width() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    buf.set_stringn(x, y, text, usize::from(area.right() - x), style);
}
