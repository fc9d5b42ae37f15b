//! Paints an [`OverviewView`] using a precomputed [`OverviewLayout`].
//!
//! The whole page is drawn into an off-screen buffer at content size and the
//! visible window is copied out at the scroll offset, so geometry never has to
//! know about scrolling.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use super::layout::{Breakpoint, OverviewLayout};
use super::overview::OverviewView;
use super::palette_group::SWATCH_SLOTS;
use super::swatch::SwatchCell;
use crate::ui::theme::theme_helpers::panel_style;
use crate::ui::theme::{ColorMode, Theme};

pub struct OverviewWidget<'a, 'h> {
    view: &'a OverviewView<'h>,
    layout: &'a OverviewLayout,
    theme: &'a dyn Theme,
    color_mode: ColorMode,
    focused: Option<usize>,
    scroll: u16,
}

impl<'a, 'h> OverviewWidget<'a, 'h> {
    pub fn new(view: &'a OverviewView<'h>, layout: &'a OverviewLayout, theme: &'a dyn Theme, color_mode: ColorMode) -> Self {
        Self {
            view,
            layout,
            theme,
            color_mode,
            focused: None,
            scroll: 0,
        }
    }

    pub fn focused(mut self, focused: Option<usize>) -> Self {
        self.focused = focused;
        self
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    fn paint(&self, content: &mut Buffer) {
        content.set_style(content.area, panel_style(self.theme));

        let muted = self.theme.text_muted_style();
        for (cell, label) in self.layout.shade_header.iter().zip(self.view.shade_labels) {
            put_aligned(content, *cell, label, muted, Align::Center);
        }

        let divider_style = Style::default().fg(self.theme.roles().divider);
        for (section, geometry) in self.view.sections.iter().zip(&self.layout.sections) {
            put_aligned(content, geometry.title, section.title, self.theme.heading_style(), Align::Left);
            if let Some(rule) = geometry.divider {
                let line = "─".repeat(usize::from(rule.width));
                content.set_stringn(rule.x, rule.y, line, usize::from(rule.width), divider_style);
            }
        }

        let label_align = match self.layout.breakpoint {
            Breakpoint::Wide => Align::Right,
            Breakpoint::Narrow => Align::Left,
        };
        for (index, (group, geometry)) in self.view.groups().zip(&self.layout.groups).enumerate() {
            let style = self.theme.group_label_style(self.focused == Some(index));
            put_aligned(content, geometry.label, group.label.text(), style, label_align);
            for slot in 0..SWATCH_SLOTS {
                SwatchCell::new(group.slot(slot), self.color_mode).render(geometry.slots[slot], content);
            }
        }
    }
}

impl Widget for OverviewWidget<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let mut content = Buffer::empty(Rect::new(0, 0, area.width, self.layout.height.max(1)));
        self.paint(&mut content);

        buf.set_style(area, panel_style(self.theme));
        for row in 0..area.height {
            let source_y = self.scroll.saturating_add(row);
            if source_y >= content.area.height {
                break;
            }
            for column in 0..area.width {
                if let (Some(source), Some(target)) = (content.cell((column, source_y)), buf.cell_mut((area.x + column, area.y + row))) {
                    *target = source.clone();
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

fn put_aligned(buf: &mut Buffer, rect: Rect, text: &str, style: Style, align: Align) {
    let rect = rect.intersection(buf.area);
    if rect.is_empty() {
        return;
    }
    let width = (text.width() as u16).min(rect.width);
    let x = match align {
        Align::Left => rect.x,
        Align::Center => rect.x + (rect.width - width) / 2,
        Align::Right => rect.right() - width,
    };
    buf.set_stringn(x, rect.y, text, usize::from(rect.right() - x), style);
}

#[cfg(test)]
mod tests {
    use swatchbook_tokens::default_palette;

    use super::super::overview::render_overview;
    use super::super::palette_group::Activation;
    use super::*;
    use crate::ui::theme::catalog;

    fn noop(_: &Activation, _: &str) {}

    fn draw(width: u16, height: u16, focused: Option<usize>, scroll: u16) -> Buffer {
        let palette = default_palette();
        let theme = catalog::default_truecolor().build(palette);
        let view = render_overview(palette, &noop);
        let layout = OverviewLayout::compute(&view, width);
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        OverviewWidget::new(&view, &layout, theme.as_ref(), ColorMode::Truecolor)
            .focused(focused)
            .scroll(scroll)
            .render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn redrawing_unchanged_inputs_is_identical() {
        assert_eq!(draw(120, 40, Some(3), 2), draw(120, 40, Some(3), 2));
        assert_eq!(draw(60, 30, None, 0), draw(60, 30, None, 0));
    }

    #[test]
    fn wide_page_shows_header_sections_and_labels() {
        let buf = draw(120, 60, None, 0);
        let header = row_text(&buf, 0);
        assert!(header.contains("90"));
        assert!(header.trim_end().ends_with('5'));

        let all: String = (0..buf.area.height).map(|y| row_text(&buf, y)).collect::<Vec<_>>().join("\n");
        for needle in ["Primary", "Secondary", "Neutral", "Purple", "Magenta", "Grey"] {
            assert!(all.contains(needle), "missing {needle}");
        }
        assert!(all.contains("─"));
    }

    #[test]
    fn narrow_page_omits_shade_header() {
        let buf = draw(60, 20, None, 0);
        assert_eq!(row_text(&buf, 0).trim(), "Primary");
    }

    #[test]
    fn scrolling_shifts_content_up() {
        let top = draw(60, 20, None, 0);
        let scrolled = draw(60, 20, None, 2);
        assert_eq!(row_text(&top, 2), row_text(&scrolled, 0));
    }

    #[test]
    fn focused_label_takes_focus_style() {
        let palette = default_palette();
        let theme = catalog::default_truecolor().build(palette);
        let view = render_overview(palette, &noop);
        let layout = OverviewLayout::compute(&view, 120);
        let label = layout.groups[1].label;

        let buf = draw(120, 60, Some(1), 0);
        let painted = (label.x..label.right()).map(|x| &buf[(x, label.y)]).find(|cell| cell.symbol() != " ").unwrap();
        assert_eq!(painted.fg, theme.roles().focus);
    }
}
