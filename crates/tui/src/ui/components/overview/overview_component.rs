use std::cell::RefCell;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use tracing::debug;

use super::layout::OverviewLayout;
use super::overview::render_overview;
use super::overview_widget::OverviewWidget;
use super::palette_group::{Activation, LabelHandler};
use crate::app::{App, Effect};
use crate::ui::components::component::Component;

const WHEEL_LINES: i16 = 3;

/// Collects the groups activated while a render tree is alive.
#[derive(Debug, Default)]
struct ActivationLog {
    groups: RefCell<Vec<String>>,
}

impl LabelHandler for ActivationLog {
    fn on_activate(&self, event: &Activation, group: &str) {
        debug!(group, ?event, "group label activated");
        self.groups.borrow_mut().push(group.to_string());
    }
}

impl ActivationLog {
    fn into_effects(self) -> Vec<Effect> {
        self.groups.into_inner().into_iter().map(Effect::ShowDetails).collect()
    }
}

/// Page component hosting the palette overview.
#[derive(Debug, Default)]
pub struct OverviewComponent;

impl OverviewComponent {
    /// Rebuilds the render tree and fires the label at `index`.
    fn activate(&self, app: &App, index: usize, event: Activation) -> Vec<Effect> {
        let log = ActivationLog::default();
        {
            let view = render_overview(&app.palette, &log);
            if let Some(group) = view.group(index) {
                group.label.activate(&event);
            }
        }
        log.into_effects()
    }
}

impl Component for OverviewComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let group_count = app.group_count();
        let overview = &mut app.overview;
        match key.code {
            KeyCode::Tab | KeyCode::Down => overview.move_focus(1, group_count),
            KeyCode::BackTab | KeyCode::Up => overview.move_focus(-1, group_count),
            KeyCode::Enter => {
                if let Some(index) = overview.focused {
                    return self.activate(app, index, Activation::Key(key));
                }
            }
            KeyCode::PageDown => overview.scroll.scroll_pages(1),
            KeyCode::PageUp => overview.scroll.scroll_pages(-1),
            KeyCode::Char('j') => overview.scroll.scroll_lines(1),
            KeyCode::Char('k') => overview.scroll.scroll_lines(-1),
            KeyCode::Home | KeyCode::Char('g') => overview.scroll.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => overview.scroll.scroll_to_bottom(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(index) = app.overview.label_at_screen(mouse.column, mouse.row) else {
                    return Vec::new();
                };
                app.overview.focused = Some(index);
                self.activate(app, index, Activation::Mouse(mouse))
            }
            MouseEventKind::ScrollDown => {
                app.overview.scroll.scroll_lines(WHEEL_LINES);
                Vec::new()
            }
            MouseEventKind::ScrollUp => {
                app.overview.scroll.scroll_lines(-WHEEL_LINES);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let log = ActivationLog::default();
        let view = render_overview(&app.palette, &log);
        let layout = OverviewLayout::compute(&view, rect.width);

        let overview = &mut app.overview;
        overview.scroll.update(layout.height, rect.height);
        overview.viewport = rect;

        let widget = OverviewWidget::new(&view, &layout, app.theme.theme.as_ref(), app.theme.color_mode)
            .focused(overview.focused)
            .scroll(overview.scroll.offset());
        frame.render_widget(widget, rect);
        overview.layout = Some(layout);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::app::tests::test_app;

    fn draw(component: &mut OverviewComponent, app: &mut App, width: u16, height: u16) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| component.render(frame, frame.area(), app)).unwrap();
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn clicking_a_label_requests_its_details() {
        let mut app = test_app();
        let mut component = OverviewComponent;
        draw(&mut component, &mut app, 120, 50);

        let orange = app.overview.layout.as_ref().unwrap().groups[1].label;
        let effects = component.handle_mouse_events(&mut app, left_click(orange.x + 1, orange.y));
        assert_eq!(effects, vec![Effect::ShowDetails("orange".to_string())]);
        assert_eq!(app.overview.focused, Some(1));
    }

    #[test]
    fn clicking_a_swatch_does_nothing() {
        let mut app = test_app();
        let mut component = OverviewComponent;
        draw(&mut component, &mut app, 120, 50);

        let slot = app.overview.layout.as_ref().unwrap().groups[0].slots[3];
        assert!(component.handle_mouse_events(&mut app, left_click(slot.x, slot.y)).is_empty());
        assert_eq!(app.overview.focused, None);
    }

    #[test]
    fn enter_activates_the_focused_label() {
        let mut app = test_app();
        let mut component = OverviewComponent;
        draw(&mut component, &mut app, 60, 20);

        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        let back = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert!(component.handle_key_events(&mut app, back).is_empty());
        assert!(component.handle_key_events(&mut app, tab).is_empty());
        assert_eq!(app.overview.focused, Some(0));

        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            component.handle_key_events(&mut app, enter),
            vec![Effect::ShowDetails("purple".to_string())]
        );
    }

    #[test]
    fn enter_without_focus_is_ignored() {
        let mut app = test_app();
        let mut component = OverviewComponent;
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(component.handle_key_events(&mut app, enter).is_empty());
    }

    #[test]
    fn wheel_scrolls_within_bounds() {
        let mut app = test_app();
        let mut component = OverviewComponent;
        draw(&mut component, &mut app, 60, 20);

        let wheel = |kind| MouseEvent {
            kind,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        component.handle_mouse_events(&mut app, wheel(MouseEventKind::ScrollDown));
        assert_eq!(app.overview.scroll.offset(), 3);
        component.handle_mouse_events(&mut app, wheel(MouseEventKind::ScrollUp));
        component.handle_mouse_events(&mut app, wheel(MouseEventKind::ScrollUp));
        assert_eq!(app.overview.scroll.offset(), 0);
    }
}
