use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::components::{Component, DetailsComponent, HintBarComponent, OverviewComponent};
use super::theme::Theme;
use crate::app::{App, Effect};

/// Root view: title line, the overview page, the hint bar, and the details
/// panel as a modal on top when a group is open.
#[derive(Debug, Default)]
pub struct MainView {
    pub overview_view: OverviewComponent,
    pub details_view: DetailsComponent,
    pub hint_bar_view: HintBarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.details.is_some() {
            return self.details_view.handle_key_events(app, key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
            KeyCode::Char('t') => vec![Effect::CycleTheme],
            _ => self.overview_view.handle_key_events(app, key),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.details.is_some() {
            return self.details_view.handle_mouse_events(app, mouse);
        }
        self.overview_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.theme.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let [title_area, content_area, hints_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)]).areas(area);

        frame.render_widget(Paragraph::new(title_line(app)), title_area);
        self.overview_view.render(frame, content_area, app);
        self.hint_bar_view.render(frame, hints_area, app);

        if app.details.is_some() {
            render_overlay(frame, app);
            self.details_view.render(frame, content_area, app);
        }
    }
}

fn title_line(app: &App) -> Line<'static> {
    let theme: &dyn Theme = app.theme.theme.as_ref();
    Line::from(vec![
        Span::styled(" Swatchbook", theme.heading_style()),
        Span::styled(
            format!("  {} groups · {} shades · {}", app.palette.len(), app.palette.shade_count(), app.theme.definition.label),
            theme.text_muted_style(),
        ),
    ])
}

/// Dims everything behind the details panel.
fn render_overlay(frame: &mut Frame, app: &App) {
    frame.render_widget(Block::default().style(app.theme.theme.modal_background_style()).dim(), frame.area());
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::app::tests::test_app;
    use crate::ui::components::details::DetailsState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn draw(view: &mut MainView, app: &mut App) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| view.render(frame, frame.area(), app)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn escape_quits_only_without_details() {
        let mut app = test_app();
        let mut view = MainView::new();
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Esc)), vec![Effect::Quit]);

        app.details = Some(DetailsState::new("teal"));
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Esc)), vec![Effect::CloseDetails]);
        assert!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))).is_empty());
    }

    #[test]
    fn title_and_hints_frame_the_overview() {
        let mut app = test_app();
        let mut view = MainView::new();
        let buffer = draw(&mut view, &mut app);
        let row = |y: u16| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect::<String>();
        assert!(row(0).contains("Swatchbook"));
        assert!(row(0).contains("9 groups"));
        assert!(row(39).contains("details"));
    }

    #[test]
    fn click_through_main_view_reaches_the_overview() {
        let mut app = test_app();
        let mut view = MainView::new();
        draw(&mut view, &mut app);

        let label = app.overview.layout.as_ref().unwrap().groups[0].label;
        let viewport = app.overview.viewport;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: viewport.x + label.x,
            row: viewport.y + label.y,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(view.handle_mouse_events(&mut app, click), vec![Effect::ShowDetails("purple".to_string())]);
    }
}
