//! Single-line strip with key hints on the left and the status message on the right.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers::build_hint_spans;

const OVERVIEW_HINTS: &[(&str, &str)] = &[
    ("Tab", " focus  "),
    ("Enter", " details  "),
    ("PgUp/PgDn", " scroll  "),
    ("t", " theme  "),
    ("q", " quit"),
];

const DETAILS_HINTS: &[(&str, &str)] = &[
    ("↑/↓", " select  "),
    ("c", " copy group  "),
    ("y", " copy hex  "),
    ("Esc", " close"),
];

#[derive(Debug, Default)]
pub struct HintBarComponent;

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme: &dyn Theme = app.theme.theme.as_ref();
        let hints = if app.details.is_some() { DETAILS_HINTS } else { OVERVIEW_HINTS };

        let status_width = app.status.as_ref().map_or(0, |status| status.text.chars().count() as u16);
        let [hints_area, status_area] = Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(rect);

        let line = Line::from(build_hint_spans(theme, hints));
        frame.render_widget(Paragraph::new(line).style(theme.text_muted_style()), hints_area);

        if let Some(status) = app.status.as_ref() {
            let style = if status.is_error {
                theme.status_error()
            } else {
                theme.status_success()
            };
            let status_line = Line::from(Span::styled(status.text.as_str(), style)).alignment(Alignment::Right);
            frame.render_widget(Paragraph::new(status_line), status_area);
        }
    }
}
