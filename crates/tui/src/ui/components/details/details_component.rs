//! Modal listing every shade of the activated group.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use heck::ToTitleCase;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use swatchbook_tokens::{WcagGrade, accessibility_label};

use crate::app::{App, Effect};
use crate::ui::components::component::Component;
use crate::ui::components::overview::swatch::BASE_MARKER;
use crate::ui::components::overview::{SwatchView, build_swatch_list};
use crate::ui::theme::{ColorMode, Theme};
use crate::ui::theme::theme_helpers::{self as th, centered_rect};

const MODAL_WIDTH: u16 = 76;
/// Border, header row, footer, and padding around the table body.
const MODAL_CHROME_HEIGHT: u16 = 7;

/// Clipboard text for a whole group: one `name: hex` line per shade.
pub fn group_copy_payload(swatches: &[SwatchView]) -> String {
    swatches
        .iter()
        .map(|swatch| format!("{}: {}", swatch.name, swatch.color.hex))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Default)]
pub struct DetailsComponent;

impl Component for DetailsComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let Some(details) = app.details.as_mut() else {
            return Vec::new();
        };
        let swatches = build_swatch_list(&app.palette, &details.group);
        match key.code {
            KeyCode::Esc => return vec![Effect::CloseDetails],
            KeyCode::Down | KeyCode::Char('j') => details.select_by(1, swatches.len()),
            KeyCode::Up | KeyCode::Char('k') => details.select_by(-1, swatches.len()),
            KeyCode::Home => details.selected = 0,
            KeyCode::End => details.select_by(isize::MAX / 2, swatches.len()),
            KeyCode::Char('c') if !swatches.is_empty() => {
                return vec![Effect::CopyToClipboard {
                    label: format!("{} shades", details.group.to_title_case()),
                    text: group_copy_payload(&swatches),
                }];
            }
            KeyCode::Char('y') => {
                if let Some(swatch) = swatches.get(details.selected) {
                    return vec![Effect::CopyToClipboard {
                        label: swatch.name.clone(),
                        text: swatch.color.hex.to_string(),
                    }];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let Some(details) = app.details.as_mut() else {
            return Vec::new();
        };
        let len = app.palette.group(&details.group).map_or(0, |group| group.len());
        match mouse.kind {
            MouseEventKind::ScrollDown => details.select_by(1, len),
            MouseEventKind::ScrollUp => details.select_by(-1, len),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let Some(details) = app.details.as_ref() else {
            return;
        };
        let theme = app.theme.theme.as_ref();
        let swatches = build_swatch_list(&app.palette, &details.group);

        let height = (swatches.len() as u16).saturating_add(MODAL_CHROME_HEIGHT);
        let rect = centered_rect(area, MODAL_WIDTH, height);
        frame.render_widget(Clear, rect);

        let title = format!(" {} · {} shades ", details.group.to_title_case(), swatches.len());
        let block = th::block(theme, Some(&title), true).style(theme.modal_background_style().fg(theme.roles().text));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        if swatches.is_empty() {
            let message = format!("The palette defines no shades for \"{}\".", details.group);
            frame.render_widget(Paragraph::new(message).style(theme.text_muted_style()), inner);
            return;
        }

        let [table_area, footer_area] = Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);
        let table = shade_table(theme, &swatches, app.theme.color_mode);
        let mut table_state = TableState::default().with_selected(Some(details.selected));
        frame.render_stateful_widget(table, table_area, &mut table_state);

        if let Some(selected) = swatches.get(details.selected) {
            let sentence = accessibility_label(&selected.color, false);
            let footer = Paragraph::new(sentence).style(theme.text_secondary_style()).wrap(Wrap { trim: true });
            frame.render_widget(footer, footer_area);
        }
    }
}

fn shade_table<'a>(theme: &dyn Theme, swatches: &'a [SwatchView], color_mode: ColorMode) -> Table<'a> {
    let header = Row::new(["", "Shade", "Name", "Hex", "Text", "Ratio", "WCAG"])
        .style(theme.text_muted_style().add_modifier(Modifier::BOLD));

    let rows = swatches.iter().map(|swatch| {
        let ratio = swatch.color.contrast_ratio();
        let grade = WcagGrade::from_ratio(ratio);
        let grade_style = if grade == WcagGrade::Fail {
            theme.status_error()
        } else {
            theme.status_success()
        };
        let key = if swatch.is_base {
            format!("{} {BASE_MARKER}", swatch.key)
        } else {
            swatch.key.to_string()
        };
        Row::new(vec![
            Cell::from("    ").style(Style::default().bg(color_mode.color(swatch.color.hex.rgb()))),
            Cell::from(key),
            Cell::from(swatch.name.as_str()),
            Cell::from(swatch.color.hex.as_str()),
            Cell::from(swatch.contrast_color.as_str()),
            Cell::from(format!("{ratio:.2}:1")),
            Cell::from(Line::from(Span::styled(grade.badge(), grade_style))),
        ])
        .style(theme.text_primary_style())
    });

    Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Min(12),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .column_spacing(1)
    .row_highlight_style(theme.selection_style())
    .highlight_symbol("▶ ")
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use swatchbook_tokens::default_palette;

    use super::*;
    use crate::app::tests::test_app;
    use crate::ui::components::details::DetailsState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| DetailsComponent.render(frame, frame.area(), app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn payload_lists_every_shade_in_order() {
        let swatches = build_swatch_list(default_palette(), "purple");
        let payload = group_copy_payload(&swatches);
        let lines: Vec<&str> = payload.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "purple-90: #1d1038");
        assert!(lines[9].starts_with("purple-5: "));
    }

    #[test]
    fn renders_rows_and_the_selected_sentence() {
        let mut app = test_app();
        app.details = Some(DetailsState::new("purple"));
        let text = screen_text(&mut app);
        assert!(text.contains("Purple · 10 shades"));
        assert!(text.contains("purple-90"));
        assert!(text.contains("#1d1038"));
        assert!(text.contains("purple-90: #ffffff text on #1d1038"));
    }

    #[test]
    fn absent_group_renders_a_notice() {
        let mut app = test_app();
        app.details = Some(DetailsState::new("chartreuse"));
        let text = screen_text(&mut app);
        assert!(text.contains("no shades"));
    }

    #[test]
    fn keys_select_copy_and_close() {
        let mut app = test_app();
        app.details = Some(DetailsState::new("purple"));
        let mut component = DetailsComponent;

        assert!(component.handle_key_events(&mut app, key(KeyCode::Down)).is_empty());
        assert_eq!(
            component.handle_key_events(&mut app, key(KeyCode::Char('y'))),
            vec![Effect::CopyToClipboard {
                label: "purple-80".to_string(),
                text: build_swatch_list(default_palette(), "purple")[1].color.hex.to_string(),
            }]
        );

        let copy = component.handle_key_events(&mut app, key(KeyCode::Char('c')));
        assert!(matches!(&copy[..], [Effect::CopyToClipboard { label, .. }] if label == "Purple shades"));

        assert_eq!(component.handle_key_events(&mut app, key(KeyCode::Esc)), vec![Effect::CloseDetails]);
    }
}
