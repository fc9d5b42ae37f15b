//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode, mouse capture).
//! - Block on `crossterm::event::read()` and route input through `MainView`.
//! - Apply returned `Effect`s: navigation on `App`, the rest via `cmd`.
//! - Redraw only after input that can change what is on screen.
//!
//! Everything runs on the calling thread; label handlers fire synchronously
//! inside the input handlers.

use std::io::Stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use swatchbook_tokens::PaletteTable;
use swatchbook_util::UserPreferences;
use tracing::debug;

use crate::RunOptions;
use crate::app::{App, Effect};
use crate::cmd;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut CrosstermTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Routes one input event. Returns the effects plus whether a redraw is needed.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> (Vec<Effect>, bool) {
    match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            if is_ctrl_c(&key_event) {
                return (vec![Effect::Quit], false);
            }
            (main_view.handle_key_events(app, key_event), true)
        }
        Event::Mouse(mouse_event) if mouse_event.kind != MouseEventKind::Moved => (main_view.handle_mouse_events(app, mouse_event), true),
        Event::Resize(width, height) => {
            debug!(width, height, "terminal resized");
            (Vec::new(), true)
        }
        Event::Key(_) | Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => (Vec::new(), false),
    }
}

/// Applies navigation effects to `app`, leaving the rest in `effects`.
fn handle_navigation_effects(app: &mut App, effects: &mut Vec<Effect>) {
    let navigation_effects = effects
        .extract_if(.., |effect| {
            matches!(effect, Effect::ShowDetails(_) | Effect::CloseDetails | Effect::CycleTheme | Effect::Quit)
        })
        .collect::<Vec<Effect>>();

    for effect in navigation_effects {
        match effect {
            Effect::ShowDetails(group) => app.open_details(group),
            Effect::CloseDetails => app.close_details(),
            Effect::CycleTheme => app.cycle_theme(),
            Effect::Quit => app.should_quit = true,
            Effect::CopyToClipboard { .. } => {}
        }
    }
}

fn process_effects(app: &mut App, mut effects: Vec<Effect>) {
    if effects.is_empty() {
        return;
    }
    handle_navigation_effects(app, &mut effects);
    cmd::run_cmds(app, cmd::from_effects(effects));
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop until quit, and restores the terminal even when the loop fails.
pub fn run_app(palette: Arc<PaletteTable>, options: RunOptions) -> Result<()> {
    let preferences = options.preferences.unwrap_or_else(UserPreferences::ephemeral);
    let saved_theme = preferences.preferred_theme();
    let loaded_theme = theme::load(&palette, options.theme.as_deref(), saved_theme.as_deref());
    debug!(theme = loaded_theme.definition.id, color_mode = ?loaded_theme.color_mode, "starting overview");

    let mut app = App::new(palette, loaded_theme, preferences);
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    let outcome = event_loop(&mut terminal, &mut app, &mut main_view);
    cleanup_terminal(&mut terminal)?;
    outcome
}

fn event_loop(terminal: &mut CrosstermTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    render(terminal, app, main_view)?;
    while !app.should_quit {
        let input_event = event::read().context("failed to read terminal input")?;
        let (effects, needs_render) = handle_input_event(app, main_view, input_event);
        let had_effects = !effects.is_empty();
        process_effects(app, effects);

        if !app.should_quit && (needs_render || had_effects) {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}
