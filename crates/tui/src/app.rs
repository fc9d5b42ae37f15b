//! Application state for the Swatchbook TUI.
//!
//! `App` owns the loaded palette, the active chrome theme, and the
//! interaction state of each component. Components mutate their own slice
//! directly and request anything broader through [`Effect`]s.

use std::sync::Arc;

use swatchbook_tokens::PaletteTable;
use swatchbook_util::UserPreferences;
use tracing::{debug, warn};

use crate::ui::components::details::DetailsState;
use crate::ui::components::overview::{OverviewState, SECTIONS};
use crate::ui::theme::{self, ColorMode, LoadedTheme, catalog};

/// Side effects requested by components and applied by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the details panel for a group.
    ShowDetails(String),
    CloseDetails,
    /// Write `text` to the system clipboard; `label` names it in the status line.
    CopyToClipboard { label: String, text: String },
    /// Switch to the next truecolor theme and remember the choice.
    CycleTheme,
    Quit,
}

/// Message shown at the right end of the hint bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug)]
pub struct App {
    /// Read-only after load.
    pub palette: Arc<PaletteTable>,
    pub theme: LoadedTheme,
    pub overview: OverviewState,
    /// Open details panel, if any.
    pub details: Option<DetailsState>,
    pub status: Option<StatusLine>,
    pub should_quit: bool,
    preferences: UserPreferences,
}

impl App {
    pub fn new(palette: Arc<PaletteTable>, theme: LoadedTheme, preferences: UserPreferences) -> Self {
        Self {
            palette,
            theme,
            overview: OverviewState::default(),
            details: None,
            status: None,
            should_quit: false,
            preferences,
        }
    }

    /// Number of group labels on the overview page.
    pub fn group_count(&self) -> usize {
        SECTIONS.iter().map(|(_, groups)| groups.len()).sum()
    }

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusLine {
            text: text.into(),
            is_error,
        });
    }

    pub fn open_details(&mut self, group: String) {
        debug!(group = %group, "opening group details");
        self.details = Some(DetailsState::new(group));
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    /// Rotates through the truecolor themes and persists the selection.
    ///
    /// ANSI-only terminals are pinned to the fallback theme.
    pub fn cycle_theme(&mut self) {
        if self.theme.color_mode == ColorMode::Ansi256 {
            self.set_status("Theme switching needs a truecolor terminal", true);
            return;
        }

        let candidates: Vec<_> = catalog::all().iter().filter(|definition| !definition.is_ansi_fallback).collect();
        let Some(next) = candidates
            .iter()
            .position(|definition| definition.id == self.theme.definition.id)
            .map_or(candidates.first(), |index| candidates.get((index + 1) % candidates.len()))
            .copied()
        else {
            return;
        };

        self.theme = theme::load_definition(next, &self.palette, self.theme.color_mode);
        match self.preferences.set_preferred_theme(Some(next.id.to_string())) {
            Ok(()) => self.set_status(format!("Theme: {}", next.label), false),
            Err(error) => {
                warn!(%error, theme = next.id, "failed to persist theme preference");
                self.set_status(format!("Theme: {} (not saved)", next.label), true);
            }
        }
    }
}
