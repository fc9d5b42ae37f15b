//! Theme styling for the TUI chrome.
//!
//! Themes are resolved against the loaded palette (see [`catalog`]), so the
//! headings, borders, and focus cues are drawn from the same tokens the
//! overview displays. Terminal capability detection decides between
//! truecolor swatches and the xterm-256 fallback.

use std::env;

use ratatui::style::Color;
use swatchbook_tokens::PaletteTable;
use tracing::debug;

pub mod catalog;
pub mod roles;
pub mod theme_helpers;

pub use catalog::ThemeDefinition;
pub use roles::Theme;

/// Environment variable naming a theme id or alias.
pub const THEME_ENV: &str = "SWATCHBOOK_THEME";

/// How swatch fills are emitted to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Truecolor,
    Ansi256,
}

impl ColorMode {
    /// Terminal color for an RGB token value.
    pub fn color(self, (r, g, b): (u8, u8, u8)) -> Color {
        match self {
            ColorMode::Truecolor => Color::Rgb(r, g, b),
            ColorMode::Ansi256 => Color::Indexed(theme_helpers::rgb_to_ansi256(r, g, b)),
        }
    }
}

/// Theme plus metadata describing how it was selected.
#[derive(Debug)]
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
    pub color_mode: ColorMode,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition, palette: &PaletteTable, color_mode: ColorMode) -> Self {
        Self {
            definition,
            theme: definition.build(palette),
            color_mode,
        }
    }
}

/// Selects a theme from explicit overrides, user preference, and terminal capability.
///
/// Precedence: `preferred_theme` (CLI flag), `SWATCHBOOK_THEME`, then the
/// persisted preference passed as `saved_theme`. ANSI-only terminals always
/// get the fallback palette.
pub fn load(palette: &PaletteTable, preferred_theme: Option<&str>, saved_theme: Option<&str>) -> LoadedTheme {
    let color_mode = detect_color_mode();
    if matches!(color_mode, ColorMode::Ansi256) {
        debug!("ANSI-only terminal detected; ignoring theme overrides and forcing fallback palette.");
        return LoadedTheme::from_definition(catalog::default_ansi(), palette, color_mode);
    }

    let env_theme = env::var(THEME_ENV).ok();
    let candidates = [preferred_theme, env_theme.as_deref(), saved_theme];
    for name in candidates.into_iter().flatten() {
        if let Some(definition) = catalog::resolve(name) {
            debug!(theme = definition.id, "theme selected");
            return LoadedTheme::from_definition(definition, palette, color_mode);
        }
        debug!(requested = name, "unknown theme; trying next source");
    }

    LoadedTheme::from_definition(catalog::default_truecolor(), palette, color_mode)
}

/// Builds a theme without consulting the environment.
pub fn load_definition(definition: &'static ThemeDefinition, palette: &PaletteTable, color_mode: ColorMode) -> LoadedTheme {
    LoadedTheme::from_definition(definition, palette, color_mode)
}

fn detect_color_mode() -> ColorMode {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    if env::var("TUI_FORCE_TRUECOLOR")
        .ok()
        .map(|value| is_truthy(value.trim()))
        .unwrap_or(false)
    {
        return ColorMode::Truecolor;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorMode::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorMode::Truecolor;
    }

    ColorMode::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorMode> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorMode::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorMode::Ansi256),
        _ => None,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_color_modes() {
        assert_eq!(parse_color_mode("24BIT"), Some(ColorMode::Truecolor));
        assert_eq!(parse_color_mode("8bit"), Some(ColorMode::Ansi256));
        assert_eq!(parse_color_mode("mono"), None);
    }

    #[test]
    fn color_mode_quantizes_only_in_ansi() {
        assert_eq!(ColorMode::Truecolor.color((1, 2, 3)), Color::Rgb(1, 2, 3));
        assert_eq!(ColorMode::Ansi256.color((255, 0, 0)), Color::Indexed(196));
    }
}
