//! Chrome themes derived from the loaded palette.
//!
//! Rather than hard-coding a second set of colors, every theme maps semantic
//! roles onto shades of the palette being browsed. Missing shades fall back to
//! neutral constants so a partial token file still yields a usable UI.

use ratatui::style::Color;
use swatchbook_tokens::{PaletteTable, ShadeKey};

use super::roles::{Theme, ThemeRoles};
use super::theme_helpers::rgb_to_ansi256;

/// Describes a selectable theme.
#[derive(Clone, Copy)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn(&PaletteTable) -> ThemeRoles,
}

impl std::fmt::Debug for ThemeDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeDefinition")
            .field("id", &self.id)
            .field("is_ansi_fallback", &self.is_ansi_fallback)
            .finish_non_exhaustive()
    }
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition against a palette.
    pub fn build(&self, palette: &PaletteTable) -> Box<dyn Theme> {
        Box::new(PaletteTheme {
            roles: (self.factory)(palette),
        })
    }
}

/// Theme whose roles were resolved from palette shades.
#[derive(Debug, Clone)]
pub struct PaletteTheme {
    roles: ThemeRoles,
}

impl Theme for PaletteTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Ordered list of selectable themes.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "swatch_dark",
        label: "Swatch Dark",
        aliases: &["dark", "swatch-dark"],
        is_ansi_fallback: false,
        factory: dark_roles,
    },
    ThemeDefinition {
        id: "swatch_light",
        label: "Swatch Light",
        aliases: &["light", "swatch-light"],
        is_ansi_fallback: false,
        factory: light_roles,
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        aliases: &["ansi", "256"],
        is_ansi_fallback: true,
        factory: ansi_roles,
    },
];

/// Looks up `group`/`shade` in the palette as a truecolor value.
fn shade(palette: &PaletteTable, group: &str, shade: u16, fallback: Color) -> Color {
    palette
        .group(group)
        .and_then(|colors| colors.get(ShadeKey::new(shade)))
        .map(|entry| {
            let (r, g, b) = entry.hex.rgb();
            Color::Rgb(r, g, b)
        })
        .unwrap_or(fallback)
}

fn dark_roles(palette: &PaletteTable) -> ThemeRoles {
    ThemeRoles {
        background: shade(palette, "grey", 90, Color::Rgb(0x23, 0x21, 0x29)),
        surface: shade(palette, "grey", 90, Color::Rgb(0x23, 0x21, 0x29)),
        border: shade(palette, "grey", 70, Color::Rgb(0x48, 0x43, 0x4F)),
        divider: shade(palette, "grey", 60, Color::Rgb(0x63, 0x5E, 0x69)),

        text: shade(palette, "grey", 5, Color::Rgb(0xFB, 0xFB, 0xFB)),
        text_secondary: shade(palette, "grey", 20, Color::Rgb(0xF0, 0xF0, 0xF2)),
        text_muted: shade(palette, "grey", 40, Color::Rgb(0xB7, 0xB5, 0xBD)),

        accent_primary: shade(palette, "purple", 30, Color::Rgb(0xB1, 0x7A, 0xCC)),
        focus: shade(palette, "purple", 20, Color::Rgb(0xD9, 0xBA, 0xE8)),

        success: shade(palette, "green", 30, Color::Rgb(0x7C, 0xCF, 0x8D)),
        error: shade(palette, "red", 30, Color::Rgb(0xEE, 0x7F, 0x89)),

        selection_bg: shade(palette, "purple", 70, Color::Rgb(0x45, 0x24, 0x75)),
        selection_fg: shade(palette, "grey", 5, Color::Rgb(0xFB, 0xFB, 0xFB)),

        modal_bg: shade(palette, "grey", 80, Color::Rgb(0x36, 0x31, 0x3D)),
    }
}

fn light_roles(palette: &PaletteTable) -> ThemeRoles {
    ThemeRoles {
        background: shade(palette, "grey", 5, Color::Rgb(0xFB, 0xFB, 0xFB)),
        surface: shade(palette, "grey", 5, Color::Rgb(0xFB, 0xFB, 0xFB)),
        border: shade(palette, "grey", 30, Color::Rgb(0xD9, 0xD7, 0xE0)),
        divider: shade(palette, "grey", 30, Color::Rgb(0xD9, 0xD7, 0xE0)),

        text: shade(palette, "grey", 90, Color::Rgb(0x23, 0x21, 0x29)),
        text_secondary: shade(palette, "grey", 70, Color::Rgb(0x48, 0x43, 0x4F)),
        text_muted: shade(palette, "grey", 50, Color::Rgb(0x78, 0x75, 0x7A)),

        accent_primary: shade(palette, "purple", 60, Color::Rgb(0x54, 0x2C, 0x85)),
        focus: shade(palette, "purple", 50, Color::Rgb(0x66, 0x33, 0x99)),

        success: shade(palette, "green", 60, Color::Rgb(0x22, 0x8A, 0x22)),
        error: shade(palette, "red", 60, Color::Rgb(0xB8, 0x00, 0x0F)),

        selection_bg: shade(palette, "purple", 10, Color::Rgb(0xF1, 0xDE, 0xFA)),
        selection_fg: shade(palette, "grey", 90, Color::Rgb(0x23, 0x21, 0x29)),

        modal_bg: shade(palette, "grey", 10, Color::Rgb(0xF5, 0xF5, 0xF5)),
    }
}

/// Dark roles quantized to the xterm-256 palette.
fn ansi_roles(palette: &PaletteTable) -> ThemeRoles {
    let quantize = |color: Color| match color {
        Color::Rgb(r, g, b) => Color::Indexed(rgb_to_ansi256(r, g, b)),
        other => other,
    };
    let dark = dark_roles(palette);
    ThemeRoles {
        background: quantize(dark.background),
        surface: quantize(dark.surface),
        border: quantize(dark.border),
        divider: quantize(dark.divider),
        text: quantize(dark.text),
        text_secondary: quantize(dark.text_secondary),
        text_muted: quantize(dark.text_muted),
        accent_primary: quantize(dark.accent_primary),
        focus: quantize(dark.focus),
        success: quantize(dark.success),
        error: quantize(dark.error),
        selection_bg: quantize(dark.selection_bg),
        selection_fg: quantize(dark.selection_fg),
        modal_bg: quantize(dark.modal_bg),
    }
}

/// Iterate over all available definitions.
pub fn all() -> &'static [ThemeDefinition] {
    THEME_DEFINITIONS
}

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let normalized = name.trim().to_ascii_lowercase();
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(&normalized) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(&normalized))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatchbook_tokens::default_palette;

    #[test]
    fn resolves_ids_and_aliases() {
        assert_eq!(resolve("swatch_light").map(|d| d.id), Some("swatch_light"));
        assert_eq!(resolve(" Dark ").map(|d| d.id), Some("swatch_dark"));
        assert_eq!(resolve("256").map(|d| d.id), Some("ansi256"));
        assert!(resolve("dracula").is_none());
        assert!(default_ansi().is_ansi_fallback);
        assert!(!default_truecolor().is_ansi_fallback);
    }

    #[test]
    fn roles_come_from_palette_shades() {
        let theme = default_truecolor().build(default_palette());
        assert_eq!(theme.roles().focus, Color::Rgb(0xD9, 0xBA, 0xE8));
    }

    #[test]
    fn empty_palette_uses_fallbacks_and_ansi_roles_are_indexed() {
        let empty = PaletteTable::default();
        let light = resolve("light").unwrap().build(&empty);
        assert_eq!(light.roles().text, Color::Rgb(0x23, 0x21, 0x29));

        let ansi = default_ansi().build(&empty);
        assert!(matches!(ansi.roles().background, Color::Indexed(_)));
    }
}
