//! Hex color parsing and WCAG 2.x relative luminance / contrast ratio.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::loader::TokenError;

/// Contrast ratio required for normal text at level AA.
pub const WCAG_AA: f64 = 4.5;
/// Contrast ratio required for normal text at level AAA.
pub const WCAG_AAA: f64 = 7.0;
/// Contrast ratio required for large text (18pt, or 14pt bold) at level AA.
pub const WCAG_AA_LARGE: f64 = 3.0;

/// An sRGB color parsed from `#rgb` or `#rrggbb` notation.
///
/// The source text is kept so views print exactly what the token file says.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    source: String,
    rgb: (u8, u8, u8),
}

impl HexColor {
    pub const WHITE: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);
    pub const BLACK: (u8, u8, u8) = (0x00, 0x00, 0x00);

    /// Parses `#rgb` or `#rrggbb` (the leading `#` is optional, case-insensitive).
    pub fn parse(input: &str) -> Result<Self, TokenError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || TokenError::InvalidHex(input.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let rgb = match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, ch) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = ch.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = nibble << 4 | nibble;
                }
                (channels[0], channels[1], channels[2])
            }
            6 => {
                let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());
                (channel(0..2)?, channel(2..4)?, channel(4..6)?)
            }
            _ => return Err(invalid()),
        };

        Ok(Self {
            source: trimmed.to_string(),
            rgb,
        })
    }

    /// Builds a color from channels; the source text is the lowercase `#rrggbb` form.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            source: format!("#{r:02x}{g:02x}{b:02x}"),
            rgb: (r, g, b),
        }
    }

    /// The text this color was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }

    /// Normalized lowercase `#rrggbb`.
    pub fn to_hex6(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn luminance(&self) -> f64 {
        relative_luminance(self.rgb)
    }

    pub fn contrast_with(&self, other: &HexColor) -> f64 {
        contrast_ratio(self.rgb, other.rgb)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for HexColor {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        HexColor::parse(&raw).map_err(serde::de::Error::custom)
    }
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.040_45 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// WCAG relative luminance of an sRGB color, in `0.0..=1.0`.
pub fn relative_luminance((r, g, b): (u8, u8, u8)) -> f64 {
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// WCAG contrast ratio between two colors, in `1.0..=21.0`. Symmetric.
pub fn contrast_ratio(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
