//! Legibility metadata for swatches: WCAG grade labels and text tone.

use std::fmt;

use serde::Serialize;

use crate::color::{HexColor, WCAG_AA, WCAG_AA_LARGE, WCAG_AAA};
use crate::palette::ColorEntry;

/// WCAG 2.x conformance level reached by a foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WcagGrade {
    Fail,
    AaLarge,
    Aa,
    Aaa,
}

impl WcagGrade {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= WCAG_AAA {
            WcagGrade::Aaa
        } else if ratio >= WCAG_AA {
            WcagGrade::Aa
        } else if ratio >= WCAG_AA_LARGE {
            WcagGrade::AaLarge
        } else {
            WcagGrade::Fail
        }
    }

    /// Short badge shown on swatches.
    pub fn badge(self) -> &'static str {
        match self {
            WcagGrade::Aaa => "AAA",
            WcagGrade::Aa => "AA",
            WcagGrade::AaLarge => "AA18",
            WcagGrade::Fail => "✕",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WcagGrade::Aaa => "passes AAA",
            WcagGrade::Aa => "passes AA",
            WcagGrade::AaLarge => "passes AA for large text only",
            WcagGrade::Fail => "fails WCAG contrast",
        }
    }
}

impl fmt::Display for WcagGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.badge())
    }
}

/// Foreground family used for text painted on a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTone {
    Light,
    Dark,
}

impl TextTone {
    /// Concrete RGB for this tone.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            TextTone::Light => HexColor::WHITE,
            TextTone::Dark => HexColor::BLACK,
        }
    }
}

/// Picks the text tone matching an entry's contrast color: a light contrast
/// color means light text.
pub fn text_color(contrast: &HexColor) -> TextTone {
    if contrast.luminance() > 0.5 { TextTone::Light } else { TextTone::Dark }
}

/// Accessibility label for an entry.
///
/// Inside the palette grid (`in_palette`) the label is the compact grade
/// badge; elsewhere it is a full sentence naming the ratio and the
/// foreground it was measured against.
pub fn accessibility_label(entry: &ColorEntry, in_palette: bool) -> String {
    let ratio = entry.contrast_ratio();
    let grade = WcagGrade::from_ratio(ratio);
    if in_palette {
        return grade.badge().to_string();
    }
    format!(
        "{}: {} text on {} {} ({:.2}:1)",
        entry.name,
        entry.contrast,
        entry.hex,
        grade.description(),
        ratio
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(hex: &str, contrast: &str) -> ColorEntry {
        ColorEntry {
            hex: HexColor::parse(hex).unwrap(),
            contrast: HexColor::parse(contrast).unwrap(),
            name: "sample".to_string(),
            base: false,
        }
    }

    #[test]
    fn grades_follow_wcag_thresholds() {
        assert_eq!(WcagGrade::from_ratio(21.0), WcagGrade::Aaa);
        assert_eq!(WcagGrade::from_ratio(7.0), WcagGrade::Aaa);
        assert_eq!(WcagGrade::from_ratio(4.5), WcagGrade::Aa);
        assert_eq!(WcagGrade::from_ratio(3.2), WcagGrade::AaLarge);
        assert_eq!(WcagGrade::from_ratio(1.4), WcagGrade::Fail);
    }

    #[test]
    fn text_tone_follows_contrast_color() {
        assert_eq!(text_color(&HexColor::parse("#fff").unwrap()), TextTone::Light);
        assert_eq!(text_color(&HexColor::parse("#000").unwrap()), TextTone::Dark);
        assert_eq!(text_color(&HexColor::parse("#232129").unwrap()), TextTone::Dark);
    }

    #[test]
    fn compact_label_is_badge_and_full_label_names_ratio() {
        let dark = entry("#200", "#fff");
        assert_eq!(accessibility_label(&dark, true), "AAA");

        let full = accessibility_label(&dark, false);
        assert!(full.starts_with("sample: #fff text on #200 passes AAA ("), "{full}");
        assert!(full.ends_with(":1)"), "{full}");

        let washed_out = entry("#eee", "#fff");
        assert_eq!(accessibility_label(&washed_out, true), "✕");
    }
}
