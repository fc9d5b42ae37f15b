//! Swatch list builder: one view-model per shade of a group.

use swatchbook_tokens::{ColorEntry, HexColor, PaletteTable, ShadeKey, TextTone, accessibility_label, text_color};
use tracing::debug;

/// Everything the swatch leaf needs to paint one shade.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchView {
    pub key: ShadeKey,
    pub color: ColorEntry,
    pub contrast_color: HexColor,
    pub accessibility_label: String,
    pub text_tone: TextTone,
    pub name: String,
    pub is_base: bool,
}

impl SwatchView {
    fn from_entry(key: ShadeKey, entry: &ColorEntry) -> Self {
        Self {
            key,
            color: entry.clone(),
            contrast_color: entry.contrast.clone(),
            accessibility_label: accessibility_label(entry, true),
            text_tone: text_color(&entry.contrast),
            name: entry.name.clone(),
            is_base: entry.base,
        }
    }
}

/// Swatches for `group_name`, darkest tier number first (90 → 5).
///
/// A group missing from the table yields an empty list.
pub fn build_swatch_list(table: &PaletteTable, group_name: &str) -> Vec<SwatchView> {
    let Some(group) = table.group(group_name) else {
        debug!(group = group_name, "palette has no such group; rendering no swatches");
        return Vec::new();
    };
    group.descending().map(|(key, entry)| SwatchView::from_entry(key, entry)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatchbook_tokens::{default_palette, parse_json};

    fn two_shade_purple() -> PaletteTable {
        parse_json(
            r##"{ "purple": {
                "90": { "hex": "#200", "contrast": "#fff", "name": "purple-90", "base": false },
                "10": { "hex": "#eef", "contrast": "#000", "name": "purple-10", "base": true }
            } }"##,
        )
        .unwrap()
    }

    #[test]
    fn orders_purple_ninety_before_ten() {
        let swatches = build_swatch_list(&two_shade_purple(), "purple");
        let names: Vec<&str> = swatches.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["purple-90", "purple-10"]);

        assert_eq!(swatches[0].text_tone, TextTone::Light);
        assert!(!swatches[0].is_base);
        assert_eq!(swatches[1].text_tone, TextTone::Dark);
        assert!(swatches[1].is_base);
        assert_eq!(swatches[1].contrast_color.as_str(), "#000");
    }

    #[test]
    fn every_default_group_is_sorted_descending() {
        let table = default_palette();
        for name in table.group_names() {
            let keys: Vec<u16> = build_swatch_list(table, name).iter().map(|s| s.key.value()).collect();
            let mut sorted = keys.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(keys, sorted, "{name} not descending");
            assert_eq!(keys.last(), Some(&5), "{name} should end at shade 5");
        }
    }

    #[test]
    fn missing_group_builds_nothing() {
        assert!(build_swatch_list(&two_shade_purple(), "teal").is_empty());
    }

    #[test]
    fn labels_are_compact_grades() {
        let swatches = build_swatch_list(&two_shade_purple(), "purple");
        assert_eq!(swatches[0].accessibility_label, "AAA");
    }
}
