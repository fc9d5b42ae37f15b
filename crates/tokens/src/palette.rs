//! The palette table: color groups keyed by name, shades keyed by number.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::color::HexColor;
use crate::loader::TokenError;

/// Numeric shade tier within a color group (`5`, `10`, ..., `90`).
///
/// Source files key shades by strings; they are parsed once on load so that
/// ordering is numeric ("90" sorts above "5").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct ShadeKey(u16);

impl ShadeKey {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u16 {
        self.0
    }
}

impl FromStr for ShadeKey {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .map(ShadeKey)
            .map_err(|_| TokenError::InvalidShadeKey(s.to_string()))
    }
}

impl TryFrom<String> for ShadeKey {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// YAML files may key shades with bare integers, JSON always with strings.
impl<'de> Deserialize<'de> for ShadeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadeKeyVisitor;

        impl Visitor<'_> for ShadeKeyVisitor {
            type Value = ShadeKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a numeric shade key such as \"90\" or 90")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<ShadeKey, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<ShadeKey, E> {
                u16::try_from(value)
                    .map(ShadeKey)
                    .map_err(|_| E::custom(TokenError::InvalidShadeKey(value.to_string())))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<ShadeKey, E> {
                u16::try_from(value)
                    .map(ShadeKey)
                    .map_err(|_| E::custom(TokenError::InvalidShadeKey(value.to_string())))
            }
        }

        deserializer.deserialize_any(ShadeKeyVisitor)
    }
}

impl From<ShadeKey> for String {
    fn from(key: ShadeKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One shade of a color group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Fill color of the swatch.
    pub hex: HexColor,
    /// Foreground used to judge legibility on top of `hex`.
    pub contrast: HexColor,
    /// Human label, e.g. `purple-60`.
    pub name: String,
    /// Marks the canonical reference shade of the group.
    #[serde(default)]
    pub base: bool,
}

impl ColorEntry {
    /// WCAG contrast ratio between the fill and its contrast color.
    pub fn contrast_ratio(&self) -> f64 {
        self.hex.contrast_with(&self.contrast)
    }
}

/// Shades of one hue. Iteration order is ascending by shade number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorGroup {
    shades: BTreeMap<ShadeKey, ColorEntry>,
}

impl ColorGroup {
    pub fn new(shades: BTreeMap<ShadeKey, ColorEntry>) -> Self {
        Self { shades }
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    pub fn get(&self, key: ShadeKey) -> Option<&ColorEntry> {
        self.shades.get(&key)
    }

    /// Shades from darkest tier number to lightest (90 → 5).
    pub fn descending(&self) -> impl DoubleEndedIterator<Item = (ShadeKey, &ColorEntry)> + '_ {
        self.shades.iter().rev().map(|(key, entry)| (*key, entry))
    }

    /// The shade flagged as `base`, if any.
    pub fn base(&self) -> Option<(ShadeKey, &ColorEntry)> {
        self.shades.iter().find(|(_, entry)| entry.base).map(|(key, entry)| (*key, entry))
    }
}

/// Immutable mapping of group name to [`ColorGroup`], in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteTable {
    groups: IndexMap<String, ColorGroup>,
}

impl PaletteTable {
    pub fn new(groups: IndexMap<String, ColorGroup>) -> Self {
        Self { groups }
    }

    /// Typed lookup; `None` when the table has no such group.
    pub fn group(&self, name: &str) -> Option<&ColorGroup> {
        self.groups.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorGroup)> + '_ {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of shades across every group.
    pub fn shade_count(&self) -> usize {
        self.groups.values().map(ColorGroup::len).sum()
    }
}
