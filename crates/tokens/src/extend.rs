//! Completes raw token entries into [`ColorEntry`] values.
//!
//! Token files may omit `contrast`, `name`, and `base`; they are filled here so
//! the rest of the workspace only ever sees complete entries.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::color::{HexColor, contrast_ratio};
use crate::loader::TokenError;
use crate::palette::{ColorEntry, ColorGroup, PaletteTable, ShadeKey};

#[derive(Debug, Deserialize)]
pub(crate) struct RawEntry {
    hex: HexColor,
    #[serde(default)]
    contrast: Option<HexColor>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    base: bool,
}

/// Shade map that refuses two keys naming the same tier (`"5"` and `"05"`).
#[derive(Debug, Default)]
pub(crate) struct RawShades(BTreeMap<ShadeKey, RawEntry>);

impl RawShades {
    fn insert<E: de::Error>(&mut self, key: ShadeKey, entry: RawEntry) -> Result<(), E> {
        if self.0.insert(key, entry).is_some() {
            return Err(E::custom(TokenError::DuplicateShade(key.value())));
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for RawShades {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadesVisitor;

        impl<'de> Visitor<'de> for ShadesVisitor {
            type Value = RawShades;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of shade keys to color entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawShades, A::Error> {
                let mut shades = RawShades::default();
                while let Some(key) = map.next_key::<ShadeKey>()? {
                    let entry = map.next_value()?;
                    shades.insert::<A::Error>(key, entry)?;
                }
                Ok(shades)
            }
        }

        deserializer.deserialize_map(ShadesVisitor)
    }
}

/// Key of a group map: either the `colors` wrapper or a shade tier.
enum GroupKey {
    Colors,
    Shade(ShadeKey),
}

impl<'de> Deserialize<'de> for GroupKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupKeyVisitor;

        impl Visitor<'_> for GroupKeyVisitor {
            type Value = GroupKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"colors\" or a numeric shade key")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<GroupKey, E> {
                if value == "colors" {
                    return Ok(GroupKey::Colors);
                }
                value.parse().map(GroupKey::Shade).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<GroupKey, E> {
                u16::try_from(value)
                    .map(|shade| GroupKey::Shade(ShadeKey::new(shade)))
                    .map_err(|_| E::custom(TokenError::InvalidShadeKey(value.to_string())))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<GroupKey, E> {
                u16::try_from(value)
                    .map(|shade| GroupKey::Shade(ShadeKey::new(shade)))
                    .map_err(|_| E::custom(TokenError::InvalidShadeKey(value.to_string())))
            }
        }

        deserializer.deserialize_any(GroupKeyVisitor)
    }
}

/// Groups are either a bare shade map or wrapped as `{ "colors": { ... } }`.
///
/// A wrapped group holds nothing besides `colors`.
#[derive(Debug)]
pub(crate) struct RawGroup(RawShades);

impl RawGroup {
    fn into_shades(self) -> BTreeMap<ShadeKey, RawEntry> {
        (self.0).0
    }
}

impl<'de> Deserialize<'de> for RawGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupVisitor;

        impl<'de> Visitor<'de> for GroupVisitor {
            type Value = RawGroup;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a shade map or an object with a \"colors\" shade map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawGroup, A::Error> {
                let mixed = || <A::Error as de::Error>::custom("a \"colors\" group cannot also list shades");
                let mut shades = RawShades::default();
                match map.next_key::<GroupKey>()? {
                    None => {}
                    Some(GroupKey::Colors) => {
                        shades = map.next_value()?;
                        if map.next_key::<GroupKey>()?.is_some() {
                            return Err(mixed());
                        }
                    }
                    Some(GroupKey::Shade(first)) => {
                        shades.insert::<A::Error>(first, map.next_value()?)?;
                        while let Some(key) = map.next_key::<GroupKey>()? {
                            let GroupKey::Shade(shade) = key else {
                                return Err(mixed());
                            };
                            shades.insert::<A::Error>(shade, map.next_value()?)?;
                        }
                    }
                }
                Ok(RawGroup(shades))
            }
        }

        deserializer.deserialize_map(GroupVisitor)
    }
}

pub(crate) type RawTable = IndexMap<String, RawGroup>;

/// White or black, whichever reads better on `fill`.
pub(crate) fn legible_foreground(fill: &HexColor) -> HexColor {
    let on_white = contrast_ratio(fill.rgb(), HexColor::WHITE);
    let on_black = contrast_ratio(fill.rgb(), HexColor::BLACK);
    if on_white >= on_black {
        HexColor::from_rgb(0xFF, 0xFF, 0xFF)
    } else {
        HexColor::from_rgb(0x00, 0x00, 0x00)
    }
}

fn extend_entry(group: &str, shade: ShadeKey, raw: RawEntry) -> ColorEntry {
    let contrast = raw.contrast.unwrap_or_else(|| legible_foreground(&raw.hex));
    let name = raw.name.unwrap_or_else(|| format!("{group}-{shade}"));
    ColorEntry {
        hex: raw.hex,
        contrast,
        name,
        base: raw.base,
    }
}

pub(crate) fn extend_table(raw: RawTable) -> PaletteTable {
    let groups = raw
        .into_iter()
        .map(|(group_name, raw_group)| {
            let shades = raw_group
                .into_shades()
                .into_iter()
                .map(|(shade, entry)| (shade, extend_entry(&group_name, shade, entry)))
                .collect();
            (group_name, ColorGroup::new(shades))
        })
        .collect();
    PaletteTable::new(groups)
}
