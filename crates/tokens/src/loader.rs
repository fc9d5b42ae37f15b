//! Palette loading: embedded default, JSON, and YAML token files.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::debug;

use crate::extend::{RawTable, extend_table};
use crate::palette::PaletteTable;

/// Token file compiled into the binary.
const EMBEDDED_PALETTE: &str = include_str!("../assets/palette.json");

static DEFAULT_PALETTE: Lazy<PaletteTable> =
    Lazy::new(|| parse_json(EMBEDDED_PALETTE).unwrap_or_else(|error| panic!("embedded palette is invalid: {error}")));

/// Error surfaced while reading or validating a token file.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid hex color {0:?}; expected #rgb or #rrggbb")]
    InvalidHex(String),
    #[error("invalid shade key {0:?}; expected a non-negative integer")]
    InvalidShadeKey(String),
    #[error("duplicate shade key {0}; keys such as \"5\" and \"05\" name the same shade")]
    DuplicateShade(u16),
    #[error("palette JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("palette YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("palette I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported palette file extension {0:?}; expected .json, .yaml, or .yml")]
    UnsupportedFormat(String),
}

/// The palette shipped with the binary, parsed once per process.
pub fn default_palette() -> &'static PaletteTable {
    &DEFAULT_PALETTE
}

pub fn parse_json(input: &str) -> Result<PaletteTable, TokenError> {
    let raw: RawTable = serde_json::from_str(input)?;
    Ok(extend_table(raw))
}

pub fn parse_yaml(input: &str) -> Result<PaletteTable, TokenError> {
    let raw: RawTable = serde_yaml::from_str(input)?;
    Ok(extend_table(raw))
}

/// Reads a token file, choosing the format by extension.
pub fn load_from_path(path: &Path) -> Result<PaletteTable, TokenError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let contents = fs::read_to_string(path)?;
    let table = match extension.as_str() {
        "json" => parse_json(&contents)?,
        "yaml" | "yml" => parse_yaml(&contents)?,
        other => return Err(TokenError::UnsupportedFormat(other.to_string())),
    };

    debug!(
        path = %path.display(),
        groups = table.len(),
        shades = table.shade_count(),
        "loaded palette"
    );
    Ok(table)
}
