//! Shared helpers for the Swatchbook binary and TUI.

pub mod preferences;

use std::path::PathBuf;

use dirs_next::home_dir;

pub use preferences::{PreferencesError, PreferencesPayload, UserPreferences};

/// Expands a leading `~` or `~/` to the user's home directory.
///
/// Other inputs are returned as-is. When the home directory cannot be
/// determined the literal `~` is kept.
pub fn expand_tilde(input: &str) -> PathBuf {
    let trimmed = input.trim();
    if trimmed == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("/tmp/palette.json"), PathBuf::from("/tmp/palette.json"));
        assert_eq!(expand_tilde(" tokens.yaml "), PathBuf::from("tokens.yaml"));
    }

    #[test]
    fn expands_home_prefix() {
        let Some(home) = home_dir() else { return };
        assert_eq!(expand_tilde("~"), home);
        assert_eq!(expand_tilde("~/tokens/palette.json"), home.join("tokens/palette.json"));
    }
}
