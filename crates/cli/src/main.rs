use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::json;
use swatchbook_tokens::{PaletteTable, WcagGrade, default_palette, load_from_path};
use swatchbook_tui::{RunOptions, build_swatch_list};
use swatchbook_util::UserPreferences;
use swatchbook_util::preferences::config_root;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "swatchbook.log";

/// Browse a design-token color palette in the terminal.
#[derive(Parser, Debug)]
#[command(name = "swatchbook", version, about)]
struct Args {
    /// JSON or YAML token file to load instead of the embedded palette
    #[arg(long, env = "SWATCHBOOK_PALETTE", global = true)]
    palette: Option<PathBuf>,

    /// Theme id or alias for the TUI chrome (swatch_dark, swatch_light, ansi256)
    #[arg(long, global = true)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List groups with their shade counts, in palette order
    Groups,
    /// Print the swatches of one group, darkest tier first
    Show {
        group: String,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Load and validate the palette, then print a summary
    Check,
}

/// Where the palette came from, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PaletteSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for PaletteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteSource::Embedded => f.write_str("embedded"),
            PaletteSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn main() -> Result<()> {
    let Args { palette, theme, command } = Args::parse();
    init_tracing(command.is_none());

    let preferences = open_preferences();
    let (table, source) = resolve_palette(palette, &preferences)?;
    debug!(%source, groups = table.len(), "palette loaded");

    match command {
        None => swatchbook_tui::run(
            Arc::new(table),
            RunOptions {
                theme,
                preferences: Some(preferences),
            },
        ),
        Some(Command::Groups) => {
            print!("{}", groups_report(&table));
            Ok(())
        }
        Some(Command::Show { group, json }) => {
            println!("{}", show_report(&table, &group, json)?);
            Ok(())
        }
        Some(Command::Check) => {
            println!("{}", check_report(&table, &source));
            Ok(())
        }
    }
}

/// Logs go to a file while the TUI owns the screen, to stderr otherwise.
fn init_tracing(tui_mode: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if tui_mode && let Some(file) = open_log_file() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
        return;
    }
    if tui_mode {
        // No usable log file; stay silent rather than draw over the alternate screen.
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::sink).try_init();
        return;
    }
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn open_log_file() -> Option<fs::File> {
    let root = config_root();
    fs::create_dir_all(&root).ok()?;
    OpenOptions::new().create(true).append(true).open(root.join(LOG_FILE_NAME)).ok()
}

fn open_preferences() -> UserPreferences {
    match UserPreferences::new() {
        Ok(preferences) => preferences,
        Err(error) => {
            warn!(%error, "preferences unavailable; using in-memory defaults");
            UserPreferences::ephemeral()
        }
    }
}

/// Flag or `SWATCHBOOK_PALETTE` first, then the saved palette path, then the embedded palette.
fn resolve_palette(explicit: Option<PathBuf>, preferences: &UserPreferences) -> Result<(PaletteTable, PaletteSource)> {
    let Some(path) = explicit.or_else(|| preferences.palette_path()) else {
        return Ok((default_palette().clone(), PaletteSource::Embedded));
    };
    let table = load_palette_file(&path)?;
    Ok((table, PaletteSource::File(path)))
}

fn load_palette_file(path: &Path) -> Result<PaletteTable> {
    load_from_path(path).with_context(|| format!("failed to load palette from {}", path.display()))
}

fn groups_report(table: &PaletteTable) -> String {
    let width = table.group_names().map(str::len).max().unwrap_or(0);
    table
        .iter()
        .map(|(name, group)| {
            let base = group.base().map_or_else(|| "-".to_string(), |(key, _)| key.to_string());
            format!("{name:<width$}  {:>2} shades  base {base}\n", group.len())
        })
        .collect()
}

fn show_report(table: &PaletteTable, group: &str, as_json: bool) -> Result<String> {
    if !table.contains(group) {
        let known = table.group_names().collect::<Vec<_>>().join(", ");
        bail!("unknown group '{group}' (known groups: {known})");
    }
    let swatches = build_swatch_list(table, group);

    if as_json {
        let rows: Vec<_> = swatches
            .iter()
            .map(|swatch| {
                let ratio = swatch.color.contrast_ratio();
                json!({
                    "key": swatch.key,
                    "name": swatch.name,
                    "hex": swatch.color.hex,
                    "contrast": swatch.contrast_color,
                    "base": swatch.is_base,
                    "ratio": (ratio * 100.0).round() / 100.0,
                    "grade": WcagGrade::from_ratio(ratio),
                    "text_tone": swatch.text_tone,
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let lines: Vec<String> = swatches
        .iter()
        .map(|swatch| {
            let marker = if swatch.is_base { "◆" } else { " " };
            format!(
                "{marker} {:>3}  {:<14} {:<8} on {:<8} {:>6.2}:1  {}",
                swatch.key.to_string(),
                swatch.name,
                swatch.color.hex.as_str(),
                swatch.contrast_color.as_str(),
                swatch.color.contrast_ratio(),
                swatch.accessibility_label,
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

fn check_report(table: &PaletteTable, source: &PaletteSource) -> String {
    let below_aa = table
        .iter()
        .flat_map(|(_, group)| group.descending())
        .filter(|(_, entry)| WcagGrade::from_ratio(entry.contrast_ratio()) < WcagGrade::Aa)
        .count();
    let missing_base: Vec<&str> = table.iter().filter(|(_, group)| group.base().is_none()).map(|(name, _)| name).collect();

    let mut summary = format!(
        "ok: {} groups, {} shades from {source}; {below_aa} below WCAG AA",
        table.len(),
        table.shade_count()
    );
    if !missing_base.is_empty() {
        summary.push_str(&format!("; no base shade in {}", missing_base.join(", ")));
    }
    summary
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::CommandFactory;
    use swatchbook_tokens::parse_json;

    use super::*;

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
    fn clap_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn subcommands_parse() {
        let args = Args::try_parse_from(["swatchbook", "show", "teal", "--json", "--theme", "light"]).unwrap();
        assert_eq!(args.theme.as_deref(), Some("light"));
        assert!(matches!(args.command, Some(Command::Show { ref group, json: true }) if group == "teal"));
        assert!(Args::try_parse_from(["swatchbook"]).unwrap().command.is_none());
    }

    #[test]
    fn embedded_palette_is_the_fallback() {
        let (table, source) = resolve_palette(None, &UserPreferences::ephemeral()).unwrap();
        assert_eq!(source, PaletteSource::Embedded);
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn explicit_palette_file_wins() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r##"{{ "teal": {{ "50": {{ "hex": "#009596", "base": true }} }} }}"##).unwrap();
        let (table, source) = resolve_palette(Some(file.path().to_path_buf()), &UserPreferences::ephemeral()).unwrap();
        assert_eq!(source, PaletteSource::File(file.path().to_path_buf()));
        assert_eq!(table.group_names().collect::<Vec<_>>(), ["teal"]);
    }

    #[test]
    fn unreadable_palette_names_the_path() {
        let error = resolve_palette(Some(PathBuf::from("/nonexistent/palette.json")), &UserPreferences::ephemeral()).unwrap_err();
        assert!(format!("{error:#}").contains("/nonexistent/palette.json"));
    }

    #[test]
    fn show_lists_descending_and_rejects_unknown_groups() {
        let table = two_shade_purple();
        let text = show_report(&table, "purple", false).unwrap();
        let names: Vec<&str> = text
            .lines()
            .filter_map(|line| line.split_whitespace().find(|token| token.starts_with("purple-")))
            .collect();
        assert_eq!(names, ["purple-90", "purple-10"]);
        assert!(text.lines().nth(1).unwrap().starts_with('◆'));

        let json: serde_json::Value = serde_json::from_str(&show_report(&table, "purple", true).unwrap()).unwrap();
        assert_eq!(json[0]["name"], "purple-90");
        assert_eq!(json[0]["key"], "90");
        assert_eq!(json[1]["base"], true);
        assert_eq!(json[1]["text_tone"], "dark");

        let error = show_report(&table, "teal", false).unwrap_err();
        assert!(error.to_string().contains("unknown group 'teal'"));
    }

    #[test]
    fn groups_and_check_summaries() {
        let table = two_shade_purple();
        assert_eq!(groups_report(&table), "purple   2 shades  base 10\n");
        assert_eq!(
            check_report(&table, &PaletteSource::Embedded),
            "ok: 1 groups, 2 shades from embedded; 0 below WCAG AA"
        );
    }
}
