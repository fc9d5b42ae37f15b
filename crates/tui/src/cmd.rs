//! # Command Execution Layer
//!
//! Translates the effects left over after navigation into imperative
//! commands ([`Cmd`]) and executes them. State updates stay pure; anything
//! touching the outside world (today only the system clipboard) happens here
//! and reports back through the status line.

use tracing::{debug, warn};

use crate::app::{App, Effect};

/// Side-effectful commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Write `text` into the system clipboard; `label` describes it to the user.
    ClipboardSet { label: String, text: String },
}

/// Convert application [`Effect`]s into [`Cmd`]s.
///
/// Navigation effects are expected to have been applied already and are
/// ignored here.
pub fn from_effects(effects: Vec<Effect>) -> Vec<Cmd> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::CopyToClipboard { label, text } => Some(Cmd::ClipboardSet { label, text }),
            Effect::ShowDetails(_) | Effect::CloseDetails | Effect::CycleTheme | Effect::Quit => None,
        })
        .collect()
}

/// Execute commands in order, recording their outcome on `app`.
pub fn run_cmds(app: &mut App, commands: Vec<Cmd>) {
    for command in commands {
        match command {
            Cmd::ClipboardSet { label, text } => execute_clipboard_set(app, &label, text),
        }
    }
}

fn execute_clipboard_set(app: &mut App, label: &str, text: String) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => {
            debug!(label, "copied to clipboard");
            app.set_status(format!("Copied {label}"), false);
        }
        Err(error) => {
            warn!(%error, label, "clipboard write failed");
            app.set_status(format!("Clipboard error: {error}"), true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_clipboard_effects_become_commands() {
        let commands = from_effects(vec![
            Effect::ShowDetails("teal".to_string()),
            Effect::CopyToClipboard {
                label: "teal-50".to_string(),
                text: "#00a5a5".to_string(),
            },
            Effect::Quit,
        ]);
        assert_eq!(
            commands,
            vec![Cmd::ClipboardSet {
                label: "teal-50".to_string(),
                text: "#00a5a5".to_string(),
            }]
        );
    }
}
