//! Command implementations for pomotui.
//!
//! Each command returns the text to print on stdout.

use clap::CommandFactory;
use clap_complete::Shell;
use colored::Colorize;
use serde::Serialize;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::PomoError;
use crate::timer::format_duration;

/// A preset as listed by the `presets` command.
#[derive(Debug, Serialize)]
struct PresetEntry {
    index: usize,
    label: String,
    focus_minutes: u32,
    break_minutes: u32,
    default: bool,
}

/// List configured presets.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or JSON serialization fails.
pub fn presets(config: &Config, format: OutputFormat) -> Result<String, PomoError> {
    let selector = config.selector()?;
    let entries: Vec<PresetEntry> = selector
        .presets()
        .iter()
        .enumerate()
        .map(|(index, preset)| PresetEntry {
            index,
            label: preset.to_string(),
            focus_minutes: preset.focus_minutes(),
            break_minutes: preset.break_minutes(),
            default: index == selector.highlighted(),
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
        OutputFormat::Pretty => {
            let mut output = vec!["Presets".bold().to_string()];

            for (entry, preset) in entries.iter().zip(selector.presets()) {
                let line = format!(
                    "  {}  {:<6} {} focus, {} break",
                    entry.index,
                    entry.label,
                    format_duration(preset.focus()),
                    format_duration(preset.break_duration())
                );
                if entry.default {
                    output.push(format!("{} {}", line.green(), "(default)".dimmed()));
                } else {
                    output.push(line);
                }
            }

            Ok(output.join("\n"))
        }
    }
}

/// Generate a shell completion script.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, PomoError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pomotui", &mut buf);
    String::from_utf8(buf).map_err(|e| PomoError::Config(format!("UTF-8 error: {e}")))
}
