use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomotui")]
#[command(about = "A terminal Pomodoro timer")]
#[command(long_about = "pomotui - A terminal Pomodoro timer

Pick a focus/break preset and the timer counts down, alternating between
focus and break intervals until you stop it. Completed focus sessions are
counted and reported when you quit.

KEYS:
  Up/k, Down/j      Move the preset highlight
  Home/g, End/G     Jump to first/last preset
  Enter/e           Start the highlighted preset (restarts if running)
  p/Space           Pause or resume
  Esc/s             Stop and go back to the preset list
  q/Ctrl+C          Quit

CONFIGURATION:
  Presets are read from ~/.pomotui/config.yaml (or --config):

    presets:
      - { focus_minutes: 25, break_minutes: 5 }
      - { focus_minutes: 50, break_minutes: 10 }
    default_preset: 0")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Config file to read instead of ~/.pomotui/config.yaml
    #[arg(short, long, value_name = "PATH", env = "POMOTUI_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Index of the preset highlighted at startup (overrides the config)
    #[arg(short, long, value_name = "INDEX", global = true)]
    pub preset: Option<usize>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the configured presets and exit
    #[command(alias = "ls")]
    Presets {
        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Print a shell completion script
    ///
    /// # Examples
    ///
    ///   source <(pomotui completions bash)
    ///   pomotui completions zsh > ~/.zsh/completions/_pomotui
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_command_runs_timer() {
        let cli = Cli::parse_from(["pomotui", "--preset", "1"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.preset, Some(1));
    }

    #[test]
    fn test_parse_presets_json() {
        let cli = Cli::parse_from(["pomotui", "presets", "--output", "json"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Presets {
                output: OutputFormat::Json
            })
        ));
    }

    #[test]
    fn test_preset_after_subcommand() {
        let cli = Cli::parse_from(["pomotui", "presets", "--preset", "1"]);
        assert_eq!(cli.preset, Some(1));
        assert!(matches!(cli.command, Some(Commands::Presets { .. })));
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::parse_from(["pomotui", "completions", "fish"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Fish })
        ));
    }
}
