use clap::Parser;
use colored::Colorize;

use pomotui::cli::commands;
use pomotui::cli::{Cli, Commands};
use pomotui::config::Config;
use pomotui::error::PomoError;
use pomotui::timer::{final_summary, TimerState};
use pomotui::{logging, tui};

fn main() {
    match run() {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            if e.is_startup() {
                eprintln!("{}", "Check your presets in the config file.".dimmed());
            }
            std::process::exit(1);
        }
    }
}

fn run() -> Result<String, PomoError> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(index) = cli.preset {
        config.default_preset = index;
    }
    config.validate()?;

    match cli.command {
        Some(Commands::Presets { output }) => commands::presets(&config, output),
        Some(Commands::Completions { shell }) => commands::completions(shell),
        None => {
            let explicit = cli.log_file.as_deref().or(config.log_file.as_deref());
            let rust_log_set = std::env::var_os("RUST_LOG").is_some();
            if let Some(path) = logging::resolve_log_file(explicit, rust_log_set)? {
                logging::init(&path)?;
            }

            let state = TimerState::new(config.selector()?);
            let state = tui::run(state, config.tick_interval())?;
            Ok(final_summary(&state))
        }
    }
}
