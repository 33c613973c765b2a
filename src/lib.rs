//! pomotui - A terminal Pomodoro timer
//!
//! The timer core is a pure state machine ([`timer::handle`]) driven by a
//! single-threaded event loop ([`tui::run_loop`]) that renders with ratatui.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
pub use timer::{handle, Command, Event, Phase, Preset, TimerState};
