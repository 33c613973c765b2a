//! Pomodoro timer core.
//!
//! - Presets and the selector that picks one
//! - The countdown state and its phase transitions
//! - The `handle` transition function driven by the event loop
//! - Plain-text formatting of the state

pub mod format;
pub mod machine;
pub mod preset;
pub mod selector;
pub mod state;

pub use format::{final_summary, format_duration, format_mmss, view};
pub use machine::{handle, Command, Event};
pub use preset::Preset;
pub use selector::{Direction, Selector};
pub use state::{reset_for_reselection, Phase, TimerState};
