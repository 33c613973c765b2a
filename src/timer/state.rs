//! Countdown state and its transitions.
//!
//! Every transition takes the state by value and returns the next one, so the
//! event loop never mutates a state it has already handed to the renderer.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::timer::preset::Preset;
use crate::timer::selector::Selector;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Current stage of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No countdown running; the selector is shown.
    #[default]
    Idle,
    /// Counting down a focus interval.
    Focused,
    /// Counting down a break interval.
    OnBreak,
}

impl Phase {
    /// Human readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Focused => "Focus",
            Self::OnBreak => "Break",
        }
    }
}

/// Everything the timer and its renderer need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    /// Current phase.
    pub phase: Phase,
    /// Time left in the current phase.
    pub remaining: Duration,
    /// Focus interval of the current run.
    pub focus_duration: Duration,
    /// Break interval of the current run.
    pub break_duration: Duration,
    /// Whether ticks are currently ignored.
    pub paused: bool,
    /// Focus intervals finished since the program started.
    pub sessions_completed: u32,
    /// Whether the selector is shown instead of the countdown.
    pub selecting: bool,
    /// Preset list and highlight.
    pub selector: Selector,
    /// Last known terminal width.
    pub width: u16,
    /// One-line message for the status bar.
    pub status: Option<String>,
}

impl TimerState {
    /// Create the startup state: selector shown, highlighted preset's
    /// durations prefilled, nothing counting down.
    #[must_use]
    pub fn new(selector: Selector) -> Self {
        let preset = selector.confirm_selection();
        Self {
            phase: Phase::Idle,
            remaining: Duration::ZERO,
            focus_duration: preset.map_or(Duration::ZERO, |p| p.focus()),
            break_duration: preset.map_or(Duration::ZERO, |p| p.break_duration()),
            paused: false,
            sessions_completed: 0,
            selecting: true,
            selector,
            width: 0,
            status: None,
        }
    }

    /// Length of the current phase.
    #[must_use]
    pub const fn phase_duration(&self) -> Duration {
        match self.phase {
            Phase::Idle => Duration::ZERO,
            Phase::Focused => self.focus_duration,
            Phase::OnBreak => self.break_duration,
        }
    }

    /// Fraction of the current phase already elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.phase_duration();
        if total.is_zero() {
            return 0.0;
        }
        1.0 - (self.remaining.as_secs_f64() / total.as_secs_f64())
    }

    /// Whether a countdown is running or paused.
    #[must_use]
    pub fn is_counting(&self) -> bool {
        !self.selecting && self.phase != Phase::Idle
    }

    /// Advance by one second.
    ///
    /// A no-op while paused, selecting, or idle. A tick that brings the
    /// countdown to zero flips the phase on the same tick.
    #[must_use]
    pub fn on_tick(mut self) -> Self {
        if self.paused || !self.is_counting() {
            return self;
        }

        self.remaining = self.remaining.saturating_sub(ONE_SECOND);
        if self.remaining.is_zero() {
            self = self.advance_phase();
        }
        self
    }

    fn advance_phase(mut self) -> Self {
        match self.phase {
            Phase::Focused => {
                self.sessions_completed += 1;
                self.phase = Phase::OnBreak;
                self.remaining = self.break_duration;
                self.status = Some(format!(
                    "Sessions completed: {}. Take a break!",
                    self.sessions_completed
                ));
                debug!(sessions = self.sessions_completed, "focus finished, starting break");
            }
            Phase::OnBreak => {
                self.phase = Phase::Focused;
                self.remaining = self.focus_duration;
                self.status = Some("Break over, back to work".to_string());
                debug!("break finished, starting focus");
            }
            Phase::Idle => {}
        }
        self
    }

    /// Flip the pause flag. Ignored unless a countdown is active.
    #[must_use]
    pub fn on_pause_toggle(mut self) -> Self {
        if !self.is_counting() {
            return self;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, phase = ?self.phase, "pause toggled");
        self
    }

    /// Start counting down `preset` from its focus interval.
    ///
    /// `sessions_completed` is left untouched.
    #[must_use]
    pub fn on_select(mut self, preset: Preset) -> Self {
        self.focus_duration = preset.focus();
        self.break_duration = preset.break_duration();
        self.remaining = self.focus_duration;
        self.phase = Phase::Focused;
        self.paused = false;
        self.selecting = false;
        self.status = Some(format!(
            "Starting a {} minute focus session with a {} minute break",
            preset.focus_minutes(),
            preset.break_minutes()
        ));
        info!(preset = %preset, "session started");
        self
    }

    /// Confirm the highlighted preset.
    ///
    /// Stays in selection with a status message if nothing is highlighted.
    #[must_use]
    pub fn on_confirm(mut self) -> Self {
        match self.selector.confirm_selection() {
            Some(preset) => self.on_select(preset),
            None => {
                warn!(index = self.selector.highlighted(), "selection failed");
                self = reset_for_reselection(self);
                self.status = Some("Selection failed, pick a preset".to_string());
                self
            }
        }
    }

    /// Stop the countdown and go back to the selector.
    #[must_use]
    pub fn on_abort(self) -> Self {
        info!(sessions = self.sessions_completed, "session aborted");
        reset_for_reselection(self)
    }
}

/// Clear the countdown so a new preset can be chosen.
///
/// Keeps `sessions_completed`, the selector highlight, the last run's
/// durations, and the terminal width.
#[must_use]
pub fn reset_for_reselection(state: TimerState) -> TimerState {
    TimerState {
        phase: Phase::Idle,
        remaining: Duration::ZERO,
        paused: false,
        selecting: true,
        status: None,
        ..state
    }
}
