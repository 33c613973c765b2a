//! The event-driven transition function.
//!
//! [`handle`] is the only way the event loop changes a [`TimerState`]. Side
//! effects the loop must perform (arming the next tick, exiting) come back as
//! a [`Command`] instead of being performed here.

use tracing::{info, trace};

use crate::timer::selector::Direction;
use crate::timer::state::TimerState;

/// A discrete input delivered by the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Move the selector highlight up.
    MoveUp,
    /// Move the selector highlight down.
    MoveDown,
    /// Jump to the first preset.
    First,
    /// Jump to the last preset.
    Last,
    /// Start (or restart) the highlighted preset.
    Confirm,
    /// Pause or resume the countdown.
    PauseToggle,
    /// Stop the countdown and return to the selector.
    Abort,
    /// Exit the program.
    Quit,
    /// One second elapsed.
    Tick,
    /// The terminal was resized to this width.
    Resize(u16),
}

/// What the event loop must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Nothing.
    None,
    /// Arm the next one-second tick.
    ScheduleTick,
    /// Restore the terminal and exit.
    Quit,
}

/// Apply one event.
///
/// Every `Tick` is answered with `ScheduleTick`, including ticks that were
/// ignored because the timer is paused or the selector is up.
#[must_use]
pub fn handle(state: TimerState, event: Event) -> (TimerState, Command) {
    trace!(?event, "handling event");

    match event {
        Event::Tick => (state.on_tick(), Command::ScheduleTick),
        Event::PauseToggle => (state.on_pause_toggle(), Command::None),
        Event::Confirm => (state.on_confirm(), Command::None),
        Event::Abort => (state.on_abort(), Command::None),
        Event::Quit => {
            info!(sessions = state.sessions_completed, "quitting");
            (state, Command::Quit)
        }
        Event::Resize(width) => (TimerState { width, ..state }, Command::None),
        Event::MoveUp | Event::MoveDown | Event::First | Event::Last => {
            (navigate(state, event), Command::None)
        }
    }
}

fn navigate(mut state: TimerState, event: Event) -> TimerState {
    if !state.selecting {
        return state;
    }

    match event {
        Event::MoveUp => state.selector.move_highlight(Direction::Up),
        Event::MoveDown => state.selector.move_highlight(Direction::Down),
        Event::First => state.selector.select_first(),
        Event::Last => state.selector.select_last(),
        _ => {}
    }
    state.status = None;
    state
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::timer::preset::Preset;
    use crate::timer::selector::Selector;
    use crate::timer::state::Phase;

    fn state() -> TimerState {
        TimerState::new(Selector::new(Preset::defaults()).unwrap())
    }

    fn drive(mut state: TimerState, events: &[Event]) -> TimerState {
        for &event in events {
            state = handle(state, event).0;
        }
        state
    }

    fn ticks(state: TimerState, n: usize) -> TimerState {
        drive(state, &vec![Event::Tick; n])
    }

    #[test]
    fn test_every_tick_reschedules() {
        let s = state();
        let (s, cmd) = handle(s, Event::Tick);
        assert_eq!(cmd, Command::ScheduleTick);

        let (s, _) = handle(s, Event::Confirm);
        let (s, cmd) = handle(s, Event::Tick);
        assert_eq!(cmd, Command::ScheduleTick);

        let (s, _) = handle(s, Event::PauseToggle);
        let (_, cmd) = handle(s, Event::Tick);
        assert_eq!(cmd, Command::ScheduleTick);
    }

    #[test]
    fn test_other_events_do_not_schedule() {
        for event in [
            Event::MoveUp,
            Event::MoveDown,
            Event::First,
            Event::Last,
            Event::Confirm,
            Event::PauseToggle,
            Event::Abort,
            Event::Resize(80),
        ] {
            assert_eq!(handle(state(), event).1, Command::None, "{event:?}");
        }
    }

    #[test]
    fn test_quit_keeps_state() {
        let s = ticks(drive(state(), &[Event::Confirm]), 10);
        let (after, cmd) = handle(s.clone(), Event::Quit);
        assert_eq!(cmd, Command::Quit);
        assert_eq!(after, s);
    }

    #[test]
    fn test_navigation_then_confirm() {
        let s = drive(state(), &[Event::MoveDown, Event::MoveDown, Event::Confirm]);
        assert!(!s.selecting);
        assert_eq!(s.phase, Phase::Focused);
        assert_eq!(s.remaining, Duration::from_secs(50 * 60));
        assert_eq!(s.break_duration, Duration::from_secs(10 * 60));
    }

    #[test]
    fn test_navigation_ignored_while_counting() {
        let s = drive(state(), &[Event::Confirm, Event::MoveDown]);
        assert_eq!(s.selector.highlighted(), 0);
    }

    #[test]
    fn test_confirm_while_counting_restarts() {
        let s = ticks(drive(state(), &[Event::Confirm]), 100);
        assert_eq!(s.remaining, Duration::from_secs(1400));
        let s = drive(s, &[Event::PauseToggle, Event::Confirm]);
        assert!(!s.paused);
        assert_eq!(s.remaining, Duration::from_secs(1500));
    }

    #[test]
    fn test_resize_records_width() {
        let s = drive(state(), &[Event::Resize(120)]);
        assert_eq!(s.width, 120);
        let s = drive(s, &[Event::Confirm, Event::Abort]);
        assert_eq!(s.width, 120);
    }

    #[test]
    fn test_pause_resume_is_idempotent_freeze() {
        let s = ticks(drive(state(), &[Event::Confirm]), 7);
        let frozen = s.remaining;
        let s = ticks(drive(s, &[Event::PauseToggle]), 250);
        let s = drive(s, &[Event::PauseToggle]);
        assert_eq!(s.remaining, frozen);
    }

    #[test]
    fn test_long_preset_then_abort_scenario() {
        let s = drive(state(), &[Event::MoveDown, Event::Confirm]);
        let s = ticks(s, 3000);
        assert_eq!(s.phase, Phase::OnBreak);
        assert_eq!(s.remaining, Duration::from_secs(600));
        assert_eq!(s.sessions_completed, 1);

        let s = drive(s, &[Event::Abort]);
        assert!(s.selecting);
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.sessions_completed, 1);
    }

    #[test]
    fn test_confirm_without_highlight_recovers() {
        let mut s = state();
        s.selector = Selector::with_raw_highlight(Preset::defaults(), 2);

        let (s, cmd) = handle(s, Event::Confirm);
        assert_eq!(cmd, Command::None);
        assert!(s.selecting);
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.status.as_deref(), Some("Selection failed, pick a preset"));
        assert_eq!(s.sessions_completed, 0);

        // The clock keeps running in the selector.
        let (_, cmd) = handle(s, Event::Tick);
        assert_eq!(cmd, Command::ScheduleTick);
    }

    #[test]
    fn test_abort_while_selecting_is_harmless() {
        let s = drive(state(), &[Event::Abort, Event::Abort]);
        assert!(s.selecting);
        assert_eq!(s.sessions_completed, 0);
    }
}
