//! Text rendering of the timer state.
//!
//! These are pure functions of [`TimerState`]; the terminal UI styles their
//! output but never feeds anything back into the state.

use std::time::Duration;

use crate::timer::state::{Phase, TimerState};

/// Title shown above the preset list.
pub const SELECTOR_TITLE: &str = "Choose the pomodoro setting";

/// Format a duration as MM:SS. Minutes are not wrapped at 60.
#[must_use]
pub fn format_mmss(d: Duration) -> String {
    let total_seconds = d.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.as_secs() / 60;

    if total_minutes < 1 {
        let seconds = d.as_secs();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

/// The countdown line, e.g. `🍅 24:59` or `⏸ Paused 😴 Break 04:12`.
///
/// `None` while the selector is shown.
#[must_use]
pub fn countdown_line(state: &TimerState) -> Option<String> {
    if state.selecting {
        return None;
    }

    let clock = format_mmss(state.remaining);
    let line = match state.phase {
        Phase::Idle => return None,
        Phase::Focused => format!("🍅 {clock}"),
        Phase::OnBreak => format!("😴 Break {clock}"),
    };

    if state.paused {
        Some(format!("⏸ Paused {line}"))
    } else {
        Some(line)
    }
}

/// One line per preset, the highlighted one marked with `> `.
#[must_use]
pub fn selector_lines(state: &TimerState) -> Vec<String> {
    let highlighted = state.selector.highlighted();
    state
        .selector
        .presets()
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            if i == highlighted {
                format!("> {preset}")
            } else {
                format!("  {preset}")
            }
        })
        .collect()
}

/// Session counter line.
#[must_use]
pub fn sessions_line(state: &TimerState) -> String {
    format!("Sessions completed: {}", state.sessions_completed)
}

/// Full plain-text snapshot of the current view.
#[must_use]
pub fn view(state: &TimerState) -> String {
    let mut lines = Vec::new();

    if let Some(countdown) = countdown_line(state) {
        lines.push(countdown);
        lines.push(render_progress_bar(state.progress(), 20));
    } else {
        lines.push(SELECTOR_TITLE.to_string());
        lines.extend(selector_lines(state));
    }

    lines.push(sessions_line(state));

    if let Some(ref status) = state.status {
        lines.push(status.clone());
    }

    lines.join("\n")
}

/// Summary printed after the terminal is restored on quit.
#[must_use]
pub fn final_summary(state: &TimerState) -> String {
    format!("Completed sessions: {}", state.sessions_completed)
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::preset::Preset;
    use crate::timer::selector::Selector;

    fn state() -> TimerState {
        TimerState::new(Selector::new(Preset::defaults()).unwrap())
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(Duration::from_secs(25 * 60)), "25:00");
        assert_eq!(format_mmss(Duration::from_secs(90)), "01:30");
        assert_eq!(format_mmss(Duration::ZERO), "00:00");
        assert_eq!(format_mmss(Duration::from_secs(120 * 60)), "120:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(25 * 60)), "25 minutes");
        assert_eq!(format_duration(Duration::from_secs(60)), "1 minute");
        assert_eq!(format_duration(Duration::from_secs(2 * 3600)), "2 hours");
        assert_eq!(format_duration(Duration::from_secs(90 * 60)), "1 hour, 30 minutes");
        assert_eq!(format_duration(Duration::from_secs(1)), "1 second");
    }

    #[test]
    fn test_countdown_line_phases() {
        assert_eq!(countdown_line(&state()), None);

        let s = state().on_select(Preset::CLASSIC);
        assert_eq!(countdown_line(&s).as_deref(), Some("🍅 25:00"));

        let s = s.on_tick();
        assert_eq!(countdown_line(&s).as_deref(), Some("🍅 24:59"));

        let s = s.on_pause_toggle();
        assert_eq!(countdown_line(&s).as_deref(), Some("⏸ Paused 🍅 24:59"));

        let mut s = state().on_select(Preset::new(1, 1).unwrap());
        for _ in 0..60 {
            s = s.on_tick();
        }
        assert_eq!(countdown_line(&s).as_deref(), Some("😴 Break 01:00"));
    }

    #[test]
    fn test_selector_lines_marks_highlight() {
        let mut s = state();
        assert_eq!(selector_lines(&s), vec!["> 25/5", "  50/10"]);
        s.selector.select_last();
        assert_eq!(selector_lines(&s), vec!["  25/5", "> 50/10"]);
    }

    #[test]
    fn test_view_selecting() {
        let text = view(&state());
        assert!(text.starts_with(SELECTOR_TITLE));
        assert!(text.contains("> 25/5"));
        assert!(text.contains("Sessions completed: 0"));
    }

    #[test]
    fn test_view_counting_includes_status() {
        let text = view(&state().on_select(Preset::LONG));
        assert!(text.starts_with("🍅 50:00"));
        assert!(text.contains("Starting a 50 minute focus session with a 10 minute break"));
        assert!(!text.contains("> 25/5"));
    }

    #[test]
    fn test_final_summary() {
        let mut s = state().on_select(Preset::new(1, 1).unwrap());
        for _ in 0..60 {
            s = s.on_tick();
        }
        assert_eq!(final_summary(&s), "Completed sessions: 1");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert!(bar.contains("█████"));
        assert!(bar.contains("░░░░░"));
        assert_eq!(render_progress_bar(1.5, 4), "[████]");
    }
}
