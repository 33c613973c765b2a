//! UI rendering for the TUI.
//!
//! All colors and padding live here; the timer core only produces text.

use std::time::Duration;

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::timer::format::{countdown_line, sessions_line, view, SELECTOR_TITLE};
use crate::timer::{Phase, TimerState};

const ACCENT: Color = Color::Indexed(170);
const TIME: Color = Color::Indexed(205);
const BREAK: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;

const HELP_WIDE: &str = "j/k:nav | Enter:start | p:pause | Esc:presets | q:quit";
const HELP_NARROW: &str = "Enter p Esc q";

/// Below this height the bordered layout no longer fits.
const MIN_FULL_HEIGHT: u16 = 12;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, state: &TimerState) {
    if frame.area().height < MIN_FULL_HEIGHT {
        render_compact(frame, state, frame.area());
        return;
    }

    // Create layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(2), // Status and key help
        ])
        .split(frame.area());

    render_header(frame, state, chunks[0]);
    if state.selecting {
        render_selector(frame, state, chunks[1]);
    } else {
        render_countdown(frame, state, chunks[1]);
    }
    render_status_bar(frame, state, chunks[2]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, state: &TimerState, area: Rect) {
    let title = format!(" pomotui | {} ", sessions_line(state));

    let header = Paragraph::new(title)
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        );

    frame.render_widget(header, area);
}

/// Render the preset list.
fn render_selector(frame: &mut Frame<'_>, state: &TimerState, area: Rect) {
    let highlighted = state.selector.highlighted();
    let items: Vec<ListItem<'_>> = state
        .selector
        .presets()
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            if i == highlighted {
                ListItem::new(Line::from(Span::styled(
                    format!("> {preset}"),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )))
            } else {
                ListItem::new(Line::from(format!("    {preset}")))
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {SELECTOR_TITLE} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(highlighted));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render the countdown and its progress gauge.
fn render_countdown(frame: &mut Frame<'_>, state: &TimerState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let color = if state.phase == Phase::OnBreak { BREAK } else { TIME };
    let mut lines = vec![Line::from(Span::styled(
        countdown_line(state).unwrap_or_default(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if !state.paused {
        if let Some(ends) = ends_at(state.remaining) {
            lines.push(Line::from(Span::styled(
                format!("{} ends at {ends}", state.phase.display_name()),
                Style::default().fg(MUTED),
            )));
        }
    }

    let countdown = Paragraph::new(lines).block(Block::default().borders(Borders::NONE));
    frame.render_widget(countdown, inset(chunks[0]));

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(state.progress().clamp(0.0, 1.0));
    frame.render_widget(gauge, inset(chunks[1]));
}

/// Plain-text view for terminals too short for the full layout.
fn render_compact(frame: &mut Frame<'_>, state: &TimerState, area: Rect) {
    let text = Paragraph::new(view(state)).style(Style::default().fg(Color::White));
    frame.render_widget(text, area);
}

/// Render the status line above the key help.
fn render_status_bar(frame: &mut Frame<'_>, state: &TimerState, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            state.status.clone().unwrap_or_default(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(help_text(state.width), Style::default().fg(MUTED))),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Key help sized to the last known terminal width.
fn help_text(width: u16) -> &'static str {
    if width != 0 && usize::from(width) < HELP_WIDE.len() {
        HELP_NARROW
    } else {
        HELP_WIDE
    }
}

/// Wall-clock time at which the current phase ends.
fn ends_at(remaining: Duration) -> Option<String> {
    let delta = chrono::Duration::from_std(remaining).ok()?;
    let end = Local::now().checked_add_signed(delta)?;
    Some(end.format("%H:%M").to_string())
}

/// Left padding for the countdown body.
fn inset(area: Rect) -> Rect {
    let pad = area.width.min(4);
    Rect {
        x: area.x + pad,
        width: area.width - pad,
        ..area
    }
}
