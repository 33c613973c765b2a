//! Terminal input and the one-second tick.

use std::time::{Duration, Instant};

use crossterm::event::{self as term, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomoError;
use crate::timer::Event;
use crate::tui::EventSource;

/// How long to wait for input when no tick is armed.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Deadline-based tick producer.
///
/// Each new deadline is one interval after the previous deadline rather
/// than after the moment it was armed, so handling time does not make the
/// clock drift. Deadlines missed while the process was stalled fire
/// immediately, one per call.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    deadline: Option<Instant>,
    last_fired: Option<Instant>,
}

impl Ticker {
    /// Create an unarmed ticker.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
            last_fired: None,
        }
    }

    /// Arm the next tick.
    pub fn arm(&mut self, now: Instant) {
        let base = self.last_fired.unwrap_or(now);
        self.deadline = Some(base + self.interval);
    }

    /// Whether a tick is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the pending tick if its deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.last_fired = Some(deadline);
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// How long to wait for input before the next tick is due.
    #[must_use]
    pub fn timeout(&self, now: Instant) -> Duration {
        self.deadline
            .map_or(IDLE_POLL, |deadline| deadline.saturating_duration_since(now))
    }
}

/// Translate a key press into a timer event.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Event::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Event::Quit),

        // Navigation - vim style
        KeyCode::Char('k') | KeyCode::Up => Some(Event::MoveUp),
        KeyCode::Char('j') | KeyCode::Down => Some(Event::MoveDown),
        KeyCode::Char('g') | KeyCode::Home => Some(Event::First),
        KeyCode::Char('G') | KeyCode::End => Some(Event::Last),

        KeyCode::Enter | KeyCode::Char('e') => Some(Event::Confirm),
        KeyCode::Char('p' | ' ') => Some(Event::PauseToggle),
        KeyCode::Esc | KeyCode::Char('s') => Some(Event::Abort),

        _ => None,
    }
}

/// Translate a terminal event into a timer event.
#[must_use]
pub fn map_event(event: term::Event) -> Option<Event> {
    match event {
        term::Event::Key(key) => map_key(key),
        term::Event::Resize(width, _) => Some(Event::Resize(width)),
        _ => None,
    }
}

/// Event source backed by crossterm input and a [`Ticker`].
#[derive(Debug)]
pub struct CrosstermEvents {
    ticker: Ticker,
}

impl CrosstermEvents {
    /// Create an event source ticking every `interval`.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            ticker: Ticker::new(interval),
        }
    }
}

impl EventSource for CrosstermEvents {
    fn schedule_tick(&mut self) {
        self.ticker.arm(Instant::now());
    }

    fn next_event(&mut self) -> Result<Event, PomoError> {
        loop {
            let now = Instant::now();
            if self.ticker.fire(now) {
                return Ok(Event::Tick);
            }

            if term::poll(self.ticker.timeout(now))
                .map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))?
            {
                let event = term::read()
                    .map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?;
                if let Some(event) = map_event(event) {
                    return Ok(event);
                }
            }
        }
    }
}
