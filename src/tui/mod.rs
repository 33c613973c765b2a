//! Terminal User Interface (TUI) for pomotui.
//!
//! The event loop pulls one event at a time from an [`EventSource`], feeds it
//! through [`handle`], carries out the returned [`Command`] and hands the new
//! state to a [`Renderer`]. Built with ratatui and crossterm.

mod event;
mod ui;

pub use event::{map_event, map_key, CrosstermEvents, Ticker};

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{debug, error};

use crate::error::PomoError;
use crate::timer::{handle, Command, Event, TimerState};

/// Delivers input and tick events to the event loop.
#[cfg_attr(test, mockall::automock)]
pub trait EventSource {
    /// Arm the next tick one interval after the previous one.
    fn schedule_tick(&mut self);

    /// Block until the next event is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input cannot be read.
    fn next_event(&mut self) -> Result<Event, PomoError>;
}

/// Draws a snapshot of the timer state.
#[cfg_attr(test, mockall::automock)]
pub trait Renderer {
    /// Draw `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn render(&mut self, state: &TimerState) -> Result<(), PomoError>;
}

/// Renderer drawing into a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    /// Wrap a terminal.
    pub const fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, state: &TimerState) -> Result<(), PomoError> {
        self.terminal
            .draw(|frame| ui::render(frame, state))
            .map(|_| ())
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))
    }
}

/// Run the TUI until the user quits.
///
/// Returns the final state so the caller can report the session count.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize, draw, or read input.
pub fn run(state: TimerState, tick_interval: Duration) -> Result<TimerState, PomoError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(PomoError::Terminal(format!("Failed to setup terminal: {e}")));
    }

    let backend = CrosstermBackend::new(stdout);
    let result = Terminal::new(backend)
        .map_err(|e| PomoError::Terminal(format!("Failed to create terminal: {e}")))
        .and_then(|terminal| {
            let width = terminal.size().map(|size| size.width).unwrap_or_default();
            let state = TimerState { width, ..state };
            let mut renderer = TerminalRenderer::new(terminal);
            let mut events = CrosstermEvents::new(tick_interval);
            run_loop(state, &mut events, &mut renderer)
        });

    // Restore terminal
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show).ok();

    if let Err(ref e) = result {
        error!(error = %e, "event loop failed");
    }
    result
}

/// Run the main event loop.
///
/// Schedules the first tick, then renders and handles events one at a time
/// until a `Quit` command comes back.
///
/// # Errors
///
/// Returns the first error from the event source or the renderer.
pub fn run_loop<S, R>(
    mut state: TimerState,
    events: &mut S,
    renderer: &mut R,
) -> Result<TimerState, PomoError>
where
    S: EventSource,
    R: Renderer,
{
    events.schedule_tick();

    loop {
        renderer.render(&state)?;

        let event = events.next_event()?;
        let (next, command) = handle(state, event);
        state = next;

        match command {
            Command::ScheduleTick => events.schedule_tick(),
            Command::Quit => {
                debug!(sessions = state.sessions_completed, "event loop finished");
                return Ok(state);
            }
            Command::None => {}
        }
    }
}
