//! Event handling for the interactive UI

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyEvent};
use std::time::Duration;

/// Input events delivered to the application loop
///
/// A `Tick` arrives whenever the poll window lapses without a key press;
/// ticks drive the filter debounce and message expiry.
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Event source polling the terminal with a short timeout
pub struct EventHandler {
    /// Timeout for polling events
    timeout: Duration,
}

impl EventHandler {
    /// Create a new EventHandler
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_millis(50),
        }
    }

    /// Get the next event: a key press, or a tick.
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.timeout)? {
            if let TermEvent::Key(key_event) = event::read()? {
                return Ok(Event::Key(key_event));
            }
            // Resize and similar terminal events fall through to a tick;
            // the next draw picks up the new size anyway.
        }
        Ok(Event::Tick)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
