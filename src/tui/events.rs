//! Event handling for the TUI.
//!
//! Keyboard and resize events come from crossterm; when nothing happens within
//! one tick interval a `Tick` is produced instead, which the runner uses to
//! advance the spinner and drain pipeline updates.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::Result;
use std::time::Duration;

use crate::config::TuiConfig;

/// Unified event type for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press (releases and repeats are folded into `Tick`)
    Key(KeyEvent),
    /// Poll interval elapsed, or an event we don't act on
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

impl From<CrosstermEvent> for Event {
    fn from(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
            _ => Event::Tick,
        }
    }
}

/// Polls crossterm on a blocking thread with a fixed tick interval.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    pub fn from_config(config: &TuiConfig) -> Self {
        Self::new(config.tick_rate_ms)
    }

    /// Wait up to one tick for the next event.
    pub async fn next(&self) -> Result<Event> {
        let tick_rate = self.tick_rate;

        tokio::task::spawn_blocking(move || -> Result<Event> {
            if event::poll(tick_rate)? {
                Ok(Event::from(event::read()?))
            } else {
                Ok(Event::Tick)
            }
        })
        .await?
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::from_config(&TuiConfig::default())
    }
}
