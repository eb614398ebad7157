//! Crossterm polling loop source.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};

use super::Event;
use crate::config::Settings;

/// Polls crossterm and turns terminal input into [`Event`]s.
#[derive(Debug)]
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.tick_rate_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Block until input arrives or the tick rate elapses.
    ///
    /// Key releases (reported on some platforms) and input the app does not
    /// use (mouse, focus, paste) come back as `Event::Tick`.
    pub fn next(&self) -> std::io::Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }

        Ok(match event::read()? {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Event::Key(key),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        })
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
