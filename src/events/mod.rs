//! Event handling for the application.
//!
//! Terminal input is polled by [`EventHandler`] and converted to [`Event`]s
//! that drive `App::update`.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;
pub use keys::{get_context_hints, keybindings_grouped, KeyContext};

/// An application event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized to (width, height).
    Resize(u16, u16),
    /// The tick rate elapsed with no input.
    Tick,
    /// Quit was requested from outside the key handler.
    Quit,
}
