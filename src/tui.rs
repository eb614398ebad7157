//! Terminal setup, the draw/update loop, and restore.

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error};

use crate::app::App;
use crate::error::{AppError, Result};
use crate::events::EventHandler;

type Term = Terminal<CrosstermBackend<Stdout>>;

fn setup() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn event_loop(terminal: &mut Term, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit() {
        terminal
            .draw(|frame| app.view(frame))
            .map_err(|e| AppError::terminal(e.to_string()))?;
        let event = events
            .next()
            .map_err(|e| AppError::terminal(e.to_string()))?;
        app.update(event);
    }
    Ok(())
}

/// Run `app` until it quits. The terminal is restored even on error.
pub fn run(app: &mut App, events: &EventHandler) -> Result<()> {
    let mut terminal = setup().map_err(|e| AppError::terminal(e.to_string()))?;
    debug!(tick_rate = ?events.tick_rate(), "Terminal ready");

    let outcome = event_loop(&mut terminal, app, events);
    if let Err(e) = restore(&mut terminal) {
        error!(error = %e, "Failed to restore terminal");
    }
    outcome?;

    match app.fatal_error() {
        Some(message) => Err(AppError::other(message)),
        None => Ok(()),
    }
}
