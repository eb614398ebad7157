//! File logging through `tracing`.
//!
//! The TUI owns stdout, so everything goes to a daily-rotated file under the
//! platform data directory (`~/.local/share/ledgerdesk/logs` on Linux).
//! `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=ledgerdesk=debug`
//! to see sort and page transitions.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILTER: &str = "ledgerdesk=info,warn";

const LOG_FILE_PREFIX: &str = "ledgerdesk.log";

/// Install the global subscriber. Call once, before anything logs.
pub fn init() -> anyhow::Result<()> {
    let log_dir = log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), log_dir = %log_dir.display(), "LedgerDesk starting");
    Ok(())
}

fn log_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir().context("could not determine local data directory")?;
    Ok(base.join("ledgerdesk").join("logs"))
}

/// Where log files are written, for `whoami` and error hints.
pub fn log_directory() -> Option<PathBuf> {
    log_dir().ok()
}

pub fn shutdown() {
    tracing::info!("LedgerDesk shutting down");
}
