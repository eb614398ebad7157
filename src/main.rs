//! LedgerDesk - a terminal dashboard for an accounting office.
//!
//! Browse clients, payments, payroll, tasks and documents in a searchable,
//! sortable, paginated table, or export a page as plain text.

mod app;
mod cli;
mod config;
mod data;
mod error;
mod events;
mod export;
mod logging;
mod session;
mod table;
mod tui;
mod ui;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("warning: file logging disabled: {:#}", e);
    }

    let result = cli::run(cli);
    logging::shutdown();

    result.map_err(|e| {
        tracing::error!(error = %e, "Command failed");
        match e.suggested_action() {
            Some(hint) => anyhow::anyhow!("{}\n{}", e.user_message(), hint),
            None => anyhow::anyhow!("{}", e.user_message()),
        }
    })
}
