//! Reusable UI components.

mod help_bar;
mod notification;
mod search_bar;
mod summary;
mod table;

pub use help_bar::render_context_help;
pub use notification::NotificationManager;
pub use summary::render_summary;
pub use table::{header_label, render_data_table, TableFocus, EMPTY_MESSAGE};
