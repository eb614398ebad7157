//! User interface components and views.
//!
//! Rendering only; all state lives in `App` and `DataTable`.

mod components;
pub mod theme;
mod views;

pub use components::{
    header_label, render_context_help, render_data_table, render_summary, NotificationManager,
    TableFocus, EMPTY_MESSAGE,
};
pub use theme::Theme;
pub use views::{HelpAction, HelpView};
