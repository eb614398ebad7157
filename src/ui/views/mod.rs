//! Full-screen and overlay views.

mod help;

pub use help::{HelpAction, HelpView};
