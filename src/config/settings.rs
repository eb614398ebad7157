//! Application settings configuration.

use serde::{Deserialize, Serialize};

use crate::table::{DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_PLACEHOLDER};

/// Largest page size accepted from configuration or the command line.
pub const MAX_PAGE_SIZE: usize = 500;

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rows shown per table page.
    pub page_size: usize,
    /// Whether tables accept search input.
    pub searchable: bool,
    /// Placeholder shown in an empty search input.
    pub search_placeholder: String,
    /// Dataset opened on startup.
    pub default_dataset: String,
    /// Event loop tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            searchable: true,
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            default_dataset: "tasks".to_string(),
            tick_rate_ms: 100,
        }
    }
}
