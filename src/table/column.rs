//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use ratatui::text::Line;

use super::{CellValue, Record};

/// Placeholder shown for missing or empty values.
pub const PLACEHOLDER: &str = "-";

/// Custom cell renderer: receives the field value and the whole record.
pub type CellRenderer = Arc<dyn Fn(&CellValue, &Record) -> Line<'static> + Send + Sync>;

/// Describes one column of a table.
#[derive(Clone)]
pub struct Column {
    /// Field name looked up in each record.
    pub key: String,
    /// Header label.
    pub title: String,
    /// Whether selecting the header sorts by this column.
    pub sortable: bool,
    /// Fixed display width in terminal cells.
    pub width: Option<u16>,
    render: Option<CellRenderer>,
}

impl Column {
    /// Create a non-sortable column with no custom renderer.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            width: None,
            render: None,
        }
    }

    /// Mark the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a fixed display width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set a custom cell renderer.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &Record) -> Line<'static> + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// Whether a custom renderer is set.
    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }

    /// Render this column's cell for `record`.
    pub fn render_cell(&self, record: &Record) -> Line<'static> {
        let value = record.value(&self.key);
        match &self.render {
            Some(render) => render(value, record),
            None => Line::from(display_text(value)),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// Default textual form of a value: its string form, or a dash placeholder.
pub fn display_text(value: &CellValue) -> String {
    if value.is_placeholder() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}
