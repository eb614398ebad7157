//! Generic tabular data model.
//!
//! This module holds the display-independent part of the data table:
//! records, column descriptors, and the search/sort/pagination state.
//! Rendering lives in `ui::components::table`.

mod column;
mod record;
mod state;
mod value;

pub use column::{display_text, Column, PLACEHOLDER};
pub use record::Record;
pub use state::{
    DataTable, PageView, SortDirection, SortState, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_PLACEHOLDER,
};
pub use value::CellValue;
