//! Table view state: search, sort and pagination over an in-memory record list.
//!
//! Every view is recomputed from scratch in a fixed order: filter, then sort,
//! then paginate. The input records and columns are never mutated.

use tracing::{debug, trace};

use super::{Column, Record};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default placeholder shown in an empty search input.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    /// Short name used in logs and the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// The active sort: a single column and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Field name being sorted.
    pub key: String,
    /// Sort direction.
    pub direction: SortDirection,
}

/// A searchable, sortable, paginated table over a list of records.
#[derive(Debug, Clone)]
pub struct DataTable {
    records: Vec<Record>,
    columns: Vec<Column>,
    searchable: bool,
    search_placeholder: String,
    page_size: usize,
    search: String,
    sort: Option<SortState>,
    current_page: usize,
}

impl DataTable {
    /// Create a table with default settings: searchable, 10 rows per page,
    /// no sort, page 1 and an empty search.
    pub fn new(records: Vec<Record>, columns: Vec<Column>) -> Self {
        Self {
            records,
            columns,
            searchable: true,
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            sort: None,
            current_page: 1,
        }
    }

    /// Enable or disable searching.
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self.clamp_page();
        self
    }

    /// Set the search input placeholder.
    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Set the page size. Zero is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.clamp_page();
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The column descriptors, in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Whether searching is enabled.
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Placeholder for the search input.
    pub fn search_placeholder(&self) -> &str {
        &self.search_placeholder
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current sort, if any.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Replace the input records.
    ///
    /// Search, sort and page are kept; the page is re-clamped to the new data.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.clamp_page();
    }

    /// Replace the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        trace!(search = %self.search, "Search updated");
        self.clamp_page();
    }

    /// Append a character to the search text.
    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.clamp_page();
    }

    /// Remove the last character of the search text.
    pub fn pop_search_char(&mut self) -> Option<char> {
        let popped = self.search.pop();
        self.clamp_page();
        popped
    }

    /// Clear the search text.
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.clamp_page();
    }

    /// Toggle sorting on the column with `key`.
    ///
    /// A new column starts ascending; the same column flips direction.
    /// Returns `false` (and changes nothing) if the column is unknown or not
    /// sortable.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.key == key && c.sortable);
        if !sortable {
            return false;
        }

        let direction = match &self.sort {
            Some(current) if current.key == key => current.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        debug!(column = key, direction = direction.as_str(), "Sort changed");
        self.sort = Some(SortState {
            key: key.to_string(),
            direction,
        });
        true
    }

    /// Toggle sorting on the column at `index` (0-based display position).
    pub fn toggle_sort_at(&mut self, index: usize) -> bool {
        match self.columns.get(index).map(|c| c.key.clone()) {
            Some(key) => self.toggle_sort(&key),
            None => false,
        }
    }

    /// Set an explicit sort. Ignored if the column is not sortable.
    pub fn set_sort(&mut self, key: &str, direction: SortDirection) -> bool {
        if !self.columns.iter().any(|c| c.key == key && c.sortable) {
            return false;
        }
        self.sort = Some(SortState {
            key: key.to_string(),
            direction,
        });
        true
    }

    /// Remove the active sort.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Change the page size (zero is treated as one) and re-clamp the page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp_page();
        debug!(
            page_size = self.page_size,
            total_pages = self.total_pages(),
            "Page size changed"
        );
    }

    /// Jump to `page`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.current_page = page.clamp(1, total);
        trace!(page = self.current_page, total_pages = total, "Page changed");
    }

    /// Jump to the first page.
    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    /// Go back one page.
    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    /// Go forward one page.
    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    /// Jump to the last page.
    pub fn last_page(&mut self) {
        self.go_to_page(self.total_pages());
    }

    fn clamp_page(&mut self) {
        self.go_to_page(self.current_page());
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    /// Indices of records that pass the search filter, in input order.
    pub fn filtered_indices(&self) -> Vec<usize> {
        if !self.searchable || self.search.is_empty() {
            return (0..self.records.len()).collect();
        }

        let needle = self.search.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.matches(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of records that pass the search filter.
    pub fn filtered_count(&self) -> usize {
        self.filtered_indices().len()
    }

    /// Filtered indices ordered by the active sort.
    ///
    /// The sort is stable: ties keep their filtered order in both directions.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices = self.filtered_indices();
        if let Some(sort) = &self.sort {
            indices.sort_by(|&a, &b| {
                let ord = self.records[a]
                    .value(&sort.key)
                    .compare(self.records[b].value(&sort.key));
                match sort.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        indices
    }

    /// Number of pages, never less than one.
    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size).max(1)
    }

    /// Compute the rows for the current page.
    pub fn page(&self) -> PageView<'_> {
        let sorted = self.sorted_indices();
        let total_count = sorted.len();
        let total_pages = total_count.div_ceil(self.page_size).max(1);
        let current_page = self.current_page.clamp(1, total_pages);
        let start = (current_page - 1) * self.page_size;

        let rows = sorted
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&i| &self.records[i])
            .collect();

        PageView {
            rows,
            current_page,
            total_pages,
            page_size: self.page_size,
            total_count,
            start,
        }
    }
}

/// The rows visible on one page plus the pagination summary.
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    /// Records on this page, in display order.
    pub rows: Vec<&'a Record>,
    /// 1-based page number.
    pub current_page: usize,
    /// Total number of pages (at least one).
    pub total_pages: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Number of records after filtering.
    pub total_count: usize,
    /// 0-based offset of the first row on this page.
    pub start: usize,
}

impl PageView<'_> {
    /// Whether the page has no rows (the empty-state row is shown instead).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Pagination controls are only shown when there is more than one page.
    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    /// Whether first/previous are enabled.
    pub fn can_go_back(&self) -> bool {
        self.current_page > 1
    }

    /// Whether next/last are enabled.
    pub fn can_go_forward(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// "N result(s)" counter shown beside the search input.
    pub fn result_count_label(&self) -> String {
        format!("{} result(s)", self.total_count)
    }

    /// "Showing a to b of n results".
    pub fn range_label(&self) -> String {
        let end = (self.start + self.page_size).min(self.total_count);
        format!(
            "Showing {} to {} of {} results",
            self.start + 1,
            end,
            self.total_count
        )
    }

    /// "Page x of y".
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}
