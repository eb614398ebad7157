//! Plain-text rendering of a table page for the `export` command.

use std::fmt;
use std::str::FromStr;

use ratatui::text::Line;

use crate::table::{DataTable, SortDirection};
use crate::ui::{header_label, EMPTY_MESSAGE};

const MIN_WIDTH: usize = 3;
const MAX_WIDTH: usize = 40;

/// A `--sort` argument: `key` or `key:asc` / `key:desc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, direction) = match s.split_once(':') {
            None => (s, SortDirection::Ascending),
            Some((key, "asc")) => (key, SortDirection::Ascending),
            Some((key, "desc")) => (key, SortDirection::Descending),
            Some((_, other)) => {
                return Err(format!("sort direction must be 'asc' or 'desc', got '{}'", other))
            }
        };
        if key.is_empty() {
            return Err("sort key is empty".to_string());
        }
        Ok(Self {
            key: key.to_string(),
            direction,
        })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.direction.as_str())
    }
}

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Render the current page of `table` as aligned columns.
///
/// Cells go through the column renderers, so currency and dates look the
/// same as in the terminal UI.
pub fn render_page(table: &DataTable) -> String {
    let page = table.page();
    let headers: Vec<String> = table
        .columns()
        .iter()
        .map(|c| header_label(c, table.sort()))
        .collect();
    let rows: Vec<Vec<String>> = page
        .rows
        .iter()
        .map(|record| {
            table
                .columns()
                .iter()
                .map(|c| line_text(&c.render_cell(record)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .clamp(MIN_WIDTH, MAX_WIDTH)
        })
        .collect();

    let join = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| fit(cell, *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&join(&headers));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');

    if page.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
    }
    for row in &rows {
        out.push_str(&join(row));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&page.result_count_label());
    if page.shows_pagination() {
        out.push_str(&format!(" · {} · {}", page.range_label(), page.page_label()));
    }
    out.push('\n');
    out
}
