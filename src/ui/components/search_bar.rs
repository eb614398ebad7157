//! Search input for the data table.
//!
//! Shows the current query (or a placeholder), the number of matching
//! records, and highlights matches inside plain cells.

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::table::DataTable;
use crate::ui::theme::Theme;

/// Highlight case-insensitive occurrences of `query` in `text`.
///
/// Returns a Line with highlighted spans for matches. Text whose lowercase
/// form changes byte length is returned unhighlighted.
pub fn highlight_text(text: &str, query: &str) -> Line<'static> {
    if query.is_empty() {
        return Line::from(text.to_string());
    }

    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();
    if text_lower.len() != text.len() {
        return Line::from(text.to_string());
    }

    let mut spans = Vec::new();
    let mut last_end = 0;

    for (start, matched) in text_lower.match_indices(&query_lower) {
        let end = start + matched.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            continue;
        }

        if start > last_end {
            spans.push(Span::raw(text[last_end..start].to_string()));
        }

        // Keep the original casing of the matched text
        spans.push(Span::styled(
            text[start..end].to_string(),
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));

        last_end = end;
    }

    if last_end < text.len() {
        spans.push(Span::raw(text[last_end..].to_string()));
    }

    if spans.is_empty() {
        Line::from(text.to_string())
    } else {
        Line::from(spans)
    }
}

/// The text shown in the search line.
fn search_line(table: &DataTable, active: bool, result_count: usize, theme: &Theme) -> Line<'static> {
    let query_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(theme.fg)
    };

    let query = if table.search().is_empty() && !active {
        Span::styled(table.search_placeholder().to_string(), theme.muted_style())
    } else {
        Span::styled(table.search().to_string(), query_style)
    };

    Line::from(vec![
        Span::styled("/", query_style),
        query,
        Span::raw("  "),
        Span::styled(format!("{} result(s)", result_count), theme.muted_style()),
    ])
}

/// Render the search line for `table` at the given area.
///
/// Nothing is rendered for tables that are not searchable.
pub fn render_search_bar(
    frame: &mut Frame,
    area: Rect,
    table: &DataTable,
    active: bool,
    result_count: usize,
    theme: &Theme,
) {
    if !table.is_searchable() {
        return;
    }

    let widget = Paragraph::new(search_line(table, active, result_count, theme));
    frame.render_widget(widget, area);

    if active {
        let offset = 1 + table.search().chars().count() as u16;
        frame.set_cursor_position(Position::new(
            area.x + offset.min(area.width.saturating_sub(1)),
            area.y,
        ));
    }
}
