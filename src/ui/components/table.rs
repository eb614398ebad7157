//! Data table widget: search line, sortable header, page rows and pagination.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::search_bar::{highlight_text, render_search_bar};
use crate::table::{display_text, Column, DataTable, PageView, SortState};
use crate::ui::theme::Theme;

/// Message shown in place of rows when nothing matches.
pub const EMPTY_MESSAGE: &str = "No results found";

/// Indicator for sortable columns that are not the active sort.
const SORTABLE_INDICATOR: &str = "↕";

/// Header label for a column, including its sort indicator.
pub fn header_label(column: &Column, sort: Option<&SortState>) -> String {
    if !column.sortable {
        return column.title.clone();
    }
    match sort {
        Some(s) if s.key == column.key => format!("{} {}", column.title, s.direction.indicator()),
        _ => format!("{} {}", column.title, SORTABLE_INDICATOR),
    }
}

/// Pagination summary and controls. Disabled controls are dimmed.
pub fn pagination_line(page: &PageView<'_>, theme: &Theme) -> Line<'static> {
    let enabled = Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD);
    let disabled = theme.muted_style();
    let back = if page.can_go_back() { enabled } else { disabled };
    let forward = if page.can_go_forward() { enabled } else { disabled };

    Line::from(vec![
        Span::styled("«", back),
        Span::raw(" "),
        Span::styled("‹", back),
        Span::raw(" "),
        Span::raw(page.page_label()),
        Span::raw(" "),
        Span::styled("›", forward),
        Span::raw(" "),
        Span::styled("»", forward),
    ])
}

fn column_constraint(column: &Column) -> Constraint {
    match column.width {
        Some(width) => Constraint::Length(width),
        None => Constraint::Fill(1),
    }
}

fn render_row(columns: &[Column], record: &crate::table::Record, highlight: &str) -> Row<'static> {
    let cells: Vec<Cell> = columns
        .iter()
        .map(|column| {
            if column.has_renderer() || highlight.is_empty() {
                Cell::from(column.render_cell(record))
            } else {
                Cell::from(highlight_text(&display_text(record.value(&column.key)), highlight))
            }
        })
        .collect();
    Row::new(cells)
}

/// Where keyboard focus sits inside the table widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableFocus {
    /// Header column under the column cursor.
    pub column: usize,
    /// Highlighted row of the current page.
    pub row: Option<usize>,
    /// Whether the search line has the text cursor.
    pub searching: bool,
}

/// Render `table` into `area`.
pub fn render_data_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    table: &DataTable,
    focus: TableFocus,
    theme: &Theme,
) {
    let page = table.page();

    let mut constraints = Vec::with_capacity(3);
    if table.is_searchable() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(3));
    if page.shows_pagination() {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut index = 0;
    if table.is_searchable() {
        render_search_bar(frame, chunks[0], table, focus.searching, page.total_count, theme);
        index += 1;
    }
    let table_area = chunks[index];

    let header = Row::new(table.columns().iter().enumerate().map(|(i, column)| {
        let style = if i == focus.column {
            theme.header_cursor_style()
        } else {
            theme.header_style()
        };
        Cell::from(header_label(column, table.sort())).style(style)
    }))
    .style(theme.header_style())
    .bottom_margin(1);

    let highlight = if table.is_searchable() { table.search() } else { "" };
    let rows: Vec<Row> = page
        .rows
        .iter()
        .map(|record| render_row(table.columns(), record, highlight))
        .collect();

    let widths: Vec<Constraint> = table.columns().iter().map(column_constraint).collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted_style())
        .title(format!(" {} ", title));
    let inner = block.inner(table_area);

    let widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .highlight_style(theme.selected_style())
        .highlight_symbol("> ");
    let mut state = TableState::default().with_selected(focus.row.filter(|_| !page.is_empty()));
    frame.render_stateful_widget(widget, table_area, &mut state);

    if page.is_empty() && inner.height > 2 {
        let body = Rect::new(inner.x, inner.y + 2, inner.width, inner.height - 2);
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .style(theme.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(empty, body);
    }

    if page.shows_pagination() {
        let footer = chunks[index + 1];
        let controls = pagination_line(&page, theme);
        let controls_width = controls.width() as u16;
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(controls_width)])
            .split(footer);

        frame.render_widget(
            Paragraph::new(page.range_label()).style(theme.muted_style()),
            parts[0],
        );
        frame.render_widget(Paragraph::new(controls), parts[1]);
    }
}
