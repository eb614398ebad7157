//! Column sets and cell renderers for each dataset.

use ratatui::text::Line;

use super::format::{format_brl, format_date, status_label};
use crate::table::{display_text, CellValue, Column};
use crate::ui::theme::badge;

/// A sortable column showing dates as `dd/mm/yyyy`.
fn date_column(key: &str, title: &str) -> Column {
    Column::new(key, title)
        .sortable()
        .width(12)
        .render(|value, _| match value {
            CellValue::Date(date) => Line::from(format_date(date)),
            other => Line::from(display_text(other)),
        })
}

/// A sortable column showing numbers as reais.
fn money_column(key: &str, title: &str) -> Column {
    Column::new(key, title)
        .sortable()
        .width(14)
        .render(|value, _| match value {
            CellValue::Number(n) => Line::from(format_brl(*n)),
            CellValue::Integer(i) => Line::from(format_brl(*i as f64)),
            other => Line::from(display_text(other)),
        })
}

/// A sortable column showing a status keyword as a colored badge.
fn status_column(key: &str, title: &str) -> Column {
    Column::new(key, title)
        .sortable()
        .width(12)
        .render(|value, _| match value {
            CellValue::Text(status) if !status.is_empty() => badge(status_label(status), status),
            other => Line::from(display_text(other)),
        })
}

/// A column joining list values with commas.
fn list_column(key: &str, title: &str) -> Column {
    Column::new(key, title).render(|value, _| match value {
        CellValue::List(items) if !items.is_empty() => Line::from(
            items
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        CellValue::List(_) => Line::from(crate::table::PLACEHOLDER),
        other => Line::from(display_text(other)),
    })
}

pub fn client_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("cnpj", "CNPJ").width(20),
        Column::new("email", "Email"),
        Column::new("plan", "Plan").sortable().width(11),
        status_column("status", "Status"),
        date_column("next_due_date", "Next due"),
    ]
}

pub fn payment_columns() -> Vec<Column> {
    vec![
        Column::new("description", "Description").sortable(),
        Column::new("client", "Client").sortable(),
        money_column("amount", "Amount"),
        Column::new("method", "Method").sortable().width(14),
        status_column("status", "Status"),
        date_column("due_date", "Due date"),
    ]
}

pub fn employee_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("position", "Position").sortable(),
        Column::new("client", "Client").sortable(),
        money_column("salary", "Salary"),
        list_column("benefits", "Benefits"),
        status_column("status", "Status"),
    ]
}

pub fn task_columns() -> Vec<Column> {
    vec![
        Column::new("title", "Title").sortable(),
        status_column("status", "Status"),
        // Sorted by urgency rank, displayed from the keyword field.
        Column::new("priority_rank", "Priority")
            .sortable()
            .width(10)
            .render(|_, record| match record.value("priority") {
                CellValue::Text(p) => badge(status_label(p), p),
                other => Line::from(display_text(other)),
            }),
        Column::new("assigned_to", "Assignee").sortable(),
        date_column("due_date", "Due date"),
    ]
}

pub fn document_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("type", "Type").sortable().width(12),
        Column::new("client", "Client").sortable(),
        date_column("uploaded_at", "Uploaded"),
        status_column("status", "Status"),
        list_column("tags", "Tags"),
    ]
}
