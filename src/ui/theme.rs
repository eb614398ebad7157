//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Color theme for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Highlight color for selected items.
    pub highlight: Color,
    /// Secondary text (hints, counters, disabled controls).
    pub muted: Color,
    /// Table header background.
    pub header_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            highlight: Color::Cyan,
            muted: Color::DarkGray,
            header_bg: Color::Rgb(40, 44, 52),
        }
    }
}

impl Theme {
    /// Style for secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the table header row.
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected table row.
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the header cell under the column cursor.
    pub fn header_cursor_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }
}

/// Color associated with a status keyword.
pub fn status_color(status: &str) -> Color {
    match status {
        "active" | "paid" | "done" | "processed" | "low" => Color::Green,
        "pending" | "inprogress" | "medium" | "sent" => Color::Yellow,
        "overdue" | "inactive" | "high" => Color::Red,
        "todo" => Color::Blue,
        _ => Color::Gray,
    }
}

/// A colored badge for a status keyword.
pub fn badge(label: impl Into<String>, status: &str) -> Line<'static> {
    Line::from(Span::styled(
        label.into(),
        Style::default()
            .fg(status_color(status))
            .add_modifier(Modifier::BOLD),
    ))
}
