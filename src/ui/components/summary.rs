//! Single-line dashboard summary shown above the table.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::data::Stat;
use crate::ui::theme::{status_color, Theme};

/// `title value (detail)` for each figure, separated by bars.
pub fn summary_line(stats: &[Stat], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(stats.len() * 5);
    for (i, stat) in stats.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", theme.muted_style()));
        }
        spans.push(Span::styled(
            format!("{} ", stat.title),
            Style::default().fg(theme.fg),
        ));
        spans.push(Span::styled(
            stat.value.clone(),
            Style::default()
                .fg(status_color(stat.status))
                .add_modifier(Modifier::BOLD),
        ));
        if !stat.detail.is_empty() {
            spans.push(Span::styled(
                format!(" ({})", stat.detail),
                theme.muted_style(),
            ));
        }
    }
    Line::from(spans)
}

pub fn render_summary(frame: &mut Frame, area: Rect, stats: &[Stat], theme: &Theme) {
    frame.render_widget(Paragraph::new(summary_line(stats, theme)), area);
}
