//! One-line shortcut hints for the current key context.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::Theme;

pub fn render_context_help(frame: &mut Frame, area: Rect, context: KeyContext, theme: &Theme) {
    let line = Line::from(hint_spans(get_context_hints(context), theme));
    frame.render_widget(Paragraph::new(line), area);
}

/// Split a hint string into spans, coloring the `[key]` parts.
fn hint_spans(hints: &str, theme: &Theme) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme.highlight);
    let mut spans = Vec::new();
    let mut rest = hints;

    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']').map(|i| open + i) else {
            break;
        };
        if open > 0 {
            spans.push(Span::styled(rest[..open].to_string(), theme.muted_style()));
        }
        spans.push(Span::styled(rest[open..=close].to_string(), key_style));
        rest = &rest[close + 1..];
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), theme.muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_spans() {
        let theme = Theme::default();
        let spans = hint_spans("[/] search  [q] quit", &theme);
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["[/]", " search  ", "[q]", " quit"]);
        assert_eq!(spans[0].style.fg, Some(theme.highlight));
    }

    #[test]
    fn test_hint_spans_plain_and_empty() {
        let theme = Theme::default();
        assert!(hint_spans("", &theme).is_empty());
        assert_eq!(hint_spans("no keys", &theme).len(), 1);
        // An unclosed bracket is kept as plain text.
        assert_eq!(hint_spans("[oops", &theme).len(), 1);
    }
}
