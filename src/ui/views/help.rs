//! Help overlay listing the keyboard shortcuts of every context.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::events::keybindings_grouped;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpAction {
    Close,
}

/// Scrollable help panel.
#[derive(Debug, Default)]
pub struct HelpView {
    scroll: usize,
    /// Inner height of the last render, used to bound scrolling.
    visible_height: usize,
}

impl HelpView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    fn max_scroll(&self) -> usize {
        content_lines(&Theme::default())
            .len()
            .saturating_sub(self.visible_height)
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<HelpAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _)
            | (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('?'), _) => Some(HelpAction::Close),
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
                None
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    /// Render as a centered overlay on top of `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let width = 60.min(area.width);
        let height = 24.min(area.height);
        let popup = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Keyboard shortcuts ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.highlight));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        self.visible_height = inner.height as usize;
        self.scroll = self.scroll.min(self.max_scroll());

        let paragraph = Paragraph::new(content_lines(theme)).scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, inner);
    }
}

fn content_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (context, bindings) in keybindings_grouped() {
        lines.push(Line::from(Span::styled(
            format!("── {} ──", context.title()),
            Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
        )));
        for binding in bindings {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>13}", binding.keys),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(binding.description),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines
}
