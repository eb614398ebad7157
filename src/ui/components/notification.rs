//! Toast notifications for transient feedback (role switched, save failed).

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Maximum number of toasts kept at once; older ones are dropped.
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    fn icon(self) -> &'static str {
        match self {
            NotificationKind::Info => "i",
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✗",
        }
    }

    pub fn color(self) -> Color {
        match self {
            NotificationKind::Info => Color::Blue,
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: Instant::now() + TOAST_DURATION,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    fn line(&self) -> Line<'static> {
        let style = Style::default().fg(self.kind.color());
        Line::from(vec![
            Span::styled(
                format!("{} ", self.kind.icon()),
                style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.message.clone(), style),
        ])
    }
}

/// Queue of live toasts, newest last.
#[derive(Debug, Default)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.queue.push_back(notification);
        while self.len() > MAX_TOASTS {
            self.queue.pop_front();
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationKind::Info));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationKind::Success));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationKind::Error));
    }

    /// Drop toasts that expired before `now`. Called on every tick.
    pub fn expire(&mut self, now: Instant) {
        self.queue.retain(|n| !n.is_expired_at(now));
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Live toasts, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.queue.iter()
    }

    /// Stack toasts in the bottom-right corner of `area`, one line each.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 44.min(area.width.saturating_sub(2));
        if self.is_empty() || width < 6 {
            return;
        }

        let mut bottom = area.y + area.height.saturating_sub(1);
        for notification in self.iter().rev() {
            if bottom < area.y + 3 {
                break;
            }
            let rect = Rect::new(
                area.x + area.width.saturating_sub(width + 1),
                bottom - 3,
                width,
                3,
            );
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(notification.line()).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(notification.kind.color())),
                ),
                rect,
            );
            bottom -= 3;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_color() {
        assert_eq!(NotificationKind::Success.color(), Color::Green);
        assert_eq!(NotificationKind::Error.color(), Color::Red);
    }

    #[test]
    fn test_notification_expiry() {
        let n = Notification::new("Saved", NotificationKind::Success);
        let now = Instant::now();
        assert!(!n.is_expired_at(now));
        assert!(n.is_expired_at(now + TOAST_DURATION + Duration::from_millis(1)));
    }

    #[test]
    fn test_manager_caps_queue() {
        let mut manager = NotificationManager::new();
        manager.info("1");
        manager.success("2");
        manager.error("3");
        manager.info("4");
        assert_eq!(manager.len(), MAX_TOASTS);
        let messages: Vec<&str> = manager.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_manager_expire() {
        let mut manager = NotificationManager::new();
        manager.info("Role switched");
        manager.expire(Instant::now());
        assert_eq!(manager.len(), 1);
        manager.expire(Instant::now() + TOAST_DURATION * 2);
        assert!(manager.is_empty());
    }

    #[test]
    fn test_line_has_icon() {
        let n = Notification::new("Saved", NotificationKind::Success);
        let line = n.line();
        assert_eq!(line.spans[0].content, "✓ ");
        assert_eq!(line.spans[1].content, "Saved");
    }
}
