//! Notification rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{Notification, NotificationLevel};

/// Render a transient notification popup over `area`.
pub fn render_notification(frame: &mut Frame, area: Rect, notification: &Notification) {
    let (color, icon, title) = match notification.level {
        NotificationLevel::Info => (Color::Cyan, "ℹ", " Info "),
        NotificationLevel::Success => (Color::Green, "✓", " Done "),
        NotificationLevel::Warning => (Color::Yellow, "⚠", " Heads up "),
        NotificationLevel::Error => (Color::Red, "✗", " Error "),
    };

    let content = Line::from(vec![
        Span::styled(
            format!("{icon} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(notification.message.as_str()),
    ]);

    let popup = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(color)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
