//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

use crate::config::UiConfig;

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Category filter bar.
    pub category_area: Rect,
    /// Question list.
    pub questions_area: Rect,
    /// Coupon drawer, when open.
    pub drawer_area: Option<Rect>,
    /// Key hint line (bottom).
    pub hint_area: Rect,
    /// Notification area (overlaid).
    pub notification_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, ui: &UiConfig, drawer_open: bool) -> Self {
        let status_height = u16::from(ui.show_status_bar);
        let hint_height = u16::from(ui.show_help_bar);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(status_height), // Status bar
                Constraint::Length(1),             // Category bar
                Constraint::Min(0),                // Main content
                Constraint::Length(hint_height),   // Key hints
            ])
            .split(area);

        let (questions_area, drawer_area) = if drawer_open {
            let main = RatatuiLayout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[2]);
            (main[0], Some(main[1]))
        } else {
            (chunks[2], None)
        };

        let notification_area = Rect {
            x: area.width / 4,
            y: (area.height / 2).saturating_sub(2),
            width: area.width / 2,
            height: 3.min(area.height),
        };

        Self {
            status_area: chunks[0],
            category_area: chunks[1],
            questions_area,
            drawer_area,
            hint_area: chunks[3],
            notification_area,
        }
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_splits_main_area() {
        let area = Rect::new(0, 0, 100, 30);
        let closed = Layout::new(area, &UiConfig::default(), false);
        assert!(closed.drawer_area.is_none());
        assert_eq!(closed.questions_area.width, 100);

        let open = Layout::new(area, &UiConfig::default(), true);
        let drawer = open.drawer_area.unwrap();
        assert_eq!(open.questions_area.width + drawer.width, 100);
        assert_eq!(open.questions_area.height, 27);
    }

    #[test]
    fn test_hidden_bars_take_no_space() {
        let ui = UiConfig {
            show_status_bar: false,
            show_help_bar: false,
            ..UiConfig::default()
        };
        let layout = Layout::new(Rect::new(0, 0, 80, 20), &ui, false);
        assert_eq!(layout.status_area.height, 0);
        assert_eq!(layout.hint_area.height, 0);
        assert_eq!(layout.questions_area.height, 19);
    }

    #[test]
    fn test_tiny_terminal_does_not_underflow() {
        let layout = Layout::new(Rect::new(0, 0, 10, 2), &UiConfig::default(), true);
        assert_eq!(layout.notification_area.y, 0);
        assert!(layout.notification_area.height <= 2);
    }
}
