//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{CategoryBar, CouponDrawer, HelpPanel, HintBar, QuestionList, StatusBar};

use crate::config::Config;
use crate::state::Store;
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store, config: &Config) {
        let layout = Layout::new(frame.area(), &config.ui, store.coupon.drawer_open);

        if config.ui.show_status_bar {
            StatusBar::render(frame, layout.status_area, store);
        }
        CategoryBar::render(frame, layout.category_area, store);
        QuestionList::render(frame, layout.questions_area, store);

        if let Some(drawer_area) = layout.drawer_area {
            CouponDrawer::render(frame, drawer_area, store, &config.keybindings);
        }

        if config.ui.show_help_bar {
            HintBar::render(frame, layout.hint_area, store, &config.keybindings);
        }

        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), &config.keybindings);
        }

        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::builtin_questions;
    use crate::state::{Action, Side};
    use ratatui::{Terminal, backend::TestBackend};
    use tokio::sync::mpsc;

    fn screen_text(store: &Store) -> String {
        screen_text_with(store, &Config::default())
    }

    fn screen_text_with(store: &Store, config: &Config) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| Ui::render(frame, store, config))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_question_list() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let store = Store::new(tx, builtin_questions(), &Config::default());

        let text = screen_text(&store);
        assert!(text.contains("Predict (12)"));
        assert!(text.contains("Coupon 0/5"));
    }

    #[test]
    fn test_renders_coupon_summary() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx, builtin_questions(), &Config::default());
        store.reduce(Action::Vote {
            question_id: 6,
            side: Side::Yes,
        });
        store.reduce(Action::Vote {
            question_id: 7,
            side: Side::No,
        });

        let text = screen_text(&store);
        assert!(text.contains("Coupon (2/5)"));
        assert!(text.contains("3.18"));
        assert!(text.contains("32 credits"));
        assert!(text.contains("Enter submit · x remove · Ctrl+x clear"));
    }

    #[test]
    fn test_drawer_hints_follow_keybindings() {
        let mut config = Config::default();
        config.keybindings.submit = "s".to_string();
        config.keybindings.remove_selection = "d".to_string();
        config.keybindings.vote_yes = "l".to_string();
        config.keybindings.vote_no = "h".to_string();

        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx, builtin_questions(), &config);
        store.reduce(Action::ToggleCoupon);
        let text = screen_text_with(&store, &config);
        assert!(text.contains("Press l or h on a question"));

        store.reduce(Action::Vote {
            question_id: 6,
            side: Side::Yes,
        });
        let text = screen_text_with(&store, &config);
        assert!(text.contains("s submit · d remove · Ctrl+x clear"));
    }
}
