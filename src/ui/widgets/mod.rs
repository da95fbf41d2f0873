//! TUI widgets.

mod category_bar;
mod coupon_drawer;
mod help;
mod notifications;
mod question_list;
mod status_bar;

pub use category_bar::CategoryBar;
pub use coupon_drawer::CouponDrawer;
pub use help::{HelpPanel, HintBar};
pub use notifications::render_notification;
pub use question_list::QuestionList;
pub use status_bar::StatusBar;

/// Shorten `s` to at most `max_len` characters, ending in "..." when cut.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
