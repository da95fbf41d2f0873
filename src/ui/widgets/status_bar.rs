//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{MAX_SELECTIONS, Store};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let odds_mode = if store.app.is_boosted() {
            Span::styled(
                format!(" Boosted x{} ", store.app.boost_multiplier),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" Standard odds ", Style::default().fg(Color::Yellow))
        };

        let coupon = &store.coupon.coupon;
        let coupon_style = if coupon.is_full() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        let coupon_status = Span::styled(
            format!(" Coupon {}/{} ", coupon.len(), MAX_SELECTIONS),
            coupon_style,
        );

        let receipt = match &store.coupon.last_receipt {
            Some(receipt) => Span::styled(
                format!(
                    " Last coupon {} @ {} ",
                    receipt.potential_payout,
                    receipt.submitted_at.format("%H:%M")
                ),
                Style::default().fg(Color::DarkGray),
            ),
            None => Span::raw(""),
        };

        let spans = vec![
            Span::styled(
                " Sence ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            odds_mode,
            Span::raw(" | "),
            coupon_status,
            receipt,
        ];

        let paragraph =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

        frame.render_widget(paragraph, area);
    }
}
