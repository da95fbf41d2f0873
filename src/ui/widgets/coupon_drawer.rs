//! Coupon drawer widget.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::config::KeyBindings;
use crate::state::{MAX_SELECTIONS, Side, Store};

use super::truncate_string;

/// Coupon drawer widget.
pub struct CouponDrawer;

impl CouponDrawer {
    /// Render the coupon drawer.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let coupon = &store.coupon.coupon;

        let block = Block::default()
            .title(format!(" Coupon ({}/{}) ", coupon.len(), MAX_SELECTIONS))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(inner);

        if coupon.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                format!(
                    "No predictions yet. Press {} or {} on a question.",
                    keys.vote_yes, keys.vote_no
                ),
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(empty, chunks[0]);
        } else {
            Self::render_selections(frame, chunks[0], store);
        }

        Self::render_summary(frame, chunks[1], store, keys);
    }

    fn render_selections(frame: &mut Frame, area: Rect, store: &Store) {
        let header_cells = ["Question", "Pick", "Odds"].iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1);

        let rows = store.coupon.coupon.selections().iter().map(|selection| {
            let side_style = match selection.side {
                Side::Yes => Style::default().fg(Color::Green),
                Side::No => Style::default().fg(Color::Red),
            };

            Row::new(vec![
                Cell::from(truncate_string(&selection.title, 30)),
                Cell::from(selection.side.to_string()).style(side_style),
                Cell::from(format!("{:.2}", selection.odds)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(65),
                Constraint::Length(5),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(store.coupon.selected_index);

        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_summary(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let quote = store.coupon.quote();
        let label = Style::default().fg(Color::DarkGray);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Total odds   ", label),
                Span::styled(
                    quote.display_odds(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Stake        ", label),
                Span::raw(format!("{} credits", quote.stake)),
            ]),
            Line::from(vec![
                Span::styled("Payout       ", label),
                Span::styled(
                    format!("{} credits", quote.potential_payout),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let status = if store.coupon.submitting {
            Span::styled(
                "Submitting...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(
                format!(
                    "{} submit · {} remove · {} clear",
                    keys.submit, keys.remove_selection, keys.clear_coupon
                ),
                label,
            )
        };
        lines.push(Line::from(status));

        frame.render_widget(Paragraph::new(lines), area);
    }
}
