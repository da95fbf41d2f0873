//! Question list widget.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::state::{Side, Store};

use super::truncate_string;

/// Question list widget.
pub struct QuestionList;

impl QuestionList {
    /// Render the question list.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let questions = store.catalog.filtered_questions();
        let mode = store.app.odds_mode;
        let boost = store.app.boost_multiplier;

        let header_cells = ["", "Question", "Category", "Yes", "No", "Crowd"]
            .iter()
            .map(|h| {
                Cell::from(*h).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let odds_style = if store.app.is_boosted() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let rows = questions.iter().map(|question| {
            let marker = match store.coupon.coupon.get(question.id).map(|s| s.side) {
                Some(Side::Yes) => Cell::from("✓Y").style(Style::default().fg(Color::Green)),
                Some(Side::No) => Cell::from("✓N").style(Style::default().fg(Color::Red)),
                None => Cell::from(""),
            };

            let cells = vec![
                marker,
                Cell::from(truncate_string(&question.title, 50)),
                Cell::from(question.category.to_string()).style(Style::default().fg(Color::Cyan)),
                Cell::from(format!("{:.2}", question.odds_for(Side::Yes, mode, boost)))
                    .style(odds_style.fg(Color::Green)),
                Cell::from(format!("{:.2}", question.odds_for(Side::No, mode, boost)))
                    .style(odds_style.fg(Color::Red)),
                Cell::from(format!(
                    "{}% / {}%",
                    question.yes_percentage,
                    question.no_percentage()
                )),
            ];

            Row::new(cells).height(1)
        });

        let title = match store.catalog.category_filter {
            Some(category) => format!(" Predict: {} ({}) ", category, questions.len()),
            None => format!(" Predict ({}) ", questions.len()),
        };
        let border_color = if store.coupon.drawer_open {
            Color::DarkGray
        } else {
            Color::Cyan
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Percentage(50),
                Constraint::Length(14),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(store.catalog.selected_index);

        frame.render_stateful_widget(table, area, &mut state);
    }
}
