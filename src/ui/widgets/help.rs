//! Help panel and key hint widgets.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::config::KeyBindings;
use crate::state::Store;

use super::super::layout::centered_rect;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let mut help_text = section("Questions");
        help_text.extend([
            binding(&format!("{}/↓", keys.down), "Move down"),
            binding(&format!("{}/↑", keys.up), "Move up"),
            binding(&format!("{}/→", keys.vote_yes), "Vote yes (swipe right)"),
            binding(&format!("{}/←", keys.vote_no), "Vote no (swipe left)"),
            binding(keys.next_category.as_str(), "Next category"),
            binding(keys.toggle_boost.as_str(), "Toggle boosted odds"),
            Line::from(""),
        ]);
        help_text.extend(section("Coupon"));
        help_text.extend([
            binding(keys.toggle_coupon.as_str(), "Open/close coupon"),
            binding(keys.remove_selection.as_str(), "Remove selection"),
            binding(keys.clear_coupon.as_str(), "Clear coupon"),
            binding(keys.submit.as_str(), "Submit coupon"),
            Line::from(""),
        ]);
        help_text.extend(section("General"));
        help_text.extend([
            binding(keys.help.as_str(), "Toggle help"),
            binding("Esc", "Dismiss notification / close coupon"),
            binding(keys.quit.as_str(), "Quit"),
        ]);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}

/// One-line key hints for the current focus.
pub struct HintBar;

impl HintBar {
    /// Render the hint bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, keys: &KeyBindings) {
        let hints: Vec<(&str, &str)> = if store.coupon.drawer_open {
            vec![
                (keys.submit.as_str(), "submit"),
                (keys.remove_selection.as_str(), "remove"),
                (keys.clear_coupon.as_str(), "clear"),
                ("Esc", "close"),
            ]
        } else {
            vec![
                (keys.vote_yes.as_str(), "yes"),
                (keys.vote_no.as_str(), "no"),
                (keys.toggle_coupon.as_str(), "coupon"),
                (keys.toggle_boost.as_str(), "boost"),
                (keys.help.as_str(), "help"),
            ]
        };

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {key} "), Style::default().fg(Color::Cyan)),
                    Span::styled(format!("{label} "), Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn section(title: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ]
}

fn binding(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<8}"), Style::default().fg(Color::Cyan)),
        Span::raw(description.to_string()),
    ])
}
