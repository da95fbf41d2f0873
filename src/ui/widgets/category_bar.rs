//! Category filter bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{Category, Store};

/// Category filter bar widget.
pub struct CategoryBar;

impl CategoryBar {
    /// Render the category bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let current = store.catalog.category_filter;

        let tabs = std::iter::once(("All".to_string(), None))
            .chain(Category::ALL.iter().map(|c| (c.to_string(), Some(*c))));

        let mut spans = vec![Span::raw(" ")];

        for (name, category) in tabs {
            let style = if current == category {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::White)
            };

            spans.push(Span::styled(name, style));
            spans.push(Span::raw("  "));
        }

        spans.push(Span::styled("[Tab]", Style::default().fg(Color::DarkGray)));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
