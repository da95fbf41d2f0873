//! Question catalog state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Question category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Football,
    Basketball,
    Esports,
    Crypto,
    Politics,
    Entertainment,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Football,
        Category::Basketball,
        Category::Esports,
        Category::Crypto,
        Category::Politics,
        Category::Entertainment,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Football => write!(f, "Football"),
            Self::Basketball => write!(f, "Basketball"),
            Self::Esports => write!(f, "Esports"),
            Self::Crypto => write!(f, "Crypto"),
            Self::Politics => write!(f, "Politics"),
            Self::Entertainment => write!(f, "Entertainment"),
        }
    }
}

/// Side of a binary question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Yes,
    No,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

/// How odds are presented and recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OddsMode {
    #[default]
    Standard,
    Boosted,
}

/// A yes/no prediction question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique question ID.
    pub id: u32,
    /// Question title.
    pub title: String,
    /// Category.
    pub category: Category,
    /// Payout multiplier if "yes" wins.
    pub yes_odds: Decimal,
    /// Payout multiplier if "no" wins.
    pub no_odds: Decimal,
    /// Share of the crowd voting yes (0-100). Informational only.
    pub yes_percentage: u8,
}

impl Question {
    /// Odds for one side, unboosted.
    pub fn odds(&self, side: Side) -> Decimal {
        match side {
            Side::Yes => self.yes_odds,
            Side::No => self.no_odds,
        }
    }

    /// Odds for one side under the given mode.
    pub fn odds_for(&self, side: Side, mode: OddsMode, boost_multiplier: Decimal) -> Decimal {
        match mode {
            OddsMode::Standard => self.odds(side),
            OddsMode::Boosted => self.odds(side) * boost_multiplier,
        }
    }

    /// Share of the crowd voting no.
    pub fn no_percentage(&self) -> u8 {
        100u8.saturating_sub(self.yes_percentage)
    }
}

/// State for the question catalog.
#[derive(Debug, Default)]
pub struct CatalogState {
    /// All questions.
    pub questions: Vec<Question>,
    /// Highlighted question index within the filtered list.
    pub selected_index: Option<usize>,
    /// Category filter.
    pub category_filter: Option<Category>,
}

impl CatalogState {
    /// Create catalog state over a fixed question list.
    pub fn new(questions: Vec<Question>) -> Self {
        let selected_index = if questions.is_empty() { None } else { Some(0) };
        Self {
            questions,
            selected_index,
            category_filter: None,
        }
    }

    /// Look up a question by ID.
    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Questions matching the current category filter.
    pub fn filtered_questions(&self) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| self.category_filter.is_none_or(|c| q.category == c))
            .collect()
    }

    /// The highlighted question.
    pub fn selected_question(&self) -> Option<&Question> {
        self.selected_index
            .and_then(|i| self.filtered_questions().get(i).copied())
    }

    /// Advance the category filter: all, then each category in turn, then all again.
    pub fn cycle_category(&mut self) {
        self.category_filter = match self.category_filter {
            None => Category::ALL.first().copied(),
            Some(current) => Category::ALL
                .iter()
                .position(|c| *c == current)
                .and_then(|i| Category::ALL.get(i + 1).copied()),
        };
        self.selected_index = if self.filtered_questions().is_empty() {
            None
        } else {
            Some(0)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn question(id: u32, category: Category) -> Question {
        Question {
            id,
            title: format!("Question {id}"),
            category,
            yes_odds: dec!(1.50),
            no_odds: dec!(2.40),
            yes_percentage: 64,
        }
    }

    #[test]
    fn test_odds_for_side() {
        let q = question(1, Category::Football);
        assert_eq!(q.odds(Side::Yes), dec!(1.50));
        assert_eq!(q.odds(Side::No), dec!(2.40));
        assert_eq!(q.no_percentage(), 36);
    }

    #[test]
    fn test_boosted_odds() {
        let q = question(1, Category::Football);
        assert_eq!(
            q.odds_for(Side::Yes, OddsMode::Boosted, dec!(1.2)),
            dec!(1.80)
        );
        assert_eq!(
            q.odds_for(Side::No, OddsMode::Standard, dec!(1.2)),
            dec!(2.40)
        );
    }

    #[test]
    fn test_category_filter() {
        let mut state = CatalogState::new(vec![
            question(1, Category::Football),
            question(2, Category::Crypto),
            question(3, Category::Football),
        ]);
        assert_eq!(state.filtered_questions().len(), 3);

        state.category_filter = Some(Category::Football);
        let ids: Vec<u32> = state.filtered_questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3]);

        state.selected_index = Some(1);
        assert_eq!(state.selected_question().map(|q| q.id), Some(3));
    }

    #[test]
    fn test_cycle_category_wraps_to_all() {
        let mut state = CatalogState::new(vec![question(1, Category::Football)]);
        state.cycle_category();
        assert_eq!(state.category_filter, Some(Category::Football));
        assert_eq!(state.selected_index, Some(0));

        state.cycle_category();
        assert_eq!(state.category_filter, Some(Category::Basketball));
        assert_eq!(state.selected_index, None);

        for _ in 0..Category::ALL.len() - 1 {
            state.cycle_category();
        }
        assert_eq!(state.category_filter, None);
        assert_eq!(state.selected_index, Some(0));
    }
}
