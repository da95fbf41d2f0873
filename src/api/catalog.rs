//! Built-in question catalog.

use crate::state::{Category, Question};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn question(
    id: u32,
    title: &str,
    category: Category,
    yes_odds: Decimal,
    no_odds: Decimal,
    yes_percentage: u8,
) -> Question {
    Question {
        id,
        title: title.to_string(),
        category,
        yes_odds,
        no_odds,
        yes_percentage,
    }
}

/// The fixed list of questions shipped with the app.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        question(
            1,
            "Will Galatasaray beat Fenerbahce in the derby?",
            Category::Football,
            dec!(1.47),
            dec!(2.70),
            66,
        ),
        question(
            2,
            "Will the Lakers score more than 115 points tonight?",
            Category::Basketball,
            dec!(2.65),
            dec!(1.45),
            38,
        ),
        question(
            3,
            "Will Bitcoin close above $100k this Friday?",
            Category::Crypto,
            dec!(1.85),
            dec!(1.95),
            52,
        ),
        question(
            4,
            "Will Team Liquid reach the Major playoffs?",
            Category::Esports,
            dec!(2.10),
            dec!(1.70),
            45,
        ),
        question(
            5,
            "Will the season finale break streaming records?",
            Category::Entertainment,
            dec!(1.60),
            dec!(2.30),
            61,
        ),
        question(
            6,
            "Will Real Madrid win the Champions League final?",
            Category::Football,
            dec!(1.48),
            dec!(2.60),
            68,
        ),
        question(
            7,
            "Will turnout exceed 80% in the general election?",
            Category::Politics,
            dec!(1.65),
            dec!(2.15),
            57,
        ),
        question(
            8,
            "Will Ethereum outperform Bitcoin this month?",
            Category::Crypto,
            dec!(2.40),
            dec!(1.55),
            40,
        ),
        question(
            9,
            "Will there be a triple-double in the All-Star game?",
            Category::Basketball,
            dec!(3.10),
            dec!(1.35),
            29,
        ),
        question(
            10,
            "Will both teams score in the Manchester derby?",
            Category::Football,
            dec!(1.72),
            dec!(2.05),
            58,
        ),
        question(
            11,
            "Will the favourite win Best Picture?",
            Category::Entertainment,
            dec!(1.90),
            dec!(1.90),
            50,
        ),
        question(
            12,
            "Will the world champion defend the title this year?",
            Category::Esports,
            dec!(2.25),
            dec!(1.62),
            43,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let questions = builtin_questions();
        let ids: HashSet<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn test_odds_and_percentages_are_valid() {
        for q in builtin_questions() {
            assert!(q.yes_odds > Decimal::ONE, "question {} yes odds", q.id);
            assert!(q.no_odds > Decimal::ONE, "question {} no odds", q.id);
            assert!(q.yes_percentage <= 100, "question {} percentage", q.id);
        }
    }
}
