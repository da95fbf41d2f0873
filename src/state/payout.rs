//! Payout projection for a coupon.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::Selection;

/// Stake, in credits, a coupon is projected against.
pub const DEFAULT_STAKE: Decimal = dec!(10);

/// Aggregate odds and projected payout for a set of selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutQuote {
    /// Product of every selection's odds (1 when empty).
    pub total_odds: Decimal,
    /// Stake the payout is projected for.
    pub stake: Decimal,
    /// `total_odds * stake` rounded to a whole credit.
    pub potential_payout: Decimal,
}

impl PayoutQuote {
    /// Quote a list of selections.
    ///
    /// Products that overflow saturate at `Decimal::MAX`.
    pub fn for_selections(selections: &[Selection], stake: Decimal) -> Self {
        let total_odds = selections
            .iter()
            .fold(Decimal::ONE, |acc, s| saturating_mul(acc, s.odds));
        let potential_payout = saturating_mul(total_odds, stake)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        Self {
            total_odds,
            stake,
            potential_payout,
        }
    }

    /// Total odds formatted to two decimal places.
    pub fn display_odds(&self) -> String {
        format!(
            "{:.2}",
            self.total_odds
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        )
    }
}

fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Side;

    fn selections(odds: &[Decimal]) -> Vec<Selection> {
        odds.iter()
            .enumerate()
            .map(|(i, o)| Selection {
                question_id: i as u32 + 1,
                side: Side::Yes,
                odds: *o,
                title: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_empty_quote_is_neutral() {
        let quote = PayoutQuote::for_selections(&[], DEFAULT_STAKE);
        assert_eq!(quote.total_odds, Decimal::ONE);
        assert_eq!(quote.potential_payout, dec!(10));
        assert_eq!(quote.display_odds(), "1.00");
    }

    #[test]
    fn test_total_odds_is_product() {
        let quote = PayoutQuote::for_selections(
            &selections(&[dec!(1.47), dec!(2.65), dec!(1.85)]),
            DEFAULT_STAKE,
        );
        // 1.47 * 2.65 * 1.85 = 7.206825
        assert_eq!(quote.total_odds, dec!(7.206825));
        assert_eq!(quote.display_odds(), "7.21");
        // round(72.06825) = 72
        assert_eq!(quote.potential_payout, dec!(72));
    }

    #[test]
    fn test_payout_rounds_to_nearest() {
        let quote = PayoutQuote::for_selections(&selections(&[dec!(1.48)]), DEFAULT_STAKE);
        // 14.8 -> 15
        assert_eq!(quote.potential_payout, dec!(15));

        let quote = PayoutQuote::for_selections(&selections(&[dec!(1.25)]), DEFAULT_STAKE);
        // 12.5 -> 13, midpoint rounds up
        assert_eq!(quote.potential_payout, dec!(13));
    }

    #[test]
    fn test_overflowing_stake_saturates() {
        let quote = PayoutQuote::for_selections(&selections(&[dec!(1.48)]), Decimal::MAX);
        assert_eq!(quote.total_odds, dec!(1.48));
        assert_eq!(quote.potential_payout, Decimal::MAX);
    }

    #[test]
    fn test_custom_stake() {
        let quote = PayoutQuote::for_selections(&selections(&[dec!(2.0), dec!(1.5)]), dec!(25));
        assert_eq!(quote.total_odds, dec!(3.00));
        assert_eq!(quote.potential_payout, dec!(75));
    }
}
