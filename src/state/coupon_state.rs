//! Coupon (selection accumulator) state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{PayoutQuote, Side};
use crate::api::SubmissionReceipt;

/// Maximum number of selections a coupon can hold.
pub const MAX_SELECTIONS: usize = 5;

/// A recorded vote on one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Question this vote belongs to.
    pub question_id: u32,
    /// Chosen side.
    pub side: Side,
    /// Odds captured at vote time.
    pub odds: Decimal,
    /// Question title, copied for display.
    pub title: String,
}

/// Returned when adding to a coupon that already holds [`MAX_SELECTIONS`] entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("coupon is full: at most {max} selections")]
pub struct CapacityExceeded {
    pub max: usize,
}

/// Result of a successful add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionAdded {
    /// Position of the selection in the coupon.
    pub index: usize,
    /// An existing selection for the same question was replaced.
    pub replaced: bool,
    /// This add moved the coupon from one short of full to full.
    pub filled: bool,
}

/// An ordered, bounded list of selections.
///
/// Holds at most one selection per question: voting again on a question
/// already present replaces that selection in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coupon {
    selections: Vec<Selection>,
}

impl Coupon {
    /// Create an empty coupon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a selection, or replace the existing one for the same question.
    pub fn add_selection(
        &mut self,
        question_id: u32,
        side: Side,
        odds: Decimal,
        title: impl Into<String>,
    ) -> Result<SelectionAdded, CapacityExceeded> {
        let selection = Selection {
            question_id,
            side,
            odds,
            title: title.into(),
        };

        if let Some(index) = self.position(question_id) {
            self.selections[index] = selection;
            return Ok(SelectionAdded {
                index,
                replaced: true,
                filled: false,
            });
        }

        if self.is_full() {
            return Err(CapacityExceeded {
                max: MAX_SELECTIONS,
            });
        }

        self.selections.push(selection);
        Ok(SelectionAdded {
            index: self.selections.len() - 1,
            replaced: false,
            filled: self.is_full(),
        })
    }

    /// Remove the selection for a question. Returns whether one was removed.
    pub fn remove_selection(&mut self, question_id: u32) -> bool {
        match self.position(question_id) {
            Some(index) => {
                self.selections.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every selection.
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// Selections in insertion order.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Selection for a question, if present.
    pub fn get(&self, question_id: u32) -> Option<&Selection> {
        self.selections.iter().find(|s| s.question_id == question_id)
    }

    /// Whether a question is already on the coupon.
    pub fn contains(&self, question_id: u32) -> bool {
        self.position(question_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.selections.len() >= MAX_SELECTIONS
    }

    /// Free slots left.
    pub fn remaining(&self) -> usize {
        MAX_SELECTIONS.saturating_sub(self.selections.len())
    }

    /// Quote this coupon for a stake.
    pub fn quote(&self, stake: Decimal) -> PayoutQuote {
        PayoutQuote::for_selections(&self.selections, stake)
    }

    fn position(&self, question_id: u32) -> Option<usize> {
        self.selections
            .iter()
            .position(|s| s.question_id == question_id)
    }
}

/// Coupon drawer state.
#[derive(Debug, Default)]
pub struct CouponState {
    /// The coupon being built.
    pub coupon: Coupon,
    /// Fixed stake used for payout projection.
    pub stake: Decimal,
    /// Whether the drawer is open.
    pub drawer_open: bool,
    /// Highlighted selection index in the drawer.
    pub selected_index: Option<usize>,
    /// A submission is in flight.
    pub submitting: bool,
    /// Receipt of the last successful submission.
    pub last_receipt: Option<SubmissionReceipt>,
}

impl CouponState {
    /// Create coupon state with the given stake.
    pub fn new(stake: Decimal) -> Self {
        Self {
            stake,
            ..Default::default()
        }
    }

    /// Current payout quote.
    pub fn quote(&self) -> PayoutQuote {
        self.coupon.quote(self.stake)
    }

    /// The highlighted selection.
    pub fn selected_selection(&self) -> Option<&Selection> {
        self.selected_index
            .and_then(|i| self.coupon.selections().get(i))
    }

    /// Keep the drawer highlight inside the coupon bounds.
    pub fn clamp_selection(&mut self) {
        let len = self.coupon.len();
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
    }
}
