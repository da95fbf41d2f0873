//! Coupon submission boundary.

use crate::config::SubmitConfig;
use crate::error::Result;
use crate::state::{PayoutQuote, Selection};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Immutable snapshot of a coupon handed to a submitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponTicket {
    /// Selections in coupon order.
    pub selections: Vec<Selection>,
    /// Quote at the time of submission.
    pub quote: PayoutQuote,
}

impl CouponTicket {
    /// Create a ticket from selections and their quote.
    pub fn new(selections: Vec<Selection>, quote: PayoutQuote) -> Self {
        Self { selections, quote }
    }

    /// Wire payload for a backend.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Acknowledgement of a placed coupon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Receipt ID.
    pub id: Uuid,
    /// When the coupon was accepted.
    pub submitted_at: DateTime<Utc>,
    /// Number of selections placed.
    pub selection_count: usize,
    /// Total odds at submission.
    pub total_odds: Decimal,
    /// Projected payout at submission.
    pub potential_payout: Decimal,
}

impl SubmissionReceipt {
    /// Issue a fresh receipt for a ticket.
    pub fn for_ticket(ticket: &CouponTicket) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            selection_count: ticket.selections.len(),
            total_odds: ticket.quote.total_odds,
            potential_payout: ticket.quote.potential_payout,
        }
    }
}

/// Places coupons with a backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CouponSubmitter: Send + Sync {
    /// Submit a coupon and return the backend's receipt.
    async fn submit(&self, ticket: &CouponTicket) -> Result<SubmissionReceipt>;
}

/// Stand-in submitter that waits a fixed delay and accepts every coupon.
///
/// No backend is contacted.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Create a simulated submitter with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Create a simulated submitter from configuration.
    pub fn from_config(config: &SubmitConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms))
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::from_config(&SubmitConfig::default())
    }
}

#[async_trait]
impl CouponSubmitter for SimulatedSubmitter {
    async fn submit(&self, ticket: &CouponTicket) -> Result<SubmissionReceipt> {
        if ticket.selections.is_empty() {
            return Err(crate::Error::invalid_input("cannot submit an empty coupon"));
        }

        let payload = ticket.to_json()?;
        tracing::debug!(
            delay_ms = self.delay.as_millis() as u64,
            selections = ticket.selections.len(),
            payload_bytes = payload.len(),
            "simulating coupon submission"
        );
        tokio::time::sleep(self.delay).await;

        Ok(SubmissionReceipt::for_ticket(ticket))
    }
}
