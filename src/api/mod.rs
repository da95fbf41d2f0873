//! Data boundary for Sence.
//!
//! The question catalog is compiled in; coupon submission goes through the
//! [`CouponSubmitter`] trait so a real backend can replace the simulated one.

mod catalog;
mod submitter;

pub use catalog::builtin_questions;
pub use submitter::{CouponSubmitter, CouponTicket, SimulatedSubmitter, SubmissionReceipt};

#[cfg(test)]
pub use submitter::MockCouponSubmitter;
