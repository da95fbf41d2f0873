//! State management for Sence.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture. Every mutation goes
//! through [`Store::reduce`].

mod app_state;
mod catalog_state;
mod coupon_state;
mod payout;

pub use app_state::AppState;
pub use catalog_state::{CatalogState, Category, OddsMode, Question, Side};
pub use coupon_state::{
    CapacityExceeded, Coupon, CouponState, MAX_SELECTIONS, Selection, SelectionAdded,
};
pub use payout::{DEFAULT_STAKE, PayoutQuote};

use crate::api::{CouponTicket, SubmissionReceipt};
use crate::config::Config;
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Voting
    Vote { question_id: u32, side: Side },

    // Coupon actions
    RemoveSelection(u32),
    ClearCoupon,
    ToggleCoupon,
    CloseCoupon,
    SubmitCoupon,
    CouponSubmitted(SubmissionReceipt),
    SubmitFailed { message: String, retryable: bool },

    // Catalog actions
    ToggleBoost,
    NextCategory,

    // UI actions
    ScrollUp,
    ScrollDown,
    GoToTop,
    GoToBottom,
    ToggleHelp,
    ShowNotification(Notification),
    DismissNotification,
    Tick,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
    pub created_at: DateTime<Utc>,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Notification {
    fn new(message: impl Into<String>, level: NotificationLevel, duration_secs: u64) -> Self {
        Self {
            message: message.into(),
            level,
            duration_secs,
            created_at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info, 3)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success, 3)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning, 5)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error, 10)
    }

    /// Override how long the notification stays on screen.
    pub fn with_duration(mut self, secs: u64) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Whether the notification should be dismissed at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let lifetime = i64::try_from(self.duration_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        now.signed_duration_since(self.created_at) >= lifetime
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Question catalog.
    pub catalog: CatalogState,
    /// Coupon being built.
    pub coupon: CouponState,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store over a question catalog.
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        questions: Vec<Question>,
        config: &Config,
    ) -> Self {
        Self {
            app: AppState::new(config),
            catalog: CatalogState::new(questions),
            coupon: CouponState::new(config.coupon.stake),
            action_tx,
        }
    }

    /// Get a sender for dispatching actions from other tasks.
    pub fn sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Apply an action to update state.
    ///
    /// `SubmitCoupon` leaves state untouched here: the caller owns the
    /// submitter and starts the round trip with [`Store::begin_submission`].
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Voting
            Action::Vote { question_id, side } => self.vote(question_id, side),

            // Coupon actions
            Action::RemoveSelection(question_id) => {
                if self.guard_submitting() {
                    return;
                }
                if self.coupon.coupon.remove_selection(question_id) {
                    tracing::debug!(question_id, "selection removed");
                    self.coupon.clamp_selection();
                }
            }
            Action::ClearCoupon => {
                if self.guard_submitting() {
                    return;
                }
                self.coupon.coupon.clear();
                self.coupon.selected_index = None;
            }
            Action::ToggleCoupon => {
                self.coupon.drawer_open = !self.coupon.drawer_open;
                self.coupon.clamp_selection();
            }
            Action::CloseCoupon => self.coupon.drawer_open = false,
            Action::SubmitCoupon => {
                tracing::debug!("submit requested without a submitter; ignoring");
            }
            Action::CouponSubmitted(receipt) => {
                tracing::info!(
                    receipt = %receipt.id,
                    selections = receipt.selection_count,
                    payout = %receipt.potential_payout,
                    "coupon submitted"
                );
                self.coupon.coupon.clear();
                self.coupon.selected_index = None;
                self.coupon.submitting = false;
                self.coupon.drawer_open = false;
                self.notify(Notification::success(format!(
                    "Coupon placed: {} selections, potential payout {}",
                    receipt.selection_count, receipt.potential_payout
                )));
                self.coupon.last_receipt = Some(receipt);
            }
            Action::SubmitFailed { message, retryable } => {
                tracing::warn!(%message, retryable, "coupon submission failed");
                self.coupon.submitting = false;
                let hint = if retryable { " Try again." } else { "" };
                self.notify(Notification::error(format!(
                    "Submission failed: {message}.{hint}"
                )));
            }

            // Catalog actions
            Action::ToggleBoost => self.app.toggle_boost(),
            Action::NextCategory => self.catalog.cycle_category(),

            // UI actions
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => self.notify(notification),
            Action::DismissNotification => self.app.notification = None,
            Action::Tick => self.expire_notifications(Utc::now()),

            // Quit
            Action::Quit => self.app.should_quit = true,
        }
    }

    /// Record a vote on a question.
    ///
    /// Resolves the odds for `side` under the current odds mode and adds the
    /// selection to the coupon. On success the drawer opens; a full coupon is
    /// reported with a transient warning and nothing else changes.
    pub fn vote(&mut self, question_id: u32, side: Side) {
        if self.guard_submitting() {
            return;
        }

        let Some(question) = self.catalog.get(question_id) else {
            tracing::warn!(question_id, "vote on unknown question");
            self.notify(Notification::error(format!(
                "Unknown question #{question_id}"
            )));
            return;
        };

        let odds = question.odds_for(side, self.app.odds_mode, self.app.boost_multiplier);
        let title = question.title.clone();

        match self
            .coupon
            .coupon
            .add_selection(question_id, side, odds, title)
        {
            Ok(added) => {
                tracing::debug!(question_id, %side, %odds, replaced = added.replaced, "selection added");
                self.coupon.drawer_open = true;
                self.coupon.selected_index = Some(added.index);
                if added.filled {
                    self.notify(Notification::success(format!(
                        "Coupon complete: {MAX_SELECTIONS} selections"
                    )));
                }
            }
            Err(err) => {
                tracing::debug!(question_id, %err, "selection rejected");
                self.notify(
                    Notification::warning(format!(
                        "You can add at most {} selections to a coupon",
                        err.max
                    ))
                    .with_duration(self.app.warning_secs),
                );
            }
        }
    }

    /// Mark the coupon as submitting and snapshot it for the submitter.
    ///
    /// Returns `None` when the coupon is empty or a submission is already in
    /// flight.
    pub fn begin_submission(&mut self) -> Option<CouponTicket> {
        if self.coupon.submitting {
            return None;
        }
        if self.coupon.coupon.is_empty() {
            self.notify(Notification::warning("Add a prediction before submitting"));
            return None;
        }

        self.coupon.submitting = true;
        Some(CouponTicket::new(
            self.coupon.coupon.selections().to_vec(),
            self.coupon.quote(),
        ))
    }

    /// Drop the current notification once it has outlived its duration.
    pub fn expire_notifications(&mut self, now: DateTime<Utc>) {
        if self
            .app
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.app.notification = None;
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.app.notification = Some(notification);
    }

    fn guard_submitting(&mut self) -> bool {
        if self.coupon.submitting {
            self.notify(Notification::info("Coupon submission in progress"));
        }
        self.coupon.submitting
    }

    fn scroll(&mut self, delta: isize) {
        if self.coupon.drawer_open {
            let new_index = self
                .coupon
                .selected_index
                .unwrap_or(0)
                .saturating_add_signed(delta);
            let max_index = self.coupon.coupon.len().saturating_sub(1);
            self.coupon.selected_index = Some(new_index.min(max_index));
            self.coupon.clamp_selection();
        } else {
            let new_index = self
                .catalog
                .selected_index
                .unwrap_or(0)
                .saturating_add_signed(delta);
            self.catalog.selected_index = self
                .catalog
                .filtered_questions()
                .len()
                .checked_sub(1)
                .map(|last| new_index.min(last));
        }
    }

    fn go_to_top(&mut self) {
        if self.coupon.drawer_open {
            self.coupon.selected_index = None;
            self.coupon.clamp_selection();
        } else if !self.catalog.filtered_questions().is_empty() {
            self.catalog.selected_index = Some(0);
        }
    }

    fn go_to_bottom(&mut self) {
        if self.coupon.drawer_open {
            self.coupon.selected_index = self.coupon.coupon.len().checked_sub(1);
        } else {
            self.catalog.selected_index = self.catalog.filtered_questions().len().checked_sub(1);
        }
    }
}
