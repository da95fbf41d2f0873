//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::api::{CouponSubmitter, CouponTicket, SimulatedSubmitter, builtin_questions};
use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::state::{Action, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Coupon submitter.
    submitter: Arc<dyn CouponSubmitter>,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application using the simulated submitter.
    pub fn new(config: Config) -> Result<Self> {
        let submitter = Arc::new(SimulatedSubmitter::from_config(&config.submit));
        Self::with_submitter(config, submitter)
    }

    /// Create a new application with a specific submitter.
    pub fn with_submitter(config: Config, submitter: Arc<dyn CouponSubmitter>) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.ui.mouse_support {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let store = Store::new(action_tx, builtin_questions(), &config);
        let event_handler = EventHandler::new(
            config.keybindings.clone(),
            Duration::from_millis(config.ui.tick_rate_ms),
        );

        tracing::info!(
            questions = store.catalog.questions.len(),
            stake = %store.coupon.stake,
            "application started"
        );

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            submitter,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store, &self.config);
            })?;

            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action);
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }

            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::SubmitCoupon => {
                if let Some(ticket) = self.store.begin_submission() {
                    tokio::spawn(submit_coupon(
                        Arc::clone(&self.submitter),
                        ticket,
                        self.store.sender(),
                    ));
                }
            }
            _ => self.store.reduce(action),
        }
    }
}

/// Submit a ticket and report the outcome back to the store.
pub async fn submit_coupon(
    submitter: Arc<dyn CouponSubmitter>,
    ticket: CouponTicket,
    action_tx: mpsc::UnboundedSender<Action>,
) {
    let action = match submitter.submit(&ticket).await {
        Ok(receipt) => Action::CouponSubmitted(receipt),
        Err(e) => Action::SubmitFailed {
            retryable: e.is_recoverable(),
            message: e.to_string(),
        },
    };

    if action_tx.send(action).is_err() {
        tracing::debug!("store dropped before submission finished");
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockCouponSubmitter, SubmissionReceipt};
    use crate::state::{DEFAULT_STAKE, PayoutQuote, Selection, Side};
    use rust_decimal_macros::dec;

    fn ticket() -> CouponTicket {
        let selections = vec![Selection {
            question_id: 6,
            side: Side::Yes,
            odds: dec!(1.48),
            title: "Q6".to_string(),
        }];
        let quote = PayoutQuote::for_selections(&selections, DEFAULT_STAKE);
        CouponTicket::new(selections, quote)
    }

    #[tokio::test]
    async fn test_submit_coupon_reports_receipt() {
        let mut submitter = MockCouponSubmitter::new();
        submitter
            .expect_submit()
            .times(1)
            .returning(|t| Ok(SubmissionReceipt::for_ticket(t)));

        let (tx, mut rx) = mpsc::unbounded_channel();
        submit_coupon(Arc::new(submitter), ticket(), tx).await;

        match rx.recv().await {
            Some(Action::CouponSubmitted(receipt)) => {
                assert_eq!(receipt.selection_count, 1);
                assert_eq!(receipt.potential_payout, dec!(15));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_coupon_reports_failure() {
        let mut submitter = MockCouponSubmitter::new();
        submitter
            .expect_submit()
            .returning(|_| Err(crate::Error::submission("backend unavailable")));

        let (tx, mut rx) = mpsc::unbounded_channel();
        submit_coupon(Arc::new(submitter), ticket(), tx).await;

        match rx.recv().await {
            Some(Action::SubmitFailed { message, retryable }) => {
                assert!(message.contains("backend unavailable"));
                assert!(retryable);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_coupon_marks_fatal_failure() {
        let mut submitter = MockCouponSubmitter::new();
        submitter
            .expect_submit()
            .returning(|_| Err(crate::Error::application("submitter misconfigured")));

        let (tx, mut rx) = mpsc::unbounded_channel();
        submit_coupon(Arc::new(submitter), ticket(), tx).await;

        assert!(matches!(
            rx.recv().await,
            Some(Action::SubmitFailed {
                retryable: false,
                ..
            })
        ));
    }
}
