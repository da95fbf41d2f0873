//! Application-level state.

use rust_decimal::Decimal;

use super::{Notification, OddsMode};
use crate::config::Config;

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Odds mode applied to new votes.
    pub odds_mode: OddsMode,
    /// Multiplier used in boosted mode.
    pub boost_multiplier: Decimal,
    /// How long capacity warnings stay up, in seconds.
    pub warning_secs: u64,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create application state from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            odds_mode: if config.coupon.boosted {
                OddsMode::Boosted
            } else {
                OddsMode::Standard
            },
            boost_multiplier: config.coupon.boost_multiplier,
            warning_secs: config.ui.warning_secs,
            ..Default::default()
        }
    }

    /// Whether boosted odds are active.
    pub fn is_boosted(&self) -> bool {
        self.odds_mode == OddsMode::Boosted
    }

    /// Flip between standard and boosted odds.
    pub fn toggle_boost(&mut self) {
        self.odds_mode = match self.odds_mode {
            OddsMode::Standard => OddsMode::Boosted,
            OddsMode::Boosted => OddsMode::Standard,
        };
    }
}
