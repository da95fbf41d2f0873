//! Configuration settings for Sence.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Coupon and payout configuration.
    pub coupon: CouponConfig,
    /// Coupon submission configuration.
    pub submit: SubmitConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file, returning default if file doesn't exist.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from a TOML document.
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the coupon maths cannot work with.
    pub fn validate(&self) -> crate::Result<()> {
        if self.coupon.stake <= Decimal::ZERO {
            return Err(crate::Error::config(format!(
                "coupon.stake must be positive, got {}",
                self.coupon.stake
            )));
        }
        if self.coupon.boost_multiplier <= Decimal::ZERO {
            return Err(crate::Error::config(format!(
                "coupon.boost_multiplier must be positive, got {}",
                self.coupon.boost_multiplier
            )));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn default_config_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// Coupon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponConfig {
    /// Fixed stake in credits used for payout projection.
    pub stake: Decimal,
    /// Multiplier applied to odds in boosted mode.
    pub boost_multiplier: Decimal,
    /// Start in boosted mode.
    pub boosted: bool,
}

impl Default for CouponConfig {
    fn default() -> Self {
        Self {
            stake: crate::state::DEFAULT_STAKE,
            boost_multiplier: dec!(1.2),
            boosted: false,
        }
    }
}

/// Coupon submission configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// Simulated submission delay in milliseconds.
    pub delay_ms: u64,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self { delay_ms: 1500 }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for UI updates.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// How long capacity warnings stay on screen, in seconds.
    pub warning_secs: u64,
    /// Show status bar.
    pub show_status_bar: bool,
    /// Show help bar.
    pub show_help_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse_support: true,
            warning_secs: 3,
            show_status_bar: true,
            show_help_bar: true,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Vote yes on the highlighted question (swipe right).
    pub vote_yes: String,
    /// Vote no on the highlighted question (swipe left).
    pub vote_no: String,
    /// Open/close the coupon drawer.
    pub toggle_coupon: String,
    /// Remove the highlighted selection from the coupon.
    pub remove_selection: String,
    /// Clear the whole coupon.
    pub clear_coupon: String,
    /// Submit the coupon.
    pub submit: String,
    /// Toggle boosted odds.
    pub toggle_boost: String,
    /// Cycle the category filter.
    pub next_category: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            vote_yes: "y".to_string(),
            vote_no: "n".to_string(),
            toggle_coupon: "c".to_string(),
            remove_selection: "x".to_string(),
            clear_coupon: "Ctrl+x".to_string(),
            submit: "Enter".to_string(),
            toggle_boost: "b".to_string(),
            next_category: "Tab".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Log file name prefix inside the log directory.
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "sence=info".to_string(),
            file_name: "sence.log".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.coupon.stake, dec!(10));
        assert_eq!(config.coupon.boost_multiplier, dec!(1.2));
        assert!(!config.coupon.boosted);
        assert_eq!(config.submit.delay_ms, 1500);
        assert_eq!(config.ui.warning_secs, 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [coupon]
            boosted = true

            [submit]
            delay_ms = 0
            "#,
        )
        .unwrap();

        assert!(config.coupon.boosted);
        assert_eq!(config.coupon.stake, dec!(10));
        assert_eq!(config.submit.delay_ms, 0);
        assert_eq!(config.keybindings.vote_yes, "y");
        assert_eq!(config.logging.level, "sence=info");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::from_toml("[coupon\nstake = ").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_non_positive_coupon_values_are_rejected() {
        let err = Config::from_toml("[coupon]\nstake = \"0\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(ref m) if m.contains("stake")));

        let err = Config::from_toml("[coupon]\nboost_multiplier = \"-1.2\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(ref m) if m.contains("boost_multiplier")));

        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let path = std::env::temp_dir().join("sence-missing-dir/never/config.toml");
        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("sence-config-{}", uuid::Uuid::new_v4()))
            .join("config.toml");

        let mut config = Config::default();
        config.coupon.stake = dec!(25);
        config.submit.delay_ms = 10;
        config.save(Some(path.clone())).unwrap();

        let loaded = Config::load(Some(path.clone())).unwrap();
        assert_eq!(loaded.coupon.stake, dec!(25));
        assert_eq!(loaded.submit.delay_ms, 10);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
