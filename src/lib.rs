//! # Sence - Prediction Coupon Builder
//!
//! A terminal client for voting on yes/no prediction questions and building
//! them into a coupon. Built with ratatui.
//!
//! ## Architecture
//!
//! - **App**: Event loop and lifecycle management
//! - **State**: Centralized store; the coupon accumulator and payout quote
//! - **API**: Built-in question catalog and the coupon submission boundary
//! - **Events**: Key and mouse input mapped to store actions
//! - **UI**: Layout and rendering logic
//! - **Config**: Configuration management
//! - **Logging**: File-backed tracing setup

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use state::{Action, Coupon, PayoutQuote, Store};
