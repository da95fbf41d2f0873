//! Configuration management for Sence.

mod settings;

pub use settings::{Config, CouponConfig, KeyBindings, LoggingConfig, SubmitConfig, UiConfig};

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("app", "sence", "sence")
        .ok_or_else(|| Error::config("Could not determine project directories"))
}

/// Get the configuration directory path.
pub fn config_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the log directory path.
pub fn log_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}
