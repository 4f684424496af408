//! Configuration module for GymLog
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GYMLOG_*)
//! 3. User config (~/.config/gymlog/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, GYMLOG_VERBOSITY_VAR};
pub use types::{
    Config, DashboardConfig, OutputConfig, StorageConfig, Verbosity, WorkoutsConfig,
};
