//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::DuplicateDefaults;
use crate::domain::services::DashboardLimits;
use crate::error::GymlogResult;
use crate::infrastructure::gymlog_data_dir;

use super::loader::{self, ConfigWarning};

/// Where profiles and workout stores live
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Overrides the platform data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Dashboard table sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_recent_rows")]
    pub recent_weeks: usize,

    #[serde(default = "default_recent_rows")]
    pub recent_months: usize,

    #[serde(default = "default_top_prs")]
    pub top_prs: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_weeks: default_recent_rows(),
            recent_months: default_recent_rows(),
            top_prs: default_top_prs(),
        }
    }
}

fn default_recent_rows() -> usize {
    8
}

fn default_top_prs() -> usize {
    10
}

/// Workout editing defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutsConfig {
    /// Appended to the title of a duplicated workout
    #[serde(default = "default_duplicate_suffix")]
    pub duplicate_suffix: String,

    /// Title used for a duplicate whose source has none
    #[serde(default = "default_title")]
    pub default_title: String,
}

impl Default for WorkoutsConfig {
    fn default() -> Self {
        Self {
            duplicate_suffix: default_duplicate_suffix(),
            default_title: default_title(),
        }
    }
}

fn default_duplicate_suffix() -> String {
    " (copy)".to_string()
}

fn default_title() -> String {
    "Workout".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the level by the number of `-v` flags given on the command line.
    pub fn raised_by(self, count: u8) -> Self {
        match (self as u8).saturating_add(count) {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    /// Default `tracing` filter directive for this level.
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub workouts: WorkoutsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GymlogResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GymlogResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (GYMLOG_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Location of the user config file, if a config directory is known
    pub fn user_config_path() -> Option<PathBuf> {
        loader::user_config_path()
    }

    /// Data directory: configured path, else the platform default
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .or_else(gymlog_data_dir)
            .unwrap_or_else(|| PathBuf::from(".gymlog"))
    }

    pub fn dashboard_limits(&self) -> DashboardLimits {
        DashboardLimits {
            recent_weeks: self.dashboard.recent_weeks,
            recent_months: self.dashboard.recent_months,
            top_prs: self.dashboard.top_prs,
        }
    }

    pub fn duplicate_defaults(&self) -> DuplicateDefaults {
        DuplicateDefaults {
            title_suffix: self.workouts.duplicate_suffix.clone(),
            default_title: self.workouts.default_title.clone(),
        }
    }
}
