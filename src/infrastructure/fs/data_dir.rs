//! Data directory resolution with test isolation support.
//!
//! `gymlog_data_dir()`:
//! 1. Checks `GYMLOG_DATA_DIR` environment variable first
//! 2. Falls back to `dirs::data_dir()/gymlog` for production use
//!
//! The configuration file may also name a data directory; callers apply
//! that before falling back here.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const GYMLOG_DATA_DIR_VAR: &str = "GYMLOG_DATA_DIR";

/// Get the directory holding profiles and workout stores.
///
/// # Returns
///
/// - `Some(PathBuf)` - The data directory path
/// - `None` - If neither `GYMLOG_DATA_DIR` is set nor a platform data
///   directory can be resolved
pub fn gymlog_data_dir() -> Option<PathBuf> {
    std::env::var(GYMLOG_DATA_DIR_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|d| d.join("gymlog")))
}
