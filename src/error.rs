//! Error types for GymLog
//!
//! Uses `thiserror` for library errors. Read paths never surface these for
//! malformed data; they are reserved for operator-facing failures.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for GymLog operations
pub type GymlogResult<T> = Result<T, GymlogError>;

/// Main error type for GymLog operations
#[derive(Error, Debug)]
pub enum GymlogError {
    /// Profile creation was attempted with a blank name
    #[error("profile name must not be empty")]
    EmptyProfileName,

    /// No profile with the given id is registered
    #[error("profile not found: {id}")]
    ProfileNotFound { id: String },

    /// An operation requires an active profile and none is selected
    #[error("no active profile - run 'gymlog profile create <name>' first")]
    NoActiveProfile,

    /// No workout with the given id exists in the active collection
    #[error("workout not found: {id}")]
    WorkoutNotFound { id: String },

    /// A workout was submitted without a date
    #[error("workout date is required (YYYY-MM-DD)")]
    MissingDate,

    /// A date given by the operator is not a calendar date
    #[error("invalid date '{date}' (expected YYYY-MM-DD)")]
    InvalidDate { date: String },

    /// Import document could not be parsed
    #[error("could not import JSON: {message}")]
    InvalidImport { message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Profile registry could not be read or written
    #[error(transparent)]
    Profile(#[from] crate::domain::ports::ProfileError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
