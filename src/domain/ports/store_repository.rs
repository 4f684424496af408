//! StoreRepository port
//!
//! Persists one `WorkoutCollection` per profile, keyed by profile id.

use std::path::PathBuf;

use crate::domain::entities::WorkoutCollection;

/// Key standing in for "no profile selected".
pub const NO_PROFILE_KEY: &str = "__no_profile__";

pub trait StoreRepository: Send + Sync {
    /// Load a profile's collection. A missing blob loads as the default
    /// collection; unreadable or corrupt data is an error.
    fn load(&self, profile_id: &str) -> Result<WorkoutCollection, StoreError>;

    /// Persist a profile's collection. Refuses an empty profile id.
    fn save(&self, profile_id: &str, collection: &WorkoutCollection) -> Result<(), StoreError>;
}

/// Storage key for a profile id.
pub fn store_key(profile_id: &str) -> &str {
    if profile_id.is_empty() {
        NO_PROFILE_KEY
    } else {
        profile_id
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("refusing to save workouts without a profile")]
    MissingProfile,

    #[error("Failed to access workout store: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize workout store: {message}")]
    SerializationError { message: String },

    #[error("workout store corrupted: {path}: {message}")]
    Corrupted { path: PathBuf, message: String },
}
