//! ProfileRepository port
//!
//! Persists the profile registry and the active-profile pointer.

use std::path::PathBuf;

use crate::domain::entities::ProfileRegistry;

pub trait ProfileRepository: Send + Sync {
    fn load(&self) -> Result<ProfileRegistry, ProfileError>;
    fn save(&self, registry: &ProfileRegistry) -> Result<(), ProfileError>;

    /// Read-modify-write the registry as one step; returns the saved registry.
    fn update(
        &self,
        apply: &mut dyn FnMut(&mut ProfileRegistry),
    ) -> Result<ProfileRegistry, ProfileError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Failed to access profile registry: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize profile registry: {message}")]
    SerializationError { message: String },

    #[error(
        "profile registry corrupted: {path}\n  → Fix: Delete the file and recreate your profiles\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
