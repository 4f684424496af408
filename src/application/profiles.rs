//! Profiles Use Case
//!
//! Application-layer orchestration for the profile registry.

use std::sync::Arc;

use crate::domain::entities::{Profile, ProfileRegistry};
use crate::domain::ports::ProfileRepository;
use crate::error::{GymlogError, GymlogResult};

pub struct ProfilesUseCase {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfilesUseCase {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// Create a profile and make it active. Fails on a blank name.
    pub fn create(&self, name: &str) -> GymlogResult<Profile> {
        let profile = Profile::new(name)?;
        self.repository
            .update(&mut |registry| registry.insert(profile.clone()))?;
        tracing::info!(profile = %profile.id, name = %profile.name, "created profile");
        Ok(profile)
    }

    /// Known profiles, newest first. An unreadable registry lists as empty.
    pub fn list(&self) -> Vec<Profile> {
        self.registry().all().to_vec()
    }

    pub fn active(&self) -> Option<Profile> {
        self.registry().active_profile().cloned()
    }

    /// Id of the active profile, empty when none is selected.
    pub fn active_id(&self) -> String {
        self.active().map(|p| p.id).unwrap_or_default()
    }

    /// Make the profile with this id (or exact name) active.
    pub fn switch(&self, id_or_name: &str) -> GymlogResult<Profile> {
        let profile = self
            .registry()
            .resolve(id_or_name)
            .cloned()
            .ok_or_else(|| GymlogError::ProfileNotFound {
                id: id_or_name.to_string(),
            })?;
        self.repository.update(&mut |registry| {
            registry.set_active(&profile.id);
        })?;
        Ok(profile)
    }

    /// Remove a profile from the registry. Its stored workouts are left in place.
    pub fn delete(&self, id_or_name: &str) -> GymlogResult<Profile> {
        let profile = self
            .registry()
            .resolve(id_or_name)
            .cloned()
            .ok_or_else(|| GymlogError::ProfileNotFound {
                id: id_or_name.to_string(),
            })?;
        self.repository.update(&mut |registry| {
            registry.remove(&profile.id);
        })?;
        tracing::info!(profile = %profile.id, "deleted profile");
        Ok(profile)
    }

    pub fn sign_out(&self) -> GymlogResult<()> {
        self.repository
            .update(&mut |registry| registry.clear_active())?;
        Ok(())
    }

    fn registry(&self) -> ProfileRegistry {
        self.repository.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unreadable profile registry, treating as empty");
            ProfileRegistry::new()
        })
    }
}
