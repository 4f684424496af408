//! Profile entities
//!
//! A profile scopes one user's workouts. The registry lists profiles newest
//! first and remembers which one is active.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::uid;
use crate::error::{GymlogError, GymlogResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Create a profile with a fresh id. Fails on a blank name.
    pub fn new(name: &str) -> GymlogResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GymlogError::EmptyProfileName);
        }
        Ok(Self {
            id: uid(),
            name: name.to_string(),
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRegistry {
    pub profiles: Vec<Profile>,
    /// Id of the active profile, empty when none is selected.
    pub active: String,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile at the front and make it active.
    pub fn insert(&mut self, profile: Profile) {
        self.active = profile.id.clone();
        self.profiles.insert(0, profile);
    }

    /// Remove a profile, clearing the active pointer if it pointed there.
    pub fn remove(&mut self, id: &str) -> bool {
        let len_before = self.profiles.len();
        self.profiles.retain(|p| p.id != id);
        if self.active == id {
            self.active.clear();
        }
        self.profiles.len() != len_before
    }

    pub fn find(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Look a profile up by id, falling back to an exact name match.
    pub fn resolve(&self, id_or_name: &str) -> Option<&Profile> {
        self.find(id_or_name)
            .or_else(|| self.profiles.iter().find(|p| p.name == id_or_name.trim()))
    }

    pub fn active_profile(&self) -> Option<&Profile> {
        if self.active.is_empty() {
            return None;
        }
        self.find(&self.active)
    }

    pub fn set_active(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.active = id.to_string();
        true
    }

    pub fn clear_active(&mut self) {
        self.active.clear();
    }

    pub fn all(&self) -> &[Profile] {
        &self.profiles
    }
}
