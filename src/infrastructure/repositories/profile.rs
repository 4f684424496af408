//! JSON Profile Repository
//!
//! Persists the profile registry at `<data dir>/profiles.json`.

use std::fs;
use std::path::PathBuf;

use fs2::FileExt;

use crate::domain::entities::ProfileRegistry;
use crate::domain::ports::{ProfileError, ProfileRepository};
use crate::infrastructure::fs::{gymlog_data_dir, write_atomic};

pub struct JsonProfileRepository {
    path: PathBuf,
}

impl JsonProfileRepository {
    pub fn new() -> Self {
        Self::with_dir(gymlog_data_dir().unwrap_or_else(|| PathBuf::from(".gymlog")))
    }

    pub fn with_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join("profiles.json"),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn lock(&self) -> Result<fs::File, ProfileError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ProfileError::AccessError {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| ProfileError::AccessError {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| ProfileError::AccessError {
                message: e.to_string(),
            })?;
        Ok(lock_file)
    }

    fn load_from_disk(&self) -> Result<ProfileRegistry, ProfileError> {
        if !self.path.exists() {
            return Ok(ProfileRegistry::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ProfileError::AccessError {
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ProfileError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save_to_disk(&self, registry: &ProfileRegistry) -> Result<(), ProfileError> {
        let content = serde_json::to_string_pretty(registry).map_err(|e| {
            ProfileError::SerializationError {
                message: e.to_string(),
            }
        })?;

        write_atomic(&self.path, &content).map_err(|e| ProfileError::AccessError {
            message: e.to_string(),
        })
    }
}

impl Default for JsonProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRepository for JsonProfileRepository {
    fn load(&self) -> Result<ProfileRegistry, ProfileError> {
        self.load_from_disk()
    }

    fn save(&self, registry: &ProfileRegistry) -> Result<(), ProfileError> {
        let lock_file = self.lock()?;
        let result = self.save_to_disk(registry);
        let _ = lock_file.unlock();
        result
    }

    fn update(
        &self,
        apply: &mut dyn FnMut(&mut ProfileRegistry),
    ) -> Result<ProfileRegistry, ProfileError> {
        let lock_file = self.lock()?;

        let result = self.load_from_disk().and_then(|mut registry| {
            apply(&mut registry);
            self.save_to_disk(&registry).map(|()| registry)
        });

        let _ = lock_file.unlock();
        result
    }
}
