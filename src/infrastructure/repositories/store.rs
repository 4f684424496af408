//! JSON Store Repository
//!
//! Persists each profile's workouts at `<data dir>/stores/gymlog_store_v0-<key>.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::entities::WorkoutCollection;
use crate::domain::ports::store_repository::store_key;
use crate::domain::ports::{StoreError, StoreRepository};
use crate::domain::services::normalize_import;
use crate::infrastructure::fs::{gymlog_data_dir, write_atomic};

const KEY_PREFIX: &str = "gymlog_store_v0-";

pub struct JsonStoreRepository {
    dir: PathBuf,
}

impl JsonStoreRepository {
    /// Repository rooted at the default data directory.
    pub fn new() -> Self {
        Self::with_dir(default_data_dir())
    }

    /// Repository rooted at `data_dir`.
    pub fn with_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: data_dir.into().join("stores"),
        }
    }

    /// File holding `profile_id`'s collection.
    pub fn path_for(&self, profile_id: &str) -> PathBuf {
        self.dir
            .join(format!("{}{}.json", KEY_PREFIX, escape_key(store_key(profile_id))))
    }

    fn read(&self, path: &Path) -> Result<WorkoutCollection, StoreError> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupted {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        // `null` is what an empty blob round-trips to
        if value.is_null() {
            return Ok(WorkoutCollection::new());
        }
        if !value.is_object() {
            return Err(StoreError::Corrupted {
                path: path.to_path_buf(),
                message: "expected a JSON object".to_string(),
            });
        }

        Ok(normalize_import(&value))
    }
}

impl Default for JsonStoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreRepository for JsonStoreRepository {
    fn load(&self, profile_id: &str) -> Result<WorkoutCollection, StoreError> {
        let path = self.path_for(profile_id);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no stored workouts, starting empty");
            return Ok(WorkoutCollection::new());
        }

        let collection = self.read(&path)?;
        tracing::debug!(
            path = %path.display(),
            workouts = collection.len(),
            "loaded workout store"
        );
        Ok(collection)
    }

    fn save(&self, profile_id: &str, collection: &WorkoutCollection) -> Result<(), StoreError> {
        if profile_id.is_empty() {
            return Err(StoreError::MissingProfile);
        }

        let content = serde_json::to_string(collection).map_err(|e| {
            StoreError::SerializationError {
                message: e.to_string(),
            }
        })?;

        let path = self.path_for(profile_id);
        write_atomic(&path, &content).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;

        tracing::debug!(
            path = %path.display(),
            workouts = collection.len(),
            "saved workout store"
        );
        Ok(())
    }
}

fn default_data_dir() -> PathBuf {
    gymlog_data_dir().unwrap_or_else(|| PathBuf::from(".gymlog"))
}

/// Percent-escape anything outside `[A-Za-z0-9_-]` so a key is a safe file name.
fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}
