//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{ProfilesUseCase, WorkoutStore};
use crate::config::Config;
use crate::infrastructure::{JsonProfileRepository, JsonStoreRepository};

/// Create the profiles use case backed by `<data dir>/profiles.json`
pub fn create_profiles_use_case(config: &Config) -> ProfilesUseCase {
    ProfilesUseCase::new(Arc::new(JsonProfileRepository::with_dir(config.data_dir())))
}

/// Open the workout store for `profile_id`
///
/// An empty id opens an in-memory store that never persists.
pub fn open_workout_store(config: &Config, profile_id: &str) -> WorkoutStore {
    let repository = Arc::new(JsonStoreRepository::with_dir(config.data_dir()));
    WorkoutStore::open(repository, profile_id).with_duplicate_defaults(config.duplicate_defaults())
}

/// Open the workout store for whichever profile is currently active
pub fn open_active_workout_store(config: &Config) -> WorkoutStore {
    let profiles = create_profiles_use_case(config);
    open_workout_store(config, &profiles.active_id())
}
