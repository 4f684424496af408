//! Workout Store
//!
//! The façade over one profile's canonical `WorkoutCollection`. Every
//! mutation builds a new collection, swaps it in, then persists it. Reads
//! derive views from the current snapshot.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{Workout, WorkoutCollection};
use crate::domain::ports::StoreRepository;
use crate::domain::services::{
    self, AggregateStats, CloneOptions, Dashboard, DashboardLimits, PrRecord, SummaryRow,
};
use crate::error::{GymlogError, GymlogResult};

/// Defaults applied when duplicating workouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateDefaults {
    pub title_suffix: String,
    pub default_title: String,
}

impl Default for DuplicateDefaults {
    fn default() -> Self {
        Self {
            title_suffix: " (copy)".to_string(),
            default_title: "Workout".to_string(),
        }
    }
}

pub struct WorkoutStore {
    repository: Arc<dyn StoreRepository>,
    profile_id: String,
    collection: WorkoutCollection,
    duplicate_defaults: DuplicateDefaults,
}

impl WorkoutStore {
    /// Open the store for `profile_id`, loading its persisted collection.
    pub fn open(repository: Arc<dyn StoreRepository>, profile_id: &str) -> Self {
        let collection = load(repository.as_ref(), profile_id);
        Self {
            repository,
            profile_id: profile_id.to_string(),
            collection,
            duplicate_defaults: DuplicateDefaults::default(),
        }
    }

    pub fn with_duplicate_defaults(mut self, defaults: DuplicateDefaults) -> Self {
        self.duplicate_defaults = defaults;
        self
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    pub fn workouts(&self) -> &[Workout] {
        self.collection.all()
    }

    pub fn find(&self, id: &str) -> Option<&Workout> {
        self.collection.find(id)
    }

    /// Discard the in-memory collection and load another profile's.
    pub fn switch_profile(&mut self, profile_id: &str) {
        self.profile_id = profile_id.to_string();
        self.collection = load(self.repository.as_ref(), profile_id);
    }

    pub fn replace_all(&mut self, collection: WorkoutCollection) {
        self.commit(collection);
    }

    /// Replace the workout with the same id, or insert it at the front.
    pub fn upsert_workout(&mut self, workout: Workout) {
        let mut next = self.collection.clone();
        next.upsert(workout);
        self.commit(next);
    }

    pub fn remove_workout(&mut self, id: &str) -> bool {
        let mut next = self.collection.clone();
        if !next.remove(id) {
            return false;
        }
        self.commit(next);
        true
    }

    /// Finalize a draft (ids, trimming, blank exercises dropped) and upsert it.
    pub fn save_workout(&mut self, draft: Workout) -> Workout {
        let workout = services::finalize_workout(draft);
        self.upsert_workout(workout.clone());
        workout
    }

    /// Copy a workout under a fresh id, dated `date`, and prepend the copy.
    pub fn duplicate_workout(&mut self, id: &str, date: &str) -> GymlogResult<Workout> {
        let source = self
            .find(id)
            .ok_or_else(|| GymlogError::WorkoutNotFound { id: id.to_string() })?;

        let options = CloneOptions {
            date: date.to_string(),
            title_suffix: self.duplicate_defaults.title_suffix.clone(),
            default_title: self.duplicate_defaults.default_title.clone(),
        };
        let copy = services::clone_workout(source, &options);

        let mut next = self.collection.clone();
        next.workouts.insert(0, copy.clone());
        self.commit(next);
        Ok(copy)
    }

    /// Replace the whole collection with an imported document.
    ///
    /// On a parse failure the current collection is left untouched.
    pub fn import_json(&mut self, text: &str) -> GymlogResult<usize> {
        let collection = services::parse_import(text)?;
        let count = collection.len();
        self.commit(collection);
        Ok(count)
    }

    /// Pretty-printed JSON of the collection.
    pub fn export_json(&self) -> GymlogResult<String> {
        Ok(serde_json::to_string_pretty(&self.collection)?)
    }

    /// Replace the collection with an empty one.
    pub fn reset(&mut self) {
        self.commit(WorkoutCollection::new());
    }

    pub fn stats(&self) -> AggregateStats {
        services::aggregate_stats(self.workouts())
    }

    pub fn weekly_summary(&self) -> Vec<SummaryRow> {
        services::weekly_summary(self.workouts())
    }

    pub fn monthly_summary(&self) -> Vec<SummaryRow> {
        services::monthly_summary(self.workouts())
    }

    pub fn exercise_prs(&self) -> Vec<PrRecord> {
        services::exercise_prs(self.workouts())
    }

    pub fn dashboard(&self, today: NaiveDate, limits: DashboardLimits) -> Dashboard {
        services::build_dashboard(self.workouts(), today, limits)
    }

    pub fn search(&self, query: &str) -> Vec<&Workout> {
        services::search(self.workouts(), query)
    }

    fn commit(&mut self, next: WorkoutCollection) {
        self.collection = next;
        save(self.repository.as_ref(), &self.profile_id, &self.collection);
    }
}

/// Load a profile's collection, falling back to the default on any failure.
pub fn load(repository: &dyn StoreRepository, profile_id: &str) -> WorkoutCollection {
    repository.load(profile_id).unwrap_or_else(|e| {
        tracing::warn!(profile = profile_id, error = %e, "unreadable workout store, starting empty");
        WorkoutCollection::new()
    })
}

/// Persist a profile's collection. Without a profile nothing is written;
/// write failures are logged and swallowed.
pub fn save(repository: &dyn StoreRepository, profile_id: &str, collection: &WorkoutCollection) {
    if profile_id.is_empty() {
        tracing::debug!("no active profile, workouts kept in memory only");
        return;
    }
    if let Err(e) = repository.save(profile_id, collection) {
        tracing::warn!(profile = profile_id, error = %e, "failed to persist workouts");
    }
}

/// Export file name for a profile.
pub fn export_file_name(profile_name: &str) -> String {
    let name = profile_name.trim();
    let name = if name.is_empty() { "profile" } else { name };
    format!("gymlog-{}-data.json", name)
}
