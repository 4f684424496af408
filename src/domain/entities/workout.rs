//! Workout entities
//!
//! The persisted shape is `{ "workouts": [...] }` with camelCase field names.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::FieldValue;

/// One performance unit within an exercise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Set {
    pub id: String,
    pub reps: FieldValue,
    pub weight: FieldValue,
    pub rest_sec: FieldValue,
}

impl Set {
    pub fn new(
        id: impl Into<String>,
        reps: impl Into<FieldValue>,
        weight: impl Into<FieldValue>,
    ) -> Self {
        Self {
            id: id.into(),
            reps: reps.into(),
            weight: weight.into(),
            rest_sec: FieldValue::Blank,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    /// Serial order (S1, S2, ...) is meaningful.
    pub sets: Vec<Set>,
}

/// One logged training session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Workout {
    pub id: String,
    /// `YYYY-MM-DD`, or empty when not yet dated.
    pub date: String,
    pub title: String,
    pub notes: String,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Whether this workout participates in grouped views.
    pub fn is_dated(&self) -> bool {
        !self.date.is_empty()
    }

    pub fn sets(&self) -> impl Iterator<Item = &Set> {
        self.exercises.iter().flat_map(|e| e.sets.iter())
    }
}

/// The canonical workouts of one profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutCollection {
    #[serde(default)]
    pub workouts: Vec<Workout>,
    /// Unknown top-level keys, kept so that imports round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkoutCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the workout with the same id, or insert it at the front.
    pub fn upsert(&mut self, workout: Workout) {
        if let Some(existing) = self.workouts.iter_mut().find(|w| w.id == workout.id) {
            *existing = workout;
        } else {
            self.workouts.insert(0, workout);
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let len_before = self.workouts.len();
        self.workouts.retain(|w| w.id != id);
        self.workouts.len() != len_before
    }

    pub fn find(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}
