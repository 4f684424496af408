//! Normalizer
//!
//! Turns loosely-shaped JSON into typed workout records.
//!
//! Two levels are distinguished:
//! - *shaping* maps any JSON onto the typed model, defaulting missing or
//!   wrong-typed fields, without changing the user's values;
//! - *finalizing* applies the save-time rules (fresh ids, trimmed text,
//!   exercises without a name dropped).
//!
//! Imports are shaped only. Saving a workout shapes and finalizes it.

use serde_json::{Map, Value};

use crate::domain::entities::{Exercise, Set, Workout, WorkoutCollection};
use crate::domain::value_objects::{uid, FieldValue};
use crate::error::{GymlogError, GymlogResult};

/// Options for [`clone_workout`].
#[derive(Debug, Clone)]
pub struct CloneOptions {
    /// Date given to the copy (usually today).
    pub date: String,
    /// Appended to the original title.
    pub title_suffix: String,
    /// Used when the original has no title.
    pub default_title: String,
}

/// Normalize a raw workout for saving.
pub fn normalize_workout(raw: &Value) -> Workout {
    finalize_workout(shape_workout(raw))
}

/// Apply the save-time rules to a typed workout draft.
///
/// Missing ids are assigned, title and notes are trimmed, exercise names
/// are trimmed and exercises left without a name are dropped. Set values
/// are kept exactly as entered.
pub fn finalize_workout(mut workout: Workout) -> Workout {
    if workout.id.is_empty() {
        workout.id = uid();
    }
    workout.title = workout.title.trim().to_string();
    workout.notes = workout.notes.trim().to_string();
    workout.exercises = workout
        .exercises
        .into_iter()
        .filter_map(|mut exercise| {
            exercise.name = exercise.name.trim().to_string();
            if exercise.name.is_empty() {
                return None;
            }
            if exercise.id.is_empty() {
                exercise.id = uid();
            }
            for set in &mut exercise.sets {
                if set.id.is_empty() {
                    set.id = uid();
                }
            }
            Some(exercise)
        })
        .collect();
    workout
}

/// Map any JSON value onto a `Workout` without normalizing it.
pub fn shape_workout(raw: &Value) -> Workout {
    Workout {
        id: id_text(raw.get("id")),
        date: text(raw.get("date")),
        title: text(raw.get("title")),
        notes: text(raw.get("notes")),
        exercises: sequence(raw.get("exercises"))
            .iter()
            .map(shape_exercise)
            .collect(),
    }
}

fn shape_exercise(raw: &Value) -> Exercise {
    Exercise {
        id: id_text(raw.get("id")),
        name: text(raw.get("name")),
        sets: sequence(raw.get("sets")).iter().map(shape_set).collect(),
    }
}

fn shape_set(raw: &Value) -> Set {
    Set {
        id: id_text(raw.get("id")),
        reps: field(raw.get("reps")),
        weight: field(raw.get("weight")),
        rest_sec: field(raw.get("restSec")),
    }
}

/// Merge an external snapshot over the default collection.
///
/// Non-object input yields the default collection. `workouts` that is not a
/// sequence becomes empty; sequence entries that are not objects are
/// discarded. Workouts are shaped, not finalized.
pub fn normalize_import(raw: &Value) -> WorkoutCollection {
    let Some(object) = raw.as_object() else {
        tracing::warn!("import document is not an object, using empty collection");
        return WorkoutCollection::new();
    };

    let mut extra = Map::new();
    let mut workouts = Vec::new();
    for (key, value) in object {
        if key != "workouts" {
            extra.insert(key.clone(), value.clone());
            continue;
        }
        let Some(entries) = value.as_array() else {
            continue;
        };
        for entry in entries {
            if entry.is_object() {
                workouts.push(shape_workout(entry));
            } else {
                tracing::warn!(entry = %entry, "discarding non-object workout entry");
            }
        }
    }

    WorkoutCollection { workouts, extra }
}

/// Parse and normalize an import document.
///
/// A JSON syntax error is the one failure surfaced, so callers can leave
/// their current collection untouched.
pub fn parse_import(text: &str) -> GymlogResult<WorkoutCollection> {
    let value: Value = serde_json::from_str(text).map_err(|e| GymlogError::InvalidImport {
        message: e.to_string(),
    })?;
    Ok(normalize_import(&value))
}

/// Duplicate a workout with fresh ids at every level.
///
/// Date comes from `options`, title gets the suffix, notes and set values are
/// copied unchanged.
pub fn clone_workout(workout: &Workout, options: &CloneOptions) -> Workout {
    let base_title = match workout.title.trim() {
        "" => options.default_title.as_str(),
        title => title,
    };

    Workout {
        id: uid(),
        date: options.date.clone(),
        title: format!("{}{}", base_title, options.title_suffix),
        notes: workout.notes.trim().to_string(),
        exercises: workout
            .exercises
            .iter()
            .map(|exercise| Exercise {
                id: uid(),
                name: exercise.name.trim().to_string(),
                sets: exercise
                    .sets
                    .iter()
                    .map(|set| Set {
                        id: uid(),
                        ..set.clone()
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

// Falsy ids (0, false, "") read as missing.
fn id_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::Bool(_)) => String::new(),
        other => text(other),
    }
}

fn field(value: Option<&Value>) -> FieldValue {
    value.map(FieldValue::from_json).unwrap_or_default()
}

fn sequence(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
