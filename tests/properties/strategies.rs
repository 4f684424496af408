//! Shared generators for workout documents.

use proptest::prelude::*;
use serde_json::{json, Value};

use gymlog::domain::services::shape_workout;
use gymlog::Workout;

/// Days in 2023-2025 as `YYYY-MM-DD`, or empty for an undated workout.
pub fn date() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (2023i32..=2025, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d)),
        1 => Just(String::new()),
    ]
}

/// Any value a form might put in a numeric field.
pub fn field() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => (0i64..300).prop_map(|n| json!(n)),
        1 => (-20i64..0).prop_map(|n| json!(n)),
        1 => (0i64..300).prop_map(|n| json!(n.to_string())),
        1 => Just(json!("")),
        1 => Just(json!("abc")),
        1 => Just(Value::Null),
    ]
}

pub fn set() -> impl Strategy<Value = Value> {
    (field(), field(), field()).prop_map(|(reps, weight, rest)| {
        json!({ "reps": reps, "weight": weight, "restSec": rest })
    })
}

pub fn exercise() -> impl Strategy<Value = Value> {
    (
        prop_oneof![Just("Squat"), Just("Bench"), Just(" Row "), Just(""), Just("Deadlift")],
        proptest::collection::vec(set(), 0..4),
    )
        .prop_map(|(name, sets)| json!({ "name": name, "sets": sets }))
}

pub fn workout_doc() -> impl Strategy<Value = Value> {
    (
        "[a-z0-9]{1,8}",
        date(),
        "[A-Za-z ]{0,12}",
        proptest::collection::vec(exercise(), 0..4),
    )
        .prop_map(|(id, date, title, exercises)| {
            json!({ "id": id, "date": date, "title": title, "exercises": exercises })
        })
}

pub fn workouts() -> impl Strategy<Value = Vec<Workout>> {
    proptest::collection::vec(workout_doc().prop_map(|doc| shape_workout(&doc)), 0..12)
}
