//! Property tests for import normalization.

use proptest::prelude::*;
use serde_json::{json, Value};

use gymlog::domain::services::finalize_workout;
use gymlog::{normalize_import, normalize_workout, WorkoutCollection};

use super::strategies::{workout_doc, workouts};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Re-importing an exported canonical collection reproduces it.
    #[test]
    fn property_export_import_round_trip(workouts in workouts()) {
        let collection = WorkoutCollection {
            workouts: workouts.into_iter().map(finalize_workout).collect(),
            ..Default::default()
        };

        let text = serde_json::to_string(&collection).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(normalize_import(&value), collection);
    }

    /// PROPERTY: Normalized workouts have ids everywhere and no unnamed exercises.
    #[test]
    fn property_normalized_workout_is_canonical(doc in workout_doc()) {
        let workout = normalize_workout(&doc);
        prop_assert!(!workout.id.is_empty());
        for exercise in &workout.exercises {
            prop_assert!(!exercise.id.is_empty());
            prop_assert!(!exercise.name.is_empty());
            prop_assert_eq!(exercise.name.trim(), exercise.name.as_str());
            prop_assert!(exercise.sets.iter().all(|s| !s.id.is_empty()));
        }
    }

    /// PROPERTY: Import never panics and never fails on any JSON shape.
    #[test]
    fn property_import_accepts_any_shape(
        workouts in prop_oneof![
            Just(Value::Null),
            Just(json!(42)),
            Just(json!("text")),
            Just(json!({"a": 1})),
            proptest::collection::vec(prop_oneof![Just(json!(1)), workout_doc()], 0..4)
                .prop_map(Value::from),
        ]
    ) {
        let collection = normalize_import(&json!({ "workouts": workouts.clone() }));
        let expected = workouts
            .as_array()
            .map(|items| items.iter().filter(|v| v.is_object()).count())
            .unwrap_or(0);
        prop_assert_eq!(collection.len(), expected);
    }
}
