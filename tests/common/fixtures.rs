//! Test fixtures - reusable workout documents.

/// One squat set of 5 × 100 on 2024-01-01
pub const SQUAT_WORKOUT: &str = r#"{
  "date": "2024-01-01",
  "title": "  Leg day  ",
  "exercises": [
    { "name": "Squat", "sets": [{ "reps": 5, "weight": 100, "restSec": 120 }] }
  ]
}"#;

/// Bench session with a blank exercise row that must be dropped on save
pub const BENCH_WORKOUT: &str = r#"{
  "date": "2024-01-03",
  "title": "Push",
  "exercises": [
    { "name": "  ", "sets": [{ "reps": 10, "weight": 20 }] },
    { "name": "Bench", "sets": [
      { "reps": 8, "weight": 60 },
      { "reps": "", "weight": 70 }
    ] }
  ]
}"#;

/// Import document with an undated workout and an unknown top-level key
pub const IMPORT_DOCUMENT: &str = r#"{
  "version": 2,
  "workouts": [
    { "id": "w1", "date": "2024-03-04", "title": "A",
      "exercises": [{ "id": "e1", "name": "Deadlift",
        "sets": [{ "id": "s1", "reps": 3, "weight": 140, "restSec": "" }] }] },
    { "id": "w2", "date": "", "title": "Undated",
      "exercises": [{ "id": "e2", "name": "Row",
        "sets": [{ "id": "s2", "reps": 10, "weight": 50, "restSec": 90 }] }] }
  ]
}"#;
