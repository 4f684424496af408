//! Scenario: First Training Week
//!
//! Journey: A new user logs a week of training and reviews progress.
//!
//! Steps:
//! 1. User creates a profile
//! 2. User logs three sessions, one of them with an unfinished row
//! 3. User repeats Monday's session the next Monday
//! 4. User checks stats, weekly rows and PRs
//!
//! Success Criteria:
//! - Unfinished rows never reach the saved workout
//! - The repeated session is a separate workout
//! - Reports agree with what was logged

use crate::common::*;
use crate::{assert_output_contains, assert_success};

const MONDAY: &str = r#"{
  "date": "2024-01-01", "title": "Lower",
  "exercises": [
    { "name": "Squat", "sets": [{ "reps": 5, "weight": 100 }, { "reps": 5, "weight": 100 }] }
  ]
}"#;

const WEDNESDAY: &str = r#"{
  "date": "2024-01-03", "title": "Upper",
  "exercises": [
    { "name": "Bench", "sets": [{ "reps": 5, "weight": 70 }] },
    { "name": "", "sets": [{ "reps": 5, "weight": 999 }] }
  ]
}"#;

const FRIDAY: &str = r#"{
  "date": "2024-01-05", "title": "Lower",
  "exercises": [
    { "name": "Squat", "sets": [{ "reps": 6, "weight": 100 }, { "reps": "x", "weight": 120 }] }
  ]
}"#;

/// SCENARIO: User logs a week, repeats a session and reads the reports
#[test]
fn scenario_first_training_week() {
    let env = TestEnv::with_profile("Ana");

    let monday = env.add_workout(MONDAY);
    env.add_workout(WEDNESDAY);
    env.add_workout(FRIDAY);

    let result = env.run(&["workout", "duplicate", &monday, "--date", "2024-01-08"]);
    assert_success!(result);
    assert_output_contains!(result, "Lower (copy)");

    let stats = env.run(&["--json", "stats"]).json();
    assert_eq!(stats["workouts"], 4);
    assert_eq!(stats["sets"], 7);
    assert_eq!(stats["reps"].as_f64(), Some(31.0));
    assert_eq!(stats["volume"].as_f64(), Some(2950.0));

    let weekly = env.run(&["--json", "weekly"]).json();
    let keys: Vec<&str> = weekly
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, ["2024-01-08", "2024-01-01"]);
    assert_eq!(weekly[1]["workouts"], 3);

    let prs = env.run(&["--json", "prs"]).json();
    assert_eq!(prs[0]["name"], "Squat");
    assert_eq!(prs[0]["reps"].as_f64(), Some(6.0));
    assert_eq!(prs[0]["date"], "2024-01-05");
    assert_eq!(prs[1]["name"], "Bench");
    assert_eq!(prs.as_array().unwrap().len(), 2);
}
