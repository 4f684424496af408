//! Scenario: Shared Device
//!
//! Journey: Two people log workouts on one machine under separate profiles.
//!
//! Steps:
//! 1. Ana creates a profile and logs a workout
//! 2. Luis creates a profile; his log starts empty
//! 3. Luis logs a workout, then switches back to Ana
//! 4. Ana's profile is deleted
//!
//! Success Criteria:
//! - Each profile only sees its own workouts
//! - Deleting the active profile leaves no active profile

use crate::common::*;
use crate::{assert_output_contains, assert_success};

/// SCENARIO: Profiles isolate workout data
#[test]
fn scenario_profiles_isolate_workouts() {
    let env = TestEnv::with_profile("Ana");
    env.add_workout(SQUAT_WORKOUT);

    assert_success!(env.run(&["profile", "create", "Luis"]));
    let luis_stats = env.run(&["--json", "stats"]).json();
    assert_eq!(luis_stats["workouts"], 0);

    env.add_workout(BENCH_WORKOUT);
    assert_success!(env.run(&["profile", "use", "Ana"]));

    let ana_list = env.run(&["--json", "workout", "list"]).json();
    assert_eq!(ana_list.as_array().unwrap().len(), 1);
    assert_eq!(ana_list[0]["title"], "Leg day");

    assert_success!(env.run(&["profile", "delete", "Ana"]));
    let current = env.run(&["profile", "current"]);
    assert_output_contains!(current, "No active profile.");

    let orphaned = env.run_with_stdin(&["workout", "add"], Some(SQUAT_WORKOUT));
    assert!(!orphaned.success);
    assert_output_contains!(orphaned, "no active profile");
}
