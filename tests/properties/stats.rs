//! Property tests for the stat calculator.

use proptest::prelude::*;

use gymlog::{aggregate_stats, workout_stats};

use super::strategies::workouts;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every set counts toward `sets`, valid or not.
    #[test]
    fn property_set_count_ignores_validity(workouts in workouts()) {
        for workout in &workouts {
            let total: usize = workout.exercises.iter().map(|e| e.sets.len()).sum();
            prop_assert_eq!(workout_stats(workout).sets, total);
        }
    }

    /// PROPERTY: Reps and volume are never negative.
    #[test]
    fn property_totals_are_non_negative(workouts in workouts()) {
        let stats = aggregate_stats(&workouts);
        prop_assert!(stats.reps >= 0.0);
        prop_assert!(stats.volume >= 0.0);
    }

    /// PROPERTY: Aggregation does not depend on workout order.
    ///
    /// Generated numbers are integers, so sums are exact in either order.
    #[test]
    fn property_aggregate_is_order_independent(workouts in workouts()) {
        let forward = aggregate_stats(&workouts);
        let backward = aggregate_stats(workouts.iter().rev());
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward.workouts, workouts.len());
    }
}
