//! Property tests for personal records.

use proptest::prelude::*;

use gymlog::exercise_prs;

use super::strategies::workouts;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No valid set of an exercise beats its record.
    #[test]
    fn property_no_set_beats_its_record(workouts in workouts()) {
        let prs = exercise_prs(&workouts);

        for workout in &workouts {
            for exercise in &workout.exercises {
                let name = exercise.name.trim();
                for set in &exercise.sets {
                    let (Some(weight), Some(reps)) = (set.weight.positive(), set.reps.positive()) else {
                        continue;
                    };
                    let pr = prs.iter().find(|p| p.name == name);
                    prop_assert!(pr.is_some(), "missing record for {}", name);
                    let pr = pr.unwrap();
                    prop_assert!(
                        weight < pr.weight || (weight == pr.weight && reps <= pr.reps),
                        "{} × {} beats {:?}", weight, reps, pr
                    );
                }
            }
        }
    }

    /// PROPERTY: Records are sorted by weight, then reps, both descending.
    #[test]
    fn property_records_are_sorted(workouts in workouts()) {
        let prs = exercise_prs(&workouts);
        let sorted = prs.windows(2).all(|pair| {
            pair[0].weight > pair[1].weight
                || (pair[0].weight == pair[1].weight && pair[0].reps >= pair[1].reps)
        });
        prop_assert!(sorted);
    }
}
