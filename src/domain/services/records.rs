//! PR Extractor
//!
//! Finds the best set ever logged for each exercise name.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::Workout;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrRecord {
    pub name: String,
    pub weight: f64,
    pub reps: f64,
    /// Date of the workout that holds the record, empty if undated.
    pub date: String,
}

impl PrRecord {
    /// Strictly better: heavier, or same weight for more reps.
    fn beats(&self, current: &PrRecord) -> bool {
        self.weight > current.weight || (self.weight == current.weight && self.reps > current.reps)
    }
}

/// Best set per trimmed, non-empty exercise name.
///
/// Sets are visited in workout order, then exercise and set order. A
/// candidate needs positive weight and reps. Exact ties keep the first seen.
/// Output is sorted by weight, then reps (both descending), then name.
pub fn exercise_prs(workouts: &[Workout]) -> Vec<PrRecord> {
    let mut best: Vec<PrRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for workout in workouts {
        for exercise in &workout.exercises {
            let name = exercise.name.trim();
            if name.is_empty() {
                continue;
            }

            for set in &exercise.sets {
                let (Some(weight), Some(reps)) = (set.weight.positive(), set.reps.positive())
                else {
                    continue;
                };
                let candidate = PrRecord {
                    name: name.to_string(),
                    weight,
                    reps,
                    date: workout.date.clone(),
                };

                match index.get(name) {
                    Some(&i) if candidate.beats(&best[i]) => best[i] = candidate,
                    Some(_) => {}
                    None => {
                        index.insert(name.to_string(), best.len());
                        best.push(candidate);
                    }
                }
            }
        }
    }

    best.sort_by(compare_records);
    best
}

fn compare_records(a: &PrRecord, b: &PrRecord) -> Ordering {
    b.weight
        .total_cmp(&a.weight)
        .then_with(|| b.reps.total_cmp(&a.reps))
        .then_with(|| a.name.cmp(&b.name))
}
