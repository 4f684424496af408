//! Stat Calculator
//!
//! Counts sets, reps and volume. Invalid numbers are ignored, never errors.

use std::ops::AddAssign;

use serde::Serialize;

use crate::domain::entities::Workout;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WorkoutStats {
    pub sets: usize,
    pub reps: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AggregateStats {
    pub workouts: usize,
    pub sets: usize,
    pub reps: f64,
    pub volume: f64,
}

impl AddAssign<WorkoutStats> for AggregateStats {
    fn add_assign(&mut self, stats: WorkoutStats) {
        self.workouts += 1;
        self.sets += stats.sets;
        self.reps += stats.reps;
        self.volume += stats.volume;
    }
}

/// Stats of a single workout.
///
/// Every set counts toward `sets`. Reps count when they are a finite number
/// above zero; volume additionally needs a positive weight.
pub fn workout_stats(workout: &Workout) -> WorkoutStats {
    let mut stats = WorkoutStats::default();
    for set in workout.sets() {
        stats.sets += 1;
        let Some(reps) = set.reps.positive() else {
            continue;
        };
        stats.reps += reps;
        if let Some(weight) = set.weight.positive() {
            stats.volume += weight * reps;
        }
    }
    stats
}

/// Sum of [`workout_stats`] over `workouts`, plus the workout count.
pub fn aggregate_stats<'a, I>(workouts: I) -> AggregateStats
where
    I: IntoIterator<Item = &'a Workout>,
{
    workouts
        .into_iter()
        .fold(AggregateStats::default(), |mut acc, workout| {
            acc += workout_stats(workout);
            acc
        })
}
