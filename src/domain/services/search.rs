//! Workout search

use crate::domain::entities::Workout;

/// Case-insensitive substring match over date, title and exercise names.
///
/// A blank query matches everything.
pub fn search<'a>(workouts: &'a [Workout], query: &str) -> Vec<&'a Workout> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return workouts.iter().collect();
    }

    workouts
        .iter()
        .filter(|workout| haystack(workout).contains(&query))
        .collect()
}

fn haystack(workout: &Workout) -> String {
    let names: Vec<&str> = workout.exercises.iter().map(|e| e.name.as_str()).collect();
    format!("{} {} {}", workout.date, workout.title, names.join(" ")).to_lowercase()
}
