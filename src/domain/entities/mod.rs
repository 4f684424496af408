//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Workout` - One logged session with its exercises and sets
//! - `WorkoutCollection` - All workouts of one profile
//! - `ProfileRegistry` - Known profiles and the active pointer

mod profile;
mod workout;

pub use profile::{Profile, ProfileRegistry};
pub use workout::{Exercise, Set, Workout, WorkoutCollection};
