//! GymLog - workout log data model and aggregation engine
//!
//! GymLog keeps a profile-scoped collection of workouts (exercises, sets of
//! reps × weight), normalizes loosely-shaped input into canonical records,
//! and derives read-only views from it: per-workout and aggregate stats,
//! weekly and monthly summaries, personal records and a dashboard.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{export_file_name, ProfilesUseCase, WorkoutStore};
pub use config::{Config, Verbosity};
pub use domain::entities::{Exercise, Profile, Set, Workout, WorkoutCollection};
pub use domain::services::{
    aggregate_stats, exercise_prs, month_key, monthly_summary, normalize_import,
    normalize_workout, week_key, weekly_summary, workout_stats,
};
pub use domain::value_objects::FieldValue;
pub use error::{GymlogError, GymlogResult};
