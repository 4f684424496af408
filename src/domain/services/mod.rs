//! Domain Services
//!
//! Stateless functions over workout snapshots. Nothing here mutates the
//! collection it is given.

pub mod dashboard;
pub mod grouping;
pub mod normalizer;
pub mod records;
pub mod search;
pub mod stats;

pub use dashboard::{build_dashboard, Dashboard, DashboardLimits};
pub use grouping::{
    calendar_month_key, group_by, month_key, monthly_summary, week_key, weekly_summary,
    SummaryRow, WorkoutGroups,
};
pub use normalizer::{
    clone_workout, finalize_workout, normalize_import, normalize_workout, parse_import,
    shape_workout, CloneOptions,
};
pub use records::{exercise_prs, PrRecord};
pub use search::search;
pub use stats::{aggregate_stats, workout_stats, AggregateStats, WorkoutStats};
