//! Dashboard
//!
//! Today / this week / this month totals, recent weekly and monthly rows,
//! and the top personal records, all relative to a given day.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::Workout;
use crate::domain::value_objects::format_iso_date;

use super::grouping::{
    calendar_month_key, monthly_summary, week_key, weekly_summary, SummaryRow,
};
use super::records::{exercise_prs, PrRecord};
use super::stats::{aggregate_stats, AggregateStats};

/// How many rows of each table the dashboard keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLimits {
    pub recent_weeks: usize,
    pub recent_months: usize,
    pub top_prs: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self {
            recent_weeks: 8,
            recent_months: 8,
            top_prs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub today: String,
    pub week: String,
    pub month: String,
    pub today_stats: AggregateStats,
    pub week_stats: AggregateStats,
    pub month_stats: AggregateStats,
    pub weekly: Vec<SummaryRow>,
    pub monthly: Vec<SummaryRow>,
    pub prs: Vec<PrRecord>,
}

/// Build the dashboard for `today`.
///
/// Workouts are ordered most recent date first before PR extraction, so on
/// an exact PR tie the most recent session is reported.
pub fn build_dashboard(
    workouts: &[Workout],
    today: NaiveDate,
    limits: DashboardLimits,
) -> Dashboard {
    let mut sorted = workouts.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let today = format_iso_date(today);
    let week = week_key(&today).unwrap_or_default();
    let month = calendar_month_key(&today).unwrap_or_default();

    let today_stats = aggregate_stats(sorted.iter().filter(|w| w.date == today));
    let week_stats = aggregate_stats(
        sorted
            .iter()
            .filter(|w| week_key(&w.date).as_deref() == Some(week.as_str())),
    );
    let month_stats = aggregate_stats(
        sorted
            .iter()
            .filter(|w| calendar_month_key(&w.date).as_deref() == Some(month.as_str())),
    );

    let mut weekly = weekly_summary(&sorted);
    weekly.truncate(limits.recent_weeks);
    let mut monthly = monthly_summary(&sorted);
    monthly.truncate(limits.recent_months);
    let mut prs = exercise_prs(&sorted);
    prs.truncate(limits.top_prs);

    Dashboard {
        today,
        week,
        month,
        today_stats,
        week_stats,
        month_stats,
        weekly,
        monthly,
        prs,
    }
}
