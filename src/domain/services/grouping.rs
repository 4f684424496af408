//! Grouping Engine
//!
//! Buckets workouts by calendar week (Monday) or month (`YYYY-MM`) and
//! rolls each bucket up into a `SummaryRow`.

use std::collections::HashMap;

use chrono::{Datelike, Days};
use serde::Serialize;

use crate::domain::entities::Workout;
use crate::domain::value_objects::{format_iso_date, parse_iso_date};

use super::stats::aggregate_stats;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub key: String,
    pub workouts: usize,
    pub sets: usize,
    pub reps: f64,
    pub volume: f64,
}

/// The Monday on or before `date`, as `YYYY-MM-DD`.
///
/// `None` when `date` is not a valid calendar date.
pub fn week_key(date: &str) -> Option<String> {
    let date = parse_iso_date(date)?;
    let offset = u64::from(date.weekday().num_days_from_monday());
    let monday = date.checked_sub_days(Days::new(offset))?;
    Some(format_iso_date(monday))
}

/// The first seven characters of `date` (`YYYY-MM`).
pub fn month_key(date: &str) -> String {
    date.chars().take(7).collect()
}

/// `month_key` of a canonical `YYYY-MM-DD` date, `None` for anything else.
///
/// Shares its date check with `week_key`, so a workout is either in both a
/// week and a month bucket or in neither.
pub fn calendar_month_key(date: &str) -> Option<String> {
    parse_iso_date(date).map(|_| month_key(date))
}

/// Workouts bucketed by key, in order of each key's first appearance.
#[derive(Debug, Default)]
pub struct WorkoutGroups<'a> {
    buckets: Vec<(String, Vec<&'a Workout>)>,
    index: HashMap<String, usize>,
}

impl<'a> WorkoutGroups<'a> {
    fn push(&mut self, key: String, workout: &'a Workout) {
        match self.index.get(&key) {
            Some(&i) => self.buckets[i].1.push(workout),
            None => {
                self.index.insert(key.clone(), self.buckets.len());
                self.buckets.push((key, vec![workout]));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[&'a Workout]> {
        self.index.get(key).map(|&i| self.buckets[i].1.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a Workout])> {
        self.buckets
            .iter()
            .map(|(key, items)| (key.as_str(), items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Bucket dated workouts by `key_fn(date)`.
///
/// Workouts with an empty date, or a date `key_fn` cannot key, are skipped.
pub fn group_by<'a, F>(workouts: &'a [Workout], key_fn: F) -> WorkoutGroups<'a>
where
    F: Fn(&str) -> Option<String>,
{
    let mut groups = WorkoutGroups::default();
    for workout in workouts.iter().filter(|w| w.is_dated()) {
        if let Some(key) = key_fn(&workout.date) {
            groups.push(key, workout);
        }
    }
    groups
}

/// One row per week, most recent first.
pub fn weekly_summary(workouts: &[Workout]) -> Vec<SummaryRow> {
    summarize(&group_by(workouts, week_key))
}

/// One row per month, most recent first.
pub fn monthly_summary(workouts: &[Workout]) -> Vec<SummaryRow> {
    summarize(&group_by(workouts, calendar_month_key))
}

// Keys are zero-padded ISO prefixes, so string order is date order.
fn summarize(groups: &WorkoutGroups<'_>) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = groups
        .iter()
        .map(|(key, items)| {
            let stats = aggregate_stats(items.iter().copied());
            SummaryRow {
                key: key.to_string(),
                workouts: stats.workouts,
                sets: stats.sets,
                reps: stats.reps,
                volume: stats.volume,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.key.cmp(&a.key));
    rows
}
