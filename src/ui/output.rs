use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use gymlog::config::ConfigWarning;
use gymlog::domain::services::{AggregateStats, SummaryRow};

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Print a value as pretty JSON on stdout.
pub fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_stats(label: &str, stats: &AggregateStats) {
    println!(
        "{:<12} {:>4} workouts  {:>5} sets  {:>6} reps  {:>9} volume",
        label, stats.workouts, stats.sets, stats.reps, stats.volume
    );
}

pub fn print_summary_rows(heading: &str, rows: &[SummaryRow]) {
    if rows.is_empty() {
        println!("No dated workouts yet.");
        return;
    }

    println!(
        "{:<12} {:>8} {:>6} {:>7} {:>10}",
        heading, "workouts", "sets", "reps", "volume"
    );
    for row in rows {
        println!(
            "{:<12} {:>8} {:>6} {:>7} {:>10}",
            row.key, row.workouts, row.sets, row.reps, row.volume
        );
    }
}
