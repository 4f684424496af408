//! `gymlog workout ...`

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context as _, Result};
use serde_json::{json, Value};

use gymlog::domain::services::{shape_workout, workout_stats};
use gymlog::domain::value_objects::{format_iso_date, parse_date_input};
use gymlog::{GymlogError, Workout};

use super::{date_or_today, Context};
use crate::cli::WorkoutCommand;
use crate::ui::output::emit_json;

pub fn cmd_workout(ctx: &Context, action: WorkoutCommand) -> Result<()> {
    match action {
        WorkoutCommand::Add { file, date } => cmd_add(ctx, file.as_deref(), date.as_deref()),
        WorkoutCommand::List { search } => cmd_list(ctx, search.as_deref()),
        WorkoutCommand::Show { id } => cmd_show(ctx, &id),
        WorkoutCommand::Remove { id } => cmd_remove(ctx, &id),
        WorkoutCommand::Duplicate { id, date } => cmd_duplicate(ctx, &id, date.as_deref()),
    }
}

fn cmd_add(ctx: &Context, file: Option<&Path>, date: Option<&str>) -> Result<()> {
    let mut store = ctx.write_store()?;
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let draft = parse_draft(&text, date)?;
    let workout = store.save_workout(draft);

    if ctx.json {
        return emit_json(&workout);
    }
    println!("✓ Saved workout {} ({})", workout.id, workout.date);
    Ok(())
}

/// Shape a workout document and validate its date.
fn parse_draft(text: &str, date: Option<&str>) -> Result<Workout> {
    let raw: Value = serde_json::from_str(text).map_err(|e| GymlogError::InvalidImport {
        message: e.to_string(),
    })?;
    if !raw.is_object() {
        return Err(GymlogError::InvalidImport {
            message: "expected a workout object".to_string(),
        }
        .into());
    }

    let mut draft = shape_workout(&raw);
    if let Some(date) = date {
        draft.date = date.to_string();
    }

    let trimmed = draft.date.trim();
    if trimmed.is_empty() {
        return Err(GymlogError::MissingDate.into());
    }
    let day = parse_date_input(trimmed).ok_or_else(|| GymlogError::InvalidDate {
        date: trimmed.to_string(),
    })?;
    draft.date = format_iso_date(day);
    Ok(draft)
}

fn cmd_list(ctx: &Context, search: Option<&str>) -> Result<()> {
    let store = ctx.read_store();
    let workouts: Vec<&Workout> = match search {
        Some(query) => store.search(query),
        None => store.workouts().iter().collect(),
    };

    if ctx.json {
        return emit_json(&workouts);
    }
    if workouts.is_empty() {
        println!("No workouts.");
        return Ok(());
    }
    for workout in workouts {
        let stats = workout_stats(workout);
        println!(
            "{}  {:<10}  {:<24} {:>3} sets  {:>8} volume",
            workout.id,
            if workout.date.is_empty() { "-" } else { workout.date.as_str() },
            workout.title,
            stats.sets,
            stats.volume
        );
    }
    Ok(())
}

fn cmd_show(ctx: &Context, id: &str) -> Result<()> {
    let store = ctx.read_store();
    let workout = store
        .find(id)
        .ok_or_else(|| GymlogError::WorkoutNotFound { id: id.to_string() })?;
    let stats = workout_stats(workout);

    if ctx.json {
        return emit_json(&json!({ "workout": workout, "stats": stats }));
    }

    println!("{}  {}", workout.date, workout.title);
    if !workout.notes.is_empty() {
        println!("  {}", workout.notes);
    }
    for exercise in &workout.exercises {
        println!("  {}", exercise.name);
        for (i, set) in exercise.sets.iter().enumerate() {
            println!(
                "    {}. {} × {}  rest {}",
                i + 1,
                set.reps,
                set.weight,
                set.rest_sec
            );
        }
    }
    println!(
        "  {} sets, {} reps, {} volume",
        stats.sets, stats.reps, stats.volume
    );
    Ok(())
}

fn cmd_remove(ctx: &Context, id: &str) -> Result<()> {
    let mut store = ctx.write_store()?;
    if !store.remove_workout(id) {
        return Err(GymlogError::WorkoutNotFound { id: id.to_string() }.into());
    }

    if ctx.json {
        return emit_json(&json!({ "removed": id }));
    }
    println!("✓ Removed workout {}", id);
    Ok(())
}

fn cmd_duplicate(ctx: &Context, id: &str, date: Option<&str>) -> Result<()> {
    let day = date_or_today(date)?;
    let mut store = ctx.write_store()?;
    let copy = store.duplicate_workout(id, &format_iso_date(day))?;

    if ctx.json {
        return emit_json(&copy);
    }
    println!("✓ Duplicated as {} '{}' ({})", copy.id, copy.title, copy.date);
    Ok(())
}
