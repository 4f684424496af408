//! Read-only reports: `stats`, `weekly`, `monthly`, `prs`, `dashboard`.

use anyhow::Result;

use gymlog::domain::services::PrRecord;

use super::{date_or_today, Context};
use crate::ui::output::{emit_json, print_stats, print_summary_rows};

pub fn cmd_stats(ctx: &Context) -> Result<()> {
    let stats = ctx.read_store().stats();
    if ctx.json {
        return emit_json(&stats);
    }
    print_stats("All time", &stats);
    Ok(())
}

pub fn cmd_weekly(ctx: &Context) -> Result<()> {
    let rows = ctx.read_store().weekly_summary();
    if ctx.json {
        return emit_json(&rows);
    }
    print_summary_rows("Week of", &rows);
    Ok(())
}

pub fn cmd_monthly(ctx: &Context) -> Result<()> {
    let rows = ctx.read_store().monthly_summary();
    if ctx.json {
        return emit_json(&rows);
    }
    print_summary_rows("Month", &rows);
    Ok(())
}

pub fn cmd_prs(ctx: &Context) -> Result<()> {
    let prs = ctx.read_store().exercise_prs();
    if ctx.json {
        return emit_json(&prs);
    }
    print_prs(&prs);
    Ok(())
}

pub fn cmd_dashboard(ctx: &Context, today: Option<&str>) -> Result<()> {
    let day = date_or_today(today)?;
    let dashboard = ctx
        .read_store()
        .dashboard(day, ctx.config.dashboard_limits());

    if ctx.json {
        return emit_json(&dashboard);
    }

    print_stats(&dashboard.today, &dashboard.today_stats);
    print_stats(&format!("Wk {}", dashboard.week), &dashboard.week_stats);
    print_stats(&dashboard.month, &dashboard.month_stats);
    println!();
    print_summary_rows("Week of", &dashboard.weekly);
    println!();
    print_summary_rows("Month", &dashboard.monthly);
    println!();
    print_prs(&dashboard.prs);
    Ok(())
}

fn print_prs(prs: &[PrRecord]) {
    if prs.is_empty() {
        println!("No personal records yet.");
        return;
    }

    println!("{:<24} {:>8} {:>6}  {}", "Exercise", "weight", "reps", "date");
    for pr in prs {
        println!(
            "{:<24} {:>8} {:>6}  {}",
            pr.name, pr.weight, pr.reps, pr.date
        );
    }
}
