//! GymLog CLI - workout log with per-profile stats, summaries and PRs
//!
//! Usage: gymlog [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   profile    Create, list, switch and delete profiles
//!   workout    Add, list, show, remove and duplicate workouts
//!   stats      Totals across all workouts
//!   weekly     Per-week totals
//!   monthly    Per-month totals
//!   prs        Best set per exercise
//!   dashboard  Today, this week and this month at a glance
//!   export     Export workouts as JSON
//!   import     Replace workouts with a JSON document
//!   reset      Delete every workout of the active profile

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use gymlog::config::Config;
use gymlog::logging::init_logging;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.json);
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }
    init_logging(config.output.verbosity.raised_by(cli.verbose));
    tracing::debug!(data_dir = %config.data_dir().display(), "resolved configuration");

    let ctx = Context {
        config,
        json: cli.json,
    };

    match cli.command {
        Commands::Profile { action } => commands::profile::cmd_profile(&ctx, action),
        Commands::Workout { action } => commands::workout::cmd_workout(&ctx, action),
        Commands::Stats => commands::report::cmd_stats(&ctx),
        Commands::Weekly => commands::report::cmd_weekly(&ctx),
        Commands::Monthly => commands::report::cmd_monthly(&ctx),
        Commands::Prs => commands::report::cmd_prs(&ctx),
        Commands::Dashboard { today } => commands::report::cmd_dashboard(&ctx, today.as_deref()),
        Commands::Export { out } => commands::transfer::cmd_export(&ctx, out.as_deref()),
        Commands::Import { file } => commands::transfer::cmd_import(&ctx, &file),
        Commands::Reset { yes } => commands::transfer::cmd_reset(&ctx, yes),
    }
}

/// User config file (with unknown-key warnings) or defaults, then env overrides.
fn load_config(json: bool) -> Config {
    let Some(path) = Config::user_config_path().filter(|p| p.exists()) else {
        return Config::default().with_env_overrides();
    };

    match Config::load_with_warnings(&path) {
        Ok((config, warnings)) => {
            if !json {
                ui::output::print_config_warnings(&path, &warnings);
            }
            config.with_env_overrides()
        }
        Err(e) => {
            eprintln!("⚠ {}; using defaults", e);
            Config::default().with_env_overrides()
        }
    }
}
