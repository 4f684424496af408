//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --data-dir) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// GymLog - workout log with per-profile stats, summaries and PRs
#[derive(Parser, Debug)]
#[command(name = "gymlog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Data directory (overrides config and GYMLOG_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage profiles
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Manage workouts of the active profile
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Totals across all workouts
    Stats,

    /// Per-week totals, most recent week first
    Weekly,

    /// Per-month totals, most recent month first
    Monthly,

    /// Best set per exercise
    Prs,

    /// Today, this week and this month at a glance
    Dashboard {
        /// Day to report on (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        today: Option<String>,
    },

    /// Export the active profile's workouts as JSON
    Export {
        /// Output file or directory (prints to stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Replace the active profile's workouts with a JSON document
    Import {
        /// JSON file to import
        file: PathBuf,
    },

    /// Delete every workout of the active profile
    Reset {
        /// Confirm the reset
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Create a profile and make it active
    Create {
        /// Display name
        name: String,
    },

    /// List profiles, newest first
    List,

    /// Switch the active profile
    Use {
        /// Profile id or name
        profile: String,
    },

    /// Remove a profile from the registry
    Delete {
        /// Profile id or name
        profile: String,
    },

    /// Show the active profile
    Current,

    /// Clear the active profile, keeping every profile's workouts
    SignOut,
}

#[derive(Subcommand, Debug)]
pub enum WorkoutCommand {
    /// Save a workout from a JSON document
    Add {
        /// JSON file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Date to use instead of the document's
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },

    /// List workouts, newest first
    List {
        /// Only workouts whose date, title or exercise names contain this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one workout with its exercises and sets
    Show {
        /// Workout id
        id: String,
    },

    /// Delete a workout
    Remove {
        /// Workout id
        id: String,
    },

    /// Copy a workout under a new id
    Duplicate {
        /// Workout id
        id: String,

        /// Date for the copy (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },
}
