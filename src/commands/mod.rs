//! Command handlers for the `gymlog` binary.
//!
//! Each handler loads what it needs through the presentation factory, calls
//! the library, and renders text or JSON.

pub mod profile;
pub mod report;
pub mod transfer;
pub mod workout;

use anyhow::Result;

use gymlog::config::Config;
use gymlog::domain::value_objects::{parse_date_input, today};
use gymlog::presentation::factory;
use gymlog::{GymlogError, WorkoutStore};

/// Options every handler receives.
pub struct Context {
    pub config: Config,
    pub json: bool,
}

impl Context {
    /// Store of the active profile, for read-only commands.
    pub fn read_store(&self) -> WorkoutStore {
        factory::open_active_workout_store(&self.config)
    }

    /// Store of the active profile. Fails when no profile is active, since
    /// changes would not be persisted.
    pub fn write_store(&self) -> Result<WorkoutStore> {
        let store = self.read_store();
        if store.profile_id().is_empty() {
            return Err(GymlogError::NoActiveProfile.into());
        }
        Ok(store)
    }
}

/// Parse an operator-supplied date, defaulting to today.
pub fn date_or_today(date: Option<&str>) -> Result<chrono::NaiveDate> {
    match date {
        None => Ok(today()),
        Some(text) => parse_date_input(text).ok_or_else(|| {
            GymlogError::InvalidDate {
                date: text.to_string(),
            }
            .into()
        }),
    }
}
