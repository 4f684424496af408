//! Presentation Layer
//!
//! Wires configuration and on-disk repositories into the application use
//! cases. The `gymlog` binary builds everything through [`factory`].

pub mod factory;

pub use factory::{create_profiles_use_case, open_active_workout_store, open_workout_store};
