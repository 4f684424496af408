//! Application Layer
//!
//! Use cases that wire domain services to repository ports.

pub mod profiles;
pub mod store;

pub use profiles::ProfilesUseCase;
pub use store::{export_file_name, DuplicateDefaults, WorkoutStore};
