//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports: JSON files on the local
//! file system.

pub mod fs;
pub mod repositories;

pub use fs::{gymlog_data_dir, write_atomic, GYMLOG_DATA_DIR_VAR};
pub use repositories::{JsonProfileRepository, JsonStoreRepository};
