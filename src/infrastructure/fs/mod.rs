//! File system helpers

mod data_dir;
mod write;

pub use data_dir::{gymlog_data_dir, GYMLOG_DATA_DIR_VAR};
pub use write::write_atomic;
