//! Logging setup
//!
//! The library only emits `tracing` events. Binaries call [`init_logging`]
//! once to install a stderr subscriber.

use std::io;

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Install the global subscriber. `RUST_LOG` wins over the verbosity default.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
