//! Identifier generation

use chrono::Utc;

/// Generate an opaque identifier: `<unix millis>_<random hex>`.
///
/// Unique with overwhelming probability within one session. Not a global
/// identifier; only uniqueness inside one profile's collection is relied on.
pub fn uid() -> String {
    format!("{}_{:x}", Utc::now().timestamp_millis(), rand::random::<u64>())
}
