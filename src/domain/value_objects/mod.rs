//! Value Objects
//!
//! Immutable types with no identity of their own.

mod calendar;
mod field_value;
mod id;

pub use calendar::{format_iso_date, parse_date_input, parse_iso_date, today};
pub use field_value::{EnteredText, FieldValue};
pub use id::uid;
