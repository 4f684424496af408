//! Calendar dates
//!
//! Workout dates are plain `YYYY-MM-DD` calendar values. They never carry a
//! time of day or a timezone, so week arithmetic cannot drift.

use chrono::{Local, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";

/// Parse a canonical `YYYY-MM-DD` string into a calendar date.
///
/// Only strings that format back to themselves are accepted: no surrounding
/// whitespace, no unpadded month or day. Every accepted string therefore
/// sorts chronologically.
pub fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(date, ISO_DATE).ok()?;
    (format_iso_date(parsed) == date).then_some(parsed)
}

/// Parse a date typed by an operator, tolerating surrounding whitespace and
/// an unpadded month or day.
pub fn parse_date_input(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), ISO_DATE).ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
