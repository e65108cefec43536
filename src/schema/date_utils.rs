//! Module for handling serial day-count dates.
//!
//! The extracts store dates as a number of days added to 1900-01-01. The
//! conversion is purely additive: day 0 is 1900-01-01 and there is no leap-year
//! correction of any kind.

use chrono::{Days, NaiveDate};

use crate::schema::conversions::coerce_int;

/// Day zero of the serial date convention
pub const SERIAL_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("invalid serial epoch"),
};

/// Convert a day offset to a calendar date
#[must_use]
pub fn from_serial_days(days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        SERIAL_EPOCH.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        SERIAL_EPOCH.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Day offset of a calendar date
#[must_use]
pub fn to_serial_days(date: NaiveDate) -> i64 {
    date.signed_duration_since(SERIAL_EPOCH).num_days()
}

/// Parse a raw serial field into its day count and calendar date
#[must_use]
pub fn parse_serial_date(s: &str) -> Option<(i64, NaiveDate)> {
    let days = coerce_int(s)?;
    from_serial_days(days).map(|date| (days, date))
}
