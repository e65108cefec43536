//! Column names, value cleaning and date conversion for the input extracts.

pub mod columns;
pub mod conversions;
pub mod date_utils;

pub use conversions::{coerce_int, strip_leading_quotes, strip_quotes};
pub use date_utils::{SERIAL_EPOCH, from_serial_days};
