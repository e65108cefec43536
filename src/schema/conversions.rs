//! Cleaning and coercion of raw text fields.

/// Spellings treated as a missing value
const MISSING_VALUES: [&str; 6] = ["", "nan", "NaN", "null", "None", "NA"];

/// Whether `s` spells a missing value
#[must_use]
pub fn is_missing(s: &str) -> bool {
    MISSING_VALUES.contains(&s.trim())
}

/// Trim whitespace and remove stray `"` from both ends
#[must_use]
pub fn strip_quotes(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim()
}

/// Trim whitespace and remove stray `"` from the start only
#[must_use]
pub fn strip_leading_quotes(raw: &str) -> &str {
    raw.trim().trim_start_matches('"').trim()
}

/// Coerce a cleaned field to an integer.
///
/// Accepts plain integers and float spellings with a zero fraction (`10001.0`),
/// which is how integer columns look once a missing value forced them to float.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn coerce_int(s: &str) -> Option<i64> {
    let s = s.trim();
    if is_missing(s) {
        return None;
    }
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }

    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 {
        Some(f as i64)
    } else {
        None
    }
}
