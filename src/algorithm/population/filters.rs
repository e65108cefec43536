//! Record filtering criteria
//!
//! Filters for narrowing the enriched table down to a subset, most notably the
//! gold-coated registrants registered within a recent window.

use chrono::{Months, NaiveDateTime, NaiveTime};

use crate::models::{EnrichedRecord, EnrichedTable};

/// Defines a criterion for filtering entities
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A filter that can be applied to an enriched record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// Dominant coat color equals the value exactly (case-sensitive)
    DominantColor(String),
    /// Registration, taken at midnight, is at or after the timestamp
    RegisteredSince(NaiveDateTime),
    /// Combined filter that requires all criteria to be met
    All(Vec<RecordFilter>),
}

impl FilterCriteria<EnrichedRecord> for RecordFilter {
    fn meets_criteria(&self, record: &EnrichedRecord) -> bool {
        match self {
            Self::DominantColor(color) => record.profile.dominant_color == *color,
            Self::RegisteredSince(cutoff) => {
                record.registration_date().and_time(NaiveTime::MIN) >= *cutoff
            }
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(record)),
        }
    }
}

impl RecordFilter {
    /// Start of a window of `months` calendar months ending at `as_of`.
    ///
    /// The day of month is clamped to the end of a shorter month.
    #[must_use]
    pub fn recency_cutoff(as_of: NaiveDateTime, months: u32) -> NaiveDateTime {
        as_of
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDateTime::MIN)
    }

    /// Records with the given color registered within the last `months` of `as_of`
    #[must_use]
    pub fn gold_recent(color: &str, as_of: NaiveDateTime, months: u32) -> Self {
        Self::All(vec![
            Self::DominantColor(color.to_string()),
            Self::RegisteredSince(Self::recency_cutoff(as_of, months)),
        ])
    }
}

/// Select the gold/recency subset of `table`, keeping its layout
#[must_use]
pub fn select_gold_recent(
    table: &EnrichedTable,
    color: &str,
    as_of: NaiveDateTime,
    months: u32,
) -> EnrichedTable {
    let filter = RecordFilter::gold_recent(color, as_of, months);
    let subset = table.subset(|r| filter.meets_criteria(r));
    log::info!(
        "Selected {} of {} records with color {color} registered since {}",
        subset.len(),
        table.len(),
        RecordFilter::recency_cutoff(as_of, months)
    );
    subset
}
