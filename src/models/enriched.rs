//! Enriched registrant records
//!
//! One record per joined (profile, latest registration) pair, plus the derived
//! region and mixed-breed indicator. The table also remembers the column layout
//! shared by every export: extra profile columns and one indicator column per
//! known region.

use chrono::NaiveDate;

use super::profile::RegistrantProfile;
use super::registration::RegistrationEvent;

/// A profile joined with its most recent registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRecord {
    /// The cleaned profile
    pub profile: RegistrantProfile,
    /// The registrant's most recent registration
    pub registration: RegistrationEvent,
    /// Region of the zip code, unset when no range matched
    pub region: Option<String>,
    /// Mixed-breed indicator; only ever set together with a region, and then
    /// marks that region's indicator column
    pub mixed: bool,
}

impl EnrichedRecord {
    /// Registrant identifier
    #[must_use]
    pub fn registrant_id(&self) -> i64 {
        self.profile.registrant_id
    }

    /// Date of the resolved registration
    #[must_use]
    pub fn registration_date(&self) -> NaiveDate {
        self.registration.registration_date
    }

    /// Whether the indicator column of `region` is set for this record
    #[must_use]
    pub fn is_mixed_in(&self, region: &str) -> bool {
        self.mixed && self.region.as_deref() == Some(region)
    }
}

/// The enriched table and its column layout
#[derive(Debug, Clone, Default)]
pub struct EnrichedTable {
    /// Names of additional profile columns carried through
    pub extra_columns: Vec<String>,
    /// Names of additional registration columns carried through
    pub registration_columns: Vec<String>,
    /// Known regions, in range-table order; one indicator column each
    pub regions: Vec<String>,
    /// Records in profile order
    pub records: Vec<EnrichedRecord>,
}

impl EnrichedTable {
    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with a region assigned
    pub fn with_region(&self) -> impl Iterator<Item = (&str, &EnrichedRecord)> {
        self.records
            .iter()
            .filter_map(|r| r.region.as_deref().map(|region| (region, r)))
    }

    /// A table with the same layout holding only the matching records
    #[must_use]
    pub fn subset<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&EnrichedRecord) -> bool,
    {
        Self {
            extra_columns: self.extra_columns.clone(),
            registration_columns: self.registration_columns.clone(),
            regions: self.regions.clone(),
            records: self.records.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// Registrant ids in record order
    #[must_use]
    pub fn registrant_ids(&self) -> Vec<i64> {
        self.records.iter().map(EnrichedRecord::registrant_id).collect()
    }
}
