//! Join and enrichment
//!
//! Profiles are inner-joined to their resolved registration, then each record
//! gets a region from the range table and, for the mixed breed, the indicator
//! of that region.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::models::{EnrichedRecord, EnrichedTable, EntityModel, RegionTable};

use super::normalize::NormalizedProfiles;
use super::resolve::ResolvedRegistrations;

/// Inner join on the model id, preserving the order of `left`.
///
/// Every left entity with a matching right entity yields one pair; left
/// entities without a match are dropped.
#[must_use]
pub fn inner_join<L, R>(left: Vec<L>, right: &[R]) -> Vec<(L, R)>
where
    L: EntityModel,
    R: EntityModel<Id = L::Id>,
{
    let index: FxHashMap<&L::Id, &R> = right.iter().map(|r| (r.id(), r)).collect();

    left.into_iter()
        .filter_map(|l| {
            let matched = index.get(l.id()).map(|r| (*r).clone());
            matched.map(|r| (l, r))
        })
        .collect()
}

/// Builds the enriched table from cleaned inputs
#[derive(Debug, Clone)]
pub struct Enricher<'a> {
    regions: &'a RegionTable,
    mixed_breed: &'a str,
    strict_regions: bool,
}

impl<'a> Enricher<'a> {
    /// Create an enricher using `regions` and the breed value counted as mixed
    #[must_use]
    pub fn new(regions: &'a RegionTable, mixed_breed: &'a str) -> Self {
        Self {
            regions,
            mixed_breed,
            strict_regions: false,
        }
    }

    /// Fail on zip codes no range covers instead of leaving the region unset
    #[must_use]
    pub fn with_strict_regions(mut self, strict: bool) -> Self {
        self.strict_regions = strict;
        self
    }

    /// Join profiles to registrations and derive region and indicator
    pub fn enrich(
        &self,
        profiles: NormalizedProfiles,
        registrations: &ResolvedRegistrations,
    ) -> Result<EnrichedTable> {
        let profile_count = profiles.profiles.len();
        let joined = inner_join(profiles.profiles, &registrations.events);
        log::info!(
            "Joined {} of {} profiles to a registration",
            joined.len(),
            profile_count
        );

        let mut unmatched = 0usize;
        let mut records = Vec::with_capacity(joined.len());
        for (profile, registration) in joined {
            let region = if self.strict_regions {
                Some(self.regions.require(profile.zip_code)?.to_string())
            } else {
                self.regions.assign(profile.zip_code).map(str::to_string)
            };
            if region.is_none() {
                unmatched += 1;
            }

            let mixed = region.is_some() && profile.breed == self.mixed_breed;
            records.push(EnrichedRecord {
                profile,
                registration,
                region,
                mixed,
            });
        }

        if unmatched > 0 {
            log::warn!("{unmatched} records have a zip code outside every region range");
        }

        Ok(EnrichedTable {
            extra_columns: profiles.extra_columns,
            registration_columns: registrations.extra_columns.clone(),
            regions: self.regions.region_names(),
            records,
        })
    }
}
