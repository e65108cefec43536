//! Transform stages of the registrant report
//!
//! Profile normalization and registration resolution are independent; both
//! feed the enrichment join, whose output the population statistics and
//! filters consume.

pub mod enrichment;
pub mod normalize;
pub mod population;
pub mod resolve;

pub use enrichment::{Enricher, inner_join};
pub use normalize::{NormalizedProfiles, ProfileStats, normalize_profiles};
pub use resolve::{ResolvedRegistrations, latest_per_registrant, resolve_registrations};
