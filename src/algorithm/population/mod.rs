//! Population statistics over the enriched table
//!
//! This module provides the gold/recency selection and the per-region
//! mixed-breed statistics reported at the end of a run.

pub mod filters;
pub mod statistics;

// Re-export commonly used items
pub use filters::{FilterCriteria, RecordFilter, select_gold_recent};
pub use statistics::{CensusStats, RegionStatistics, RegionSummary, checked_percent, round2};
