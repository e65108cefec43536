//! Population statistics and summaries
//!
//! Per-region population counts, mixed-breed percentages and the ranking of
//! the regions with the smallest mixed-breed share.

use std::fmt::Write as _;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::models::EnrichedTable;

/// Number of regions reported by the lowest-share ranking
pub const LOWEST_REGION_COUNT: usize = 2;

/// Round to two decimal places, exact halves to the even digit
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `part / total * 100` rounded to two decimals; a zero total is an error
#[allow(clippy::cast_precision_loss)]
pub fn checked_percent(region: &str, part: usize, total: usize) -> Result<f64> {
    if total == 0 {
        return Err(Error::Division {
            region: region.to_string(),
        });
    }
    Ok(round2(part as f64 / total as f64 * 100.0))
}

/// Format a percentage the way the report prints it: whole numbers keep one
/// decimal (`100.0`), everything else prints at its shortest
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Statistics for one region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSummary {
    /// Region name
    pub region_name: String,
    /// Records assigned to the region
    pub student_count: usize,
    /// Records carrying the region's mixed-breed indicator
    pub mixed_count: usize,
    /// `mixed_count / student_count * 100`, rounded to two decimals
    pub mixed_percent: f64,
}

/// Structure containing the figures of a run's report
#[derive(Debug, Clone, PartialEq)]
pub struct CensusStats {
    /// Profiles surviving normalization
    pub total_profiles: usize,
    /// Registrant ids in the gold/recency subset, in record order
    pub gold_ids: Vec<i64>,
    /// Recency window in months
    pub recency_months: u32,
    /// Breed value counted as mixed
    pub mixed_breed: String,
    /// Per-region statistics, most populous first
    pub regions: Vec<RegionSummary>,
    /// Regions with the smallest mixed share, smallest first
    pub lowest_mixed: Vec<RegionSummary>,
}

/// Functions for region statistics and summaries
pub struct RegionStatistics;

impl RegionStatistics {
    /// Per-region counts and percentages.
    ///
    /// Regions are ordered by descending record count; ties keep the order in
    /// which the regions were first encountered. Records without a region are
    /// left out.
    pub fn summarize(table: &EnrichedTable) -> Result<Vec<RegionSummary>> {
        let mut position: FxHashMap<&str, usize> = FxHashMap::default();
        let mut counts: Vec<(&str, usize, usize)> = Vec::new();

        for (region, record) in table.with_region() {
            let idx = *position.entry(region).or_insert_with(|| {
                counts.push((region, 0, 0));
                counts.len() - 1
            });
            let entry = &mut counts[idx];
            entry.1 += 1;
            if record.is_mixed_in(region) {
                entry.2 += 1;
            }
        }

        counts
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .map(|(region, total, mixed)| -> Result<RegionSummary> {
                Ok(RegionSummary {
                    region_name: region.to_string(),
                    student_count: total,
                    mixed_count: mixed,
                    mixed_percent: checked_percent(region, mixed, total)?,
                })
            })
            .collect()
    }

    /// The regions with the smallest mixed share, smallest first.
    ///
    /// Regions are stably sorted by descending percentage and the last
    /// `LOWEST_REGION_COUNT` are returned in reverse.
    pub fn lowest_mixed(summaries: &[RegionSummary]) -> Result<Vec<RegionSummary>> {
        if summaries.len() < LOWEST_REGION_COUNT {
            return Err(Error::InsufficientData {
                needed: LOWEST_REGION_COUNT,
                found: summaries.len(),
            });
        }

        let descending: Vec<&RegionSummary> = summaries
            .iter()
            .sorted_by(|a, b| b.mixed_percent.total_cmp(&a.mixed_percent))
            .collect();

        Ok(descending
            .iter()
            .rev()
            .take(LOWEST_REGION_COUNT)
            .map(|s| (*s).clone())
            .collect())
    }

    /// Generate the textual report
    #[must_use]
    pub fn generate_summary(stats: &CensusStats) -> String {
        let mut summary = String::new();
        let _ = writeln!(summary, "Total number of Students: {}", stats.total_profiles);
        let _ = writeln!(
            summary,
            "Total number of Gold coats registered in past {} months: {}",
            stats.recency_months,
            stats.gold_ids.len()
        );
        let _ = writeln!(
            summary,
            "The students with a gold dominant color and date of registration within {} months are:",
            stats.recency_months
        );
        for id in &stats.gold_ids {
            let _ = writeln!(summary, "{id}");
        }

        for region in &stats.regions {
            let _ = writeln!(
                summary,
                "Region: {} has {} students, of which {} are '{}' breed ({}%)",
                region.region_name,
                region.student_count,
                region.mixed_count,
                stats.mixed_breed,
                format_percent(region.mixed_percent)
            );
        }

        let lowest = stats
            .lowest_mixed
            .iter()
            .map(|r| format!("{} with {}%", r.region_name, format_percent(r.mixed_percent)))
            .join(" and ");
        if lowest.is_empty() {
            let _ = writeln!(
                summary,
                "Not enough regions to rank by share of \"{}\" students",
                stats.mixed_breed
            );
        } else {
            let _ = writeln!(
                summary,
                "The two districts with the smallest number of \"{}\" students are {lowest}",
                stats.mixed_breed
            );
        }

        summary
    }
}
