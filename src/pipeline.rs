//! The registrant report pipeline
//!
//! One linear pass: the three extracts are read completely, profiles are
//! normalized and registrations resolved, both are joined and enriched, then
//! the statistics are computed and the two output tables written. Any error
//! aborts the run, except a ranking with too few regions, which is reported
//! as missing instead.

use std::time::Instant;

use chrono::NaiveDateTime;

use crate::algorithm::population::{CensusStats, RegionStatistics, select_gold_recent};
use crate::algorithm::{Enricher, ProfileStats, normalize_profiles, resolve_registrations};
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::models::{EnrichedTable, RegionTable};
use crate::reader::{DelimitedReader, RawTable};
use crate::utils::io::write_enriched_csv;
use crate::utils::logging::{create_spinner, finish_progress_bar, log_stage};

const TOTAL_STEPS: usize = 5;

/// The three extracts as read from disk
#[derive(Debug, Clone)]
pub struct RawInputs {
    /// Registrant profile extract
    pub profiles: RawTable,
    /// Registration event extract
    pub registrations: RawTable,
    /// Region range extract
    pub regions: RawTable,
}

/// Everything a run produces
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Row counts from profile normalization
    pub profile_stats: ProfileStats,
    /// Full enriched table
    pub enriched: EnrichedTable,
    /// Gold/recency subset of the enriched table
    pub gold: EnrichedTable,
    /// Report figures
    pub stats: CensusStats,
}

impl PipelineOutput {
    /// The textual report of the run
    #[must_use]
    pub fn summary(&self) -> String {
        RegionStatistics::generate_summary(&self.stats)
    }
}

/// Runs the pipeline for one configuration
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load, transform and write, using `as_of` as the end of the recency window
    pub fn run(&self, as_of: NaiveDateTime) -> Result<PipelineOutput> {
        log::info!("Starting run as of {as_of}");
        log::debug!("{}", self.config);

        let inputs = self.load()?;
        let output = self.transform(&inputs, as_of)?;
        self.write(&output)?;
        Ok(output)
    }

    /// Read all three extracts to completion
    pub fn load(&self) -> Result<RawInputs> {
        let start = Instant::now();
        let spinner = create_spinner("Reading extracts", self.config.show_progress);
        let reader = DelimitedReader::new(self.config.delimiter.as_str());

        let inputs = RawInputs {
            profiles: reader.read_file(&self.config.profiles_path)?,
            registrations: reader.read_file(&self.config.registrations_path)?,
            regions: reader.read_file(&self.config.regions_path)?,
        };

        finish_progress_bar(&spinner, Some("Extracts read"));
        let rows = inputs.profiles.len() + inputs.registrations.len() + inputs.regions.len();
        log_stage(1, TOTAL_STEPS, "Loaded extracts", rows, start.elapsed());
        Ok(inputs)
    }

    /// Run every in-memory stage over loaded extracts
    pub fn transform(&self, inputs: &RawInputs, as_of: NaiveDateTime) -> Result<PipelineOutput> {
        let config = &self.config;
        let spinner = create_spinner("Transforming", config.show_progress);

        let start = Instant::now();
        let profiles = normalize_profiles(&inputs.profiles)?;
        let profile_stats = profiles.stats;
        let registrations = resolve_registrations(&inputs.registrations)?;
        log_stage(
            2,
            TOTAL_STEPS,
            "Normalized profiles and resolved registrations",
            profiles.profiles.len() + registrations.len(),
            start.elapsed(),
        );

        let start = Instant::now();
        let regions = RegionTable::from_raw_table(&inputs.regions)?;
        let enriched = Enricher::new(&regions, &config.mixed_breed)
            .with_strict_regions(config.strict_regions)
            .enrich(profiles, &registrations)?;
        log_stage(3, TOTAL_STEPS, "Joined and enriched", enriched.len(), start.elapsed());

        let start = Instant::now();
        let gold = select_gold_recent(&enriched, &config.gold_color, as_of, config.recency_months);
        let summaries = RegionStatistics::summarize(&enriched)?;
        let lowest_mixed = match RegionStatistics::lowest_mixed(&summaries) {
            Ok(lowest) => lowest,
            Err(err @ Error::InsufficientData { .. }) => {
                log::warn!("Skipping region ranking: {err}");
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        log_stage(4, TOTAL_STEPS, "Aggregated regions", summaries.len(), start.elapsed());

        finish_progress_bar(&spinner, Some("Transform complete"));

        let stats = CensusStats {
            total_profiles: profile_stats.surviving,
            gold_ids: gold.registrant_ids(),
            recency_months: config.recency_months,
            mixed_breed: config.mixed_breed.clone(),
            regions: summaries,
            lowest_mixed,
        };

        Ok(PipelineOutput {
            profile_stats,
            enriched,
            gold,
            stats,
        })
    }

    /// Write the enriched table and the gold subset
    pub fn write(&self, output: &PipelineOutput) -> Result<()> {
        let start = Instant::now();
        let rows = write_enriched_csv(&output.enriched, &self.config.enriched_output)?
            + write_enriched_csv(&output.gold, &self.config.gold_output)?;
        log_stage(5, TOTAL_STEPS, "Wrote output tables", rows, start.elapsed());
        Ok(())
    }
}
