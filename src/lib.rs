//! Batch report over registrant extracts.
//!
//! Reads registrant profiles, registration events and zip-code region ranges,
//! cleans and joins them, derives region and mixed-breed attributes, and
//! produces per-region statistics plus two CSV exports.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use models::{EnrichedRecord, EnrichedTable, RegionRange, RegionTable};
pub use pipeline::{Pipeline, PipelineOutput};
pub use reader::{DelimitedReader, RawTable};

// Statistics
pub use algorithm::population::{CensusStats, RegionStatistics, RegionSummary};
