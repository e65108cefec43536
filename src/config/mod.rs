//! Configuration for the registrant report pipeline.

use std::fmt;
use std::path::PathBuf;

/// Field delimiter used by the registrant extracts
pub const DEFAULT_DELIMITER: &str = "<^>";

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Registrant profile extract
    pub profiles_path: PathBuf,
    /// Registration event extract
    pub registrations_path: PathBuf,
    /// Zip-code-to-region range table
    pub regions_path: PathBuf,
    /// Destination of the full enriched table
    pub enriched_output: PathBuf,
    /// Destination of the gold/recency subset
    pub gold_output: PathBuf,
    /// Multi-character field delimiter of the input files
    pub delimiter: String,
    /// Dominant coat color selected by the recency filter (exact match)
    pub gold_color: String,
    /// Breed value counted as mixed
    pub mixed_breed: String,
    /// Size of the recency window in calendar months
    pub recency_months: u32,
    /// Abort when a zip code matches no region range instead of leaving it unset
    pub strict_regions: bool,
    /// Show spinners while stages run
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            profiles_path: PathBuf::from("./registrant_profiles.txt"),
            registrations_path: PathBuf::from("./registrations.txt"),
            regions_path: PathBuf::from("./zipcode_region_ranges.txt"),
            enriched_output: PathBuf::from("./newTricksProcessed.csv"),
            gold_output: PathBuf::from("./gold.csv"),
            delimiter: DEFAULT_DELIMITER.to_string(),
            gold_color: "GOLD".to_string(),
            mixed_breed: "Mixed/Other".to_string(),
            recency_months: 4,
            strict_regions: false,
            show_progress: false,
        }
    }
}

impl fmt::Display for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline Configuration:")?;
        writeln!(f, "  Profiles: {}", self.profiles_path.display())?;
        writeln!(f, "  Registrations: {}", self.registrations_path.display())?;
        writeln!(f, "  Region Ranges: {}", self.regions_path.display())?;
        writeln!(f, "  Enriched Output: {}", self.enriched_output.display())?;
        writeln!(f, "  Gold Output: {}", self.gold_output.display())?;
        writeln!(f, "  Delimiter: {}", self.delimiter)?;
        writeln!(f, "  Gold Color: {}", self.gold_color)?;
        writeln!(f, "  Mixed Breed: {}", self.mixed_breed)?;
        writeln!(f, "  Recency Window: {} months", self.recency_months)?;
        write!(f, "  Strict Regions: {}", self.strict_regions)
    }
}
