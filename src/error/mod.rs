//! Error handling for the registrant report pipeline.
//!
//! Every failure that aborts a run is a variant of [`Error`]. Loading and
//! normalization errors always name the offending file or table and field so the
//! extract can be fixed at the source.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;

/// Specialized error type for the pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error opening, reading or writing a file
    #[error("IO error on {}: {message}", path.display())]
    Io {
        /// File the operation was attempted on
        path: PathBuf,
        /// What went wrong, in words
        message: String,
        /// Underlying cause, when there is one
        #[source]
        source: Option<io::Error>,
    },

    /// The delimited file itself is structurally broken
    #[error("Table error in {} at line {line}: {message}", path.display())]
    Table {
        /// Source file
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// A required column is not present in the header
    #[error("Column '{column}' not found in {}", path.display())]
    MissingColumn {
        /// Source file
        path: PathBuf,
        /// Name of the missing column
        column: String,
    },

    /// A field could not be coerced to its expected type
    #[error("Malformed row in {table} at line {line}: field '{field}' has value {value:?}")]
    MalformedRow {
        /// Logical table the row belongs to
        table: String,
        /// Field that failed to convert
        field: String,
        /// 1-based line number in the source file
        line: usize,
        /// The offending raw value
        value: String,
    },

    /// No region range covers the zip code
    #[error("No region range covers zip code {zip}")]
    MissingRangeTableEntry {
        /// The unmatched zip code
        zip: i64,
    },

    /// Not enough regions to produce a ranking
    #[error("Insufficient data: ranking needs {needed} regions but only {found} present")]
    InsufficientData {
        /// Regions required
        needed: usize,
        /// Regions available
        found: usize,
    },

    /// A per-region percentage was requested for a region without records
    #[error("Region '{region}' has no records to compute a percentage from")]
    Division {
        /// Region name
        region: String,
    },

    /// Error building or writing an Arrow table
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
}

impl Error {
    /// Create an IO error for a path without an underlying cause
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an IO error for a path wrapping an `io::Error`
    pub fn io_with_source(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a malformed row error
    pub fn malformed(
        table: impl Into<String>,
        field: impl Into<String>,
        line: usize,
        value: impl Into<String>,
    ) -> Self {
        Self::MalformedRow {
            table: table.into(),
            field: field.into(),
            line,
            value: value.into(),
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
