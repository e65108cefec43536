//! Log lines for file operations and pipeline stages

use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Direction of a logged file operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    Write,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "Reading"),
            Self::Write => write!(f, "Writing"),
        }
    }
}

/// Log that a file operation is starting
pub fn log_operation_start(operation: FileOperation, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Log a finished file operation with its row count
///
/// # Arguments
/// * `operation` - Whether rows were read or written
/// * `path` - File the rows came from or went to
/// * `rows` - Number of data rows, header excluded
/// * `elapsed` - Time spent on the file
pub fn log_operation_complete(
    operation: FileOperation,
    path: &Path,
    rows: usize,
    elapsed: Duration,
) {
    match operation {
        FileOperation::Read => {
            log::info!("Read {rows} rows from {} in {elapsed:?}", path.display());
        }
        FileOperation::Write => {
            log::info!("Wrote {rows} rows to {} in {elapsed:?}", path.display());
        }
    }
}

/// Log the end of an in-memory pipeline stage
pub fn log_stage(step: usize, total: usize, stage: &str, items: usize, elapsed: Duration) {
    log::info!("[Step {step}/{total}] {stage}: {items} rows in {elapsed:?}");
}
