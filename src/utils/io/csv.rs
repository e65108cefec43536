//! Comma-separated output of Arrow record batches.

use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use arrow::csv::WriterBuilder;
use arrow::record_batch::RecordBatch;

use crate::error::util::safe_create_file;
use crate::error::{Error, Result};
use crate::models::EnrichedTable;
use crate::utils::arrow::enriched_to_record_batch;
use crate::utils::logging::{FileOperation, log_operation_complete, log_operation_start};

/// Write a batch as CSV with a header row and no index column
pub fn write_record_batch_csv(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = safe_create_file(path, "CSV output")?;
    let mut sink = BufWriter::new(file);
    {
        let mut writer = WriterBuilder::new()
            .with_header(true)
            .with_delimiter(b',')
            .build(&mut sink);
        writer.write(batch)?;
    }
    sink.flush()
        .map_err(|e| Error::io_with_source(path, "Failed to flush CSV output", e))
}

/// Convert an enriched table and write it as CSV, returning the row count
pub fn write_enriched_csv(table: &EnrichedTable, path: &Path) -> Result<usize> {
    log_operation_start(FileOperation::Write, path);
    let start = Instant::now();
    let batch = enriched_to_record_batch(table)?;
    write_record_batch_csv(&batch, path)?;
    log_operation_complete(FileOperation::Write, path, batch.num_rows(), start.elapsed());
    Ok(batch.num_rows())
}
