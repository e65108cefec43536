//! File output for enriched tables

pub mod csv;

pub use self::csv::{write_enriched_csv, write_record_batch_csv};
