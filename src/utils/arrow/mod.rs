//! Arrow conversion of the enriched table

pub mod conversion;

pub use conversion::{enriched_schema, enriched_to_record_batch};
