//! Log lines and spinners for the pipeline stages

pub mod log;
pub mod progress;

pub use self::log::{FileOperation, log_operation_complete, log_operation_start, log_stage};
pub use self::progress::{create_spinner, finish_progress_bar};
