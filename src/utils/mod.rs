//! Shared helpers: logging, progress, Arrow conversion and table output.

pub mod arrow;
pub mod io;
pub mod logging;
