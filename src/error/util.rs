//! Utility functions for error handling
//!
//! This module provides file helpers that turn `io::Error`s into pipeline
//! errors carrying the path and the reason the file was needed.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(Error::io(path, format!("File not found (needed for: {purpose})")));
    }

    if !path.is_file() {
        return Err(Error::io(
            path,
            format!("Path is not a file (expected a file for: {purpose})"),
        ));
    }

    match fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check file permissions".to_string()
                }
                io::ErrorKind::NotFound => {
                    "File not found - it may have been deleted during operation".to_string()
                }
                _ => format!("Failed to open file for: {purpose}"),
            };

            Err(Error::io_with_source(path, context, e))
        }
    }
}

/// Create a file for writing, creating missing parent directories first
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            Error::io_with_source(
                parent,
                format!("Failed to create output directory for: {purpose}"),
                e,
            )
        })?;
    }

    fs::File::create(path).map_err(|e| {
        Error::io_with_source(path, format!("Failed to create file for: {purpose}"), e)
    })
}
