//! Module for reading delimiter-separated extracts into in-memory tables.
//!
//! The extracts use a multi-character field delimiter and carry no quoting
//! convention, so each line is split on the literal delimiter and the fields are
//! kept verbatim. Type coercion happens later in the normalizers.

use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::DEFAULT_DELIMITER;
use crate::error::util::safe_open_file;
use crate::error::{Error, Result};
use crate::utils::logging::{FileOperation, log_operation_complete, log_operation_start};

/// A single data row together with its position in the source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source file
    pub line: usize,
    /// Field values, one per header column
    pub fields: Vec<String>,
}

impl RawRow {
    /// Field at `idx`, empty when the row was short
    #[must_use]
    pub fn get(&self, idx: usize) -> &str {
        self.fields.get(idx).map_or("", String::as_str)
    }
}

/// An untyped table as read from disk
#[derive(Debug, Clone)]
pub struct RawTable {
    /// File the table was read from
    pub path: PathBuf,
    /// Column names from the header line
    pub headers: Vec<String>,
    /// Data rows in file order
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Index of a required column
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn {
                path: self.path.clone(),
                column: name.to_string(),
            })
    }

    /// Indices of the columns not named in `known`, in header order
    #[must_use]
    pub fn extra_column_indices(&self, known: &[&str]) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !known.contains(&h.as_str()))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reader for delimiter-separated text tables
#[derive(Debug, Clone)]
pub struct DelimitedReader {
    delimiter: String,
}

impl Default for DelimitedReader {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl DelimitedReader {
    /// Creates a reader splitting on `delimiter`
    #[must_use]
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Reads a whole file into a `RawTable`
    pub fn read_file(&self, path: &Path) -> Result<RawTable> {
        log_operation_start(FileOperation::Read, path);
        let start = Instant::now();

        let file = safe_open_file(path, "table input")?;
        let table = self.read_from(file, path)?;

        log_operation_complete(FileOperation::Read, path, table.len(), start.elapsed());
        Ok(table)
    }

    /// Reads a table from any byte source; `path` is used for error messages
    pub fn read_from<R: Read>(&self, source: R, path: &Path) -> Result<RawTable> {
        let reader = BufReader::new(source);
        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| {
                Error::io_with_source(path, format!("Failed to read line {line_no}"), e)
            })?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.trim().is_empty() {
                continue;
            }

            match &headers {
                None => {
                    let names = self
                        .split(line.trim_start_matches('\u{feff}'))
                        .map(|h| h.trim().to_string())
                        .collect();
                    headers = Some(names);
                }
                Some(names) => {
                    let mut fields: Vec<String> = self.split(line).map(str::to_string).collect();
                    if fields.len() > names.len() {
                        return Err(Error::Table {
                            path: path.to_path_buf(),
                            line: line_no,
                            message: format!(
                                "expected {} fields, found {}",
                                names.len(),
                                fields.len()
                            ),
                        });
                    }
                    fields.resize(names.len(), String::new());
                    rows.push(RawRow {
                        line: line_no,
                        fields,
                    });
                }
            }
        }

        let headers = headers.ok_or_else(|| Error::Table {
            path: path.to_path_buf(),
            line: 0,
            message: "file has no header line".to_string(),
        })?;

        Ok(RawTable {
            path: path.to_path_buf(),
            headers,
            rows,
        })
    }

    fn split<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> {
        line.split(self.delimiter.as_str())
    }
}
