//! Zip-code region ranges
//!
//! The range table is applied as an ordered list: every range covering a zip
//! code assigns its region name in turn, so on overlap the last row in file order
//! wins. A region name may legitimately appear on several rows.

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::reader::RawTable;
use crate::schema::columns::{MAX_ZIP_CODE, MIN_ZIP_CODE, REGION_NAME};
use crate::schema::{coerce_int, strip_quotes};

const TABLE_NAME: &str = "zip code region ranges";

/// An inclusive zip-code interval mapped to a region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionRange {
    /// Lowest zip code in the range
    pub min_zip: i64,
    /// Highest zip code in the range
    pub max_zip: i64,
    /// Region the range belongs to
    pub region_name: String,
}

impl RegionRange {
    /// Create a new range
    #[must_use]
    pub fn new(min_zip: i64, max_zip: i64, region_name: impl Into<String>) -> Self {
        Self {
            min_zip,
            max_zip,
            region_name: region_name.into(),
        }
    }

    /// Whether `zip` lies within the range, bounds included
    #[must_use]
    pub fn contains(&self, zip: i64) -> bool {
        (self.min_zip..=self.max_zip).contains(&zip)
    }
}

/// Ordered list of region ranges, in file order
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    ranges: Vec<RegionRange>,
}

impl RegionTable {
    /// Create a table from ranges in application order
    #[must_use]
    pub fn new(ranges: Vec<RegionRange>) -> Self {
        Self { ranges }
    }

    /// Build the table from the raw range extract
    pub fn from_raw_table(table: &RawTable) -> Result<Self> {
        let min_idx = table.column_index(MIN_ZIP_CODE)?;
        let max_idx = table.column_index(MAX_ZIP_CODE)?;
        let name_idx = table.column_index(REGION_NAME)?;

        let mut ranges = Vec::with_capacity(table.len());
        for row in &table.rows {
            let bound = |idx: usize, field: &str| {
                let raw = row.get(idx);
                coerce_int(strip_quotes(raw))
                    .ok_or_else(|| Error::malformed(TABLE_NAME, field, row.line, raw))
            };
            let min_zip = bound(min_idx, MIN_ZIP_CODE)?;
            let max_zip = bound(max_idx, MAX_ZIP_CODE)?;
            let region_name = row.get(name_idx).trim().to_string();

            if min_zip > max_zip {
                log::warn!(
                    "Region range '{region_name}' at line {} is empty ({min_zip} > {max_zip})",
                    row.line
                );
            }
            ranges.push(RegionRange::new(min_zip, max_zip, region_name));
        }

        log::debug!("Loaded {} region ranges", ranges.len());
        Ok(Self { ranges })
    }

    /// Ranges in application order
    #[must_use]
    pub fn ranges(&self) -> &[RegionRange] {
        &self.ranges
    }

    /// Number of range rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the table has no ranges
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Distinct region names in order of first appearance
    #[must_use]
    pub fn region_names(&self) -> Vec<String> {
        self.ranges
            .iter()
            .map(|r| r.region_name.clone())
            .unique()
            .collect()
    }

    /// Region of `zip`: every covering range overwrites the previous assignment
    #[must_use]
    pub fn assign(&self, zip: i64) -> Option<&str> {
        self.ranges.iter().fold(None, |assigned, range| {
            if range.contains(zip) {
                Some(range.region_name.as_str())
            } else {
                assigned
            }
        })
    }

    /// Like [`assign`](Self::assign), but an unmatched zip code is an error
    pub fn require(&self, zip: i64) -> Result<&str> {
        self.assign(zip)
            .ok_or(Error::MissingRangeTableEntry { zip })
    }
}
