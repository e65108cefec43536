//! Profile normalization
//!
//! Cleans the raw profile extract: stray quotes are stripped from the id and
//! zip fields, rows with an unusable id are dropped as placeholder rows, zip
//! codes and birth dates are coerced, and dogs are deduplicated on
//! `(dog_name, date_of_birth)` keeping the first occurrence.

use std::fmt;

use chrono::NaiveDate;
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::models::RegistrantProfile;
use crate::reader::RawTable;
use crate::schema::columns::{
    BREED, DOB, DOG_NAME, DOMINANT_COLOR, PROFILE_COLUMNS, REGISTRANT_ID, ZIP_CODE,
};
use crate::schema::date_utils::parse_serial_date;
use crate::schema::{coerce_int, strip_leading_quotes, strip_quotes};

const TABLE_NAME: &str = "registrant profiles";

/// Row counts observed while normalizing profiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileStats {
    /// Data rows in the extract
    pub raw_rows: usize,
    /// Rows dropped because the registrant id did not convert
    pub discarded_ids: usize,
    /// Rows dropped as duplicates of an earlier dog
    pub duplicates: usize,
    /// Rows that survived
    pub surviving: usize,
}

impl fmt::Display for ProfileStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} raw rows, {} without usable id, {} duplicates, {} surviving",
            self.raw_rows, self.discarded_ids, self.duplicates, self.surviving
        )
    }
}

/// The cleaned profile table
#[derive(Debug, Clone, Default)]
pub struct NormalizedProfiles {
    /// Names of extract columns beyond the required ones, in header order
    pub extra_columns: Vec<String>,
    /// Surviving profiles in input order
    pub profiles: Vec<RegistrantProfile>,
    /// Row counts
    pub stats: ProfileStats,
}

/// Normalize the raw profile extract
pub fn normalize_profiles(table: &RawTable) -> Result<NormalizedProfiles> {
    let id_idx = table.column_index(REGISTRANT_ID)?;
    let zip_idx = table.column_index(ZIP_CODE)?;
    let name_idx = table.column_index(DOG_NAME)?;
    let dob_idx = table.column_index(DOB)?;
    let color_idx = table.column_index(DOMINANT_COLOR)?;
    let breed_idx = table.column_index(BREED)?;

    let extra_idx = table.extra_column_indices(&PROFILE_COLUMNS);

    let mut stats = ProfileStats {
        raw_rows: table.len(),
        ..ProfileStats::default()
    };
    let mut seen: FxHashSet<(String, NaiveDate)> = FxHashSet::default();
    let mut profiles = Vec::with_capacity(table.len());

    for row in &table.rows {
        let Some(registrant_id) = coerce_int(strip_leading_quotes(row.get(id_idx))) else {
            log::debug!(
                "Dropping profile at line {} with unusable registrant id {:?}",
                row.line,
                row.get(id_idx)
            );
            stats.discarded_ids += 1;
            continue;
        };

        let raw_zip = row.get(zip_idx);
        let zip_code = coerce_int(strip_quotes(raw_zip))
            .ok_or_else(|| Error::malformed(TABLE_NAME, ZIP_CODE, row.line, raw_zip))?;

        let raw_dob = row.get(dob_idx);
        let (dob_serial, date_of_birth) = parse_serial_date(raw_dob)
            .ok_or_else(|| Error::malformed(TABLE_NAME, DOB, row.line, raw_dob))?;

        let dog_name = row.get(name_idx).to_string();
        if !seen.insert((dog_name.clone(), date_of_birth)) {
            stats.duplicates += 1;
            continue;
        }

        profiles.push(RegistrantProfile {
            registrant_id,
            zip_code,
            dog_name,
            dob_serial,
            date_of_birth,
            dominant_color: row.get(color_idx).to_string(),
            breed: row.get(breed_idx).to_string(),
            extra: extra_idx.iter().map(|&idx| row.get(idx).to_string()).collect(),
        });
    }

    stats.surviving = profiles.len();
    if stats.discarded_ids > 0 {
        log::warn!(
            "Dropped {} profile rows without a usable registrant id",
            stats.discarded_ids
        );
    }
    log::info!("Profiles normalized: {stats}");

    Ok(NormalizedProfiles {
        extra_columns: extra_idx.iter().map(|&idx| table.headers[idx].clone()).collect(),
        profiles,
        stats,
    })
}
