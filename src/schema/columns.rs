//! Column names of the input extracts and the enriched output.

/// Registrant identifier, shared by profiles and registrations
pub const REGISTRANT_ID: &str = "registrant_ID";
/// Profile zip code
pub const ZIP_CODE: &str = "zip_code";
/// Dog name
pub const DOG_NAME: &str = "dog_name";
/// Date of birth as a serial day count
pub const DOB: &str = "dob";
/// Dominant coat color
pub const DOMINANT_COLOR: &str = "dominant_color";
/// Breed
pub const BREED: &str = "breed";

/// Registration date as a serial day count
pub const REGISTRATION_DATE: &str = "registration_date";

/// Lower bound of a region range
pub const MIN_ZIP_CODE: &str = "min_zip_code";
/// Upper bound of a region range
pub const MAX_ZIP_CODE: &str = "max_zip_code";
/// Region name of a range
pub const REGION_NAME: &str = "region_name";

/// Derived calendar date of birth
pub const DOB_FORMATTED: &str = "dob_formatted";
/// Derived calendar registration date
pub const DOR: &str = "dor";
/// Derived region of the zip code
pub const ZIP_BOROUGH: &str = "zip_borough";
/// Prefix of the per-region mixed-breed indicator columns
pub const MIXED_PREFIX: &str = "mixed_";

/// Profile columns every extract must carry, in output order
pub const PROFILE_COLUMNS: [&str; 6] = [
    REGISTRANT_ID,
    ZIP_CODE,
    DOG_NAME,
    DOB,
    DOMINANT_COLOR,
    BREED,
];

/// Registration columns every extract must carry
pub const REGISTRATION_COLUMNS: [&str; 2] = [REGISTRANT_ID, REGISTRATION_DATE];

/// Name of the mixed-breed indicator column for `region`
#[must_use]
pub fn mixed_column(region: &str) -> String {
    format!("{MIXED_PREFIX}{region}")
}
