//! Registrant profile model

use chrono::NaiveDate;

use super::traits::EntityModel;

/// A cleaned registrant profile row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrantProfile {
    /// Registrant identifier (several dogs may share one)
    pub registrant_id: i64,
    /// Zip code, quotes stripped
    pub zip_code: i64,
    /// Name of the dog
    pub dog_name: String,
    /// Date of birth as the raw serial day count
    pub dob_serial: i64,
    /// Date of birth as a calendar date
    pub date_of_birth: NaiveDate,
    /// Dominant coat color, as given
    pub dominant_color: String,
    /// Breed, as given
    pub breed: String,
    /// Values of any additional extract columns, in header order
    pub extra: Vec<String>,
}

impl EntityModel for RegistrantProfile {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.registrant_id
    }
}
