//! Registration event model

use chrono::NaiveDate;

use super::traits::EntityModel;

/// A registration of a registrant on a given date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationEvent {
    /// Registrant identifier
    pub registrant_id: i64,
    /// Registration date as the raw serial day count
    pub registration_serial: i64,
    /// Registration date as a calendar date
    pub registration_date: NaiveDate,
    /// Values of any additional extract columns, in header order
    pub extra: Vec<String>,
}

impl EntityModel for RegistrationEvent {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.registrant_id
    }
}
