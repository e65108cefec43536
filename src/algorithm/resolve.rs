//! Registration resolution
//!
//! Converts registration dates and keeps only the most recent registration of
//! every registrant. Columns beyond the required two travel with the event.

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::models::RegistrationEvent;
use crate::reader::RawTable;
use crate::schema::columns::{REGISTRANT_ID, REGISTRATION_COLUMNS, REGISTRATION_DATE};
use crate::schema::date_utils::parse_serial_date;
use crate::schema::{coerce_int, strip_leading_quotes};

const TABLE_NAME: &str = "registrations";

/// Registrations reduced to one event per registrant
#[derive(Debug, Clone, Default)]
pub struct ResolvedRegistrations {
    /// Names of extract columns beyond the required ones, in header order
    pub extra_columns: Vec<String>,
    /// Latest event of every registrant, ordered by registrant id
    pub events: Vec<RegistrationEvent>,
}

impl ResolvedRegistrations {
    /// Number of registrants
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no registrant has an event
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Parse the raw registration extract and resolve it to one event per registrant
pub fn resolve_registrations(table: &RawTable) -> Result<ResolvedRegistrations> {
    let id_idx = table.column_index(REGISTRANT_ID)?;
    let date_idx = table.column_index(REGISTRATION_DATE)?;
    let extra_idx = table.extra_column_indices(&REGISTRATION_COLUMNS);

    let events = table
        .rows
        .iter()
        .map(|row| -> Result<RegistrationEvent> {
            let raw_id = row.get(id_idx);
            let registrant_id = coerce_int(strip_leading_quotes(raw_id))
                .ok_or_else(|| Error::malformed(TABLE_NAME, REGISTRANT_ID, row.line, raw_id))?;

            let raw_date = row.get(date_idx);
            let (registration_serial, registration_date) =
                parse_serial_date(raw_date).ok_or_else(|| {
                    Error::malformed(TABLE_NAME, REGISTRATION_DATE, row.line, raw_date)
                })?;

            Ok(RegistrationEvent {
                registrant_id,
                registration_serial,
                registration_date,
                extra: extra_idx.iter().map(|&idx| row.get(idx).to_string()).collect(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let raw_count = events.len();
    let resolved = latest_per_registrant(events);
    log::info!(
        "Registrations resolved: {} events, {} registrants",
        raw_count,
        resolved.len()
    );

    Ok(ResolvedRegistrations {
        extra_columns: extra_idx.iter().map(|&idx| table.headers[idx].clone()).collect(),
        events: resolved,
    })
}

/// Keep the most recent event per registrant.
///
/// Events are stably sorted by `(registrant_id, registration_date)` and the last
/// event of each registrant is kept. The result is ordered by registrant id.
#[must_use]
pub fn latest_per_registrant(mut events: Vec<RegistrationEvent>) -> Vec<RegistrationEvent> {
    events.sort_by_key(|e| (e.registrant_id, e.registration_date));
    events
        .into_iter()
        .coalesce(|prev, next| {
            if prev.registrant_id == next.registrant_id {
                Ok(next)
            } else {
                Err((prev, next))
            }
        })
        .collect()
}
