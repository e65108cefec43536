//! Conversion of enriched records into an Arrow `RecordBatch`.
//!
//! Column layout: the six profile columns, any extra profile columns, the
//! derived date of birth, the registration serial, any extra registration
//! columns, the registration date, the region, then one nullable indicator
//! column per known region.

use std::sync::Arc;

use arrow::array::{ArrayRef, Date32Array, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;
use arrow_schema::{DataType, Field, Schema};
use chrono::{Datelike, NaiveDate};

use crate::error::Result;
use crate::models::{EnrichedRecord, EnrichedTable};
use crate::schema::columns::{
    BREED, DOB, DOB_FORMATTED, DOG_NAME, DOMINANT_COLOR, DOR, REGISTRANT_ID, REGISTRATION_DATE,
    ZIP_BOROUGH, ZIP_CODE, mixed_column,
};

/// Days between 0001-01-01 and the Unix epoch
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Convert a `NaiveDate` to an Arrow Date32 value
#[must_use]
pub fn naive_date_to_date32(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

/// Arrow schema of an enriched table
#[must_use]
pub fn enriched_schema(table: &EnrichedTable) -> Schema {
    let mut fields = vec![
        Field::new(REGISTRANT_ID, DataType::Int64, false),
        Field::new(ZIP_CODE, DataType::Int64, false),
        Field::new(DOG_NAME, DataType::Utf8, false),
        Field::new(DOB, DataType::Int64, false),
        Field::new(DOMINANT_COLOR, DataType::Utf8, false),
        Field::new(BREED, DataType::Utf8, false),
    ];
    fields.extend(
        table
            .extra_columns
            .iter()
            .map(|name| Field::new(name, DataType::Utf8, false)),
    );
    fields.extend([
        Field::new(DOB_FORMATTED, DataType::Date32, false),
        Field::new(REGISTRATION_DATE, DataType::Int64, false),
    ]);
    fields.extend(
        table
            .registration_columns
            .iter()
            .map(|name| Field::new(name, DataType::Utf8, false)),
    );
    fields.extend([
        Field::new(DOR, DataType::Date32, false),
        Field::new(ZIP_BOROUGH, DataType::Utf8, true),
    ]);
    fields.extend(
        table
            .regions
            .iter()
            .map(|region| Field::new(mixed_column(region), DataType::Int64, true)),
    );

    Schema::new(fields)
}

/// Convert an enriched table to a single `RecordBatch`
pub fn enriched_to_record_batch(table: &EnrichedTable) -> Result<RecordBatch> {
    let records = &table.records;

    let int_column = |f: fn(&EnrichedRecord) -> i64| -> ArrayRef {
        Arc::new(Int64Array::from_iter_values(records.iter().map(f)))
    };
    let str_column = |f: fn(&EnrichedRecord) -> &str| -> ArrayRef {
        Arc::new(StringArray::from_iter_values(records.iter().map(f)))
    };
    let date_column = |f: fn(&EnrichedRecord) -> NaiveDate| -> ArrayRef {
        Arc::new(Date32Array::from_iter_values(
            records.iter().map(|r| naive_date_to_date32(f(r))),
        ))
    };

    let mut columns: Vec<ArrayRef> = vec![
        int_column(|r| r.profile.registrant_id),
        int_column(|r| r.profile.zip_code),
        str_column(|r| r.profile.dog_name.as_str()),
        int_column(|r| r.profile.dob_serial),
        str_column(|r| r.profile.dominant_color.as_str()),
        str_column(|r| r.profile.breed.as_str()),
    ];

    for idx in 0..table.extra_columns.len() {
        let values = records
            .iter()
            .map(|r| r.profile.extra.get(idx).map_or("", String::as_str));
        columns.push(Arc::new(StringArray::from_iter_values(values)));
    }

    columns.push(date_column(|r| r.profile.date_of_birth));
    columns.push(int_column(|r| r.registration.registration_serial));
    for idx in 0..table.registration_columns.len() {
        let values = records
            .iter()
            .map(|r| r.registration.extra.get(idx).map_or("", String::as_str));
        columns.push(Arc::new(StringArray::from_iter_values(values)));
    }
    columns.push(date_column(|r| r.registration.registration_date));
    columns.push(Arc::new(
        records
            .iter()
            .map(|r| r.region.as_deref())
            .collect::<StringArray>(),
    ));

    for region in &table.regions {
        let indicator: Int64Array = records
            .iter()
            .map(|r| r.is_mixed_in(region).then_some(1))
            .collect();
        columns.push(Arc::new(indicator));
    }

    let batch = RecordBatch::try_new(Arc::new(enriched_schema(table)), columns)?;
    Ok(batch)
}
