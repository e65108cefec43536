//! Runs that must abort, and what they report

use std::fs;

use newtricks::{Error, Pipeline};

use crate::utils::{PROFILE_HEADER, Workspace, as_of};

fn valid_registrations() -> [&'static str; 2] {
    ["1<^>45000", "2<^>45100"]
}

fn valid_regions() -> [&'static str; 1] {
    ["10000<^>10999<^>Manhattan"]
}

#[test]
fn test_malformed_zip_code_names_table_and_field() {
    let ws = Workspace::new(
        &[
            "1<^>10001<^>Rex<^>40000<^>GOLD<^>Beagle",
            "2<^>ABC12<^>Bella<^>41000<^>GOLD<^>Beagle",
        ],
        &valid_registrations(),
        &valid_regions(),
    );

    let err = Pipeline::new(ws.config.clone()).run(as_of()).unwrap_err();
    match &err {
        Error::MalformedRow {
            table,
            field,
            line,
            value,
        } => {
            assert_eq!(table, "registrant profiles");
            assert_eq!(field, "zip_code");
            assert_eq!(*line, 3);
            assert_eq!(value, "ABC12");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("zip_code"));

    // nothing is written when a stage fails
    assert!(!ws.config.enriched_output.exists());
    assert!(!ws.config.gold_output.exists());
}

#[test]
fn test_malformed_birth_date() {
    let ws = Workspace::new(
        &["1<^>10001<^>Rex<^>yesterday<^>GOLD<^>Beagle"],
        &valid_registrations(),
        &valid_regions(),
    );

    let err = Pipeline::new(ws.config.clone()).run(as_of()).unwrap_err();
    assert!(matches!(err, Error::MalformedRow { ref field, .. } if field == "dob"));
}

#[test]
fn test_malformed_registration_date() {
    let ws = Workspace::new(
        &["1<^>10001<^>Rex<^>40000<^>GOLD<^>Beagle"],
        &["1<^>2024-01-01"],
        &valid_regions(),
    );

    let err = Pipeline::new(ws.config.clone()).run(as_of()).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedRow { ref table, ref field, line: 2, .. }
            if table == "registrations" && field == "registration_date"
    ));
}

#[test]
fn test_missing_extract() {
    let ws = Workspace::new(
        &["1<^>10001<^>Rex<^>40000<^>GOLD<^>Beagle"],
        &valid_registrations(),
        &valid_regions(),
    );
    fs::remove_file(&ws.config.registrations_path).unwrap();

    let err = Pipeline::new(ws.config.clone()).run(as_of()).unwrap_err();
    assert!(matches!(err, Error::Io { ref path, .. } if *path == ws.config.registrations_path));
}

#[test]
fn test_missing_column() {
    let ws = Workspace::new(
        &["1<^>10001<^>Rex<^>40000<^>GOLD<^>Beagle"],
        &valid_registrations(),
        &valid_regions(),
    );
    fs::write(
        &ws.config.regions_path,
        "min_zip_code<^>max_zip_code<^>borough\n10000<^>10999<^>Manhattan\n",
    )
    .unwrap();

    let err = Pipeline::new(ws.config.clone()).run(as_of()).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "region_name"));
}

#[test]
fn test_row_with_extra_fields() {
    let ws = Workspace::new(
        &["1<^>10001<^>Rex<^>40000<^>GOLD<^>Beagle<^>surplus"],
        &valid_registrations(),
        &valid_regions(),
    );

    let err = Pipeline::new(ws.config.clone()).run(as_of()).unwrap_err();
    assert!(matches!(err, Error::Table { line: 2, .. }));
}

#[test]
fn test_empty_profile_extract_has_no_header() {
    let ws = Workspace::new(&[], &valid_registrations(), &valid_regions());
    fs::write(&ws.config.profiles_path, "").unwrap();

    let err = Pipeline::new(ws.config.clone()).run(as_of()).unwrap_err();
    assert!(matches!(err, Error::Table { .. }));
}

#[test]
fn test_strict_regions_reject_unmatched_zip() {
    let mut ws = Workspace::new(
        &[
            "1<^>10001<^>Rex<^>40000<^>GOLD<^>Beagle",
            "2<^>20001<^>Bella<^>41000<^>GOLD<^>Beagle",
        ],
        &valid_registrations(),
        &valid_regions(),
    );
    ws.config.strict_regions = true;

    let err = Pipeline::new(ws.config.clone()).run(as_of()).unwrap_err();
    assert!(matches!(err, Error::MissingRangeTableEntry { zip: 20001 }));
}

#[test]
fn test_lenient_regions_leave_zip_unassigned() {
    let ws = Workspace::new(
        &[
            "1<^>10001<^>Rex<^>40000<^>GOLD<^>Beagle",
            "2<^>20001<^>Bella<^>41000<^>GOLD<^>Beagle",
        ],
        &valid_registrations(),
        &valid_regions(),
    );

    let output = Pipeline::new(ws.config.clone()).run(as_of()).unwrap();
    assert_eq!(output.enriched.len(), 2);
    assert_eq!(output.enriched.records[1].region, None);
}

#[test]
fn test_header_only_extracts() {
    let ws = Workspace::new(&[], &[], &valid_regions());
    assert!(fs::read_to_string(&ws.config.profiles_path)
        .unwrap()
        .starts_with(PROFILE_HEADER));

    let output = Pipeline::new(ws.config.clone()).run(as_of()).unwrap();
    assert!(output.enriched.is_empty());
    assert!(output.stats.regions.is_empty());
    assert_eq!(ws.read_lines(&ws.config.gold_output).len(), 1);
}
