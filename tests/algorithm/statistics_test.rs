//! Tests for the gold selection and the region statistics

use chrono::{NaiveDate, NaiveDateTime};
use newtricks::Error;
use newtricks::algorithm::population::{
    CensusStats, FilterCriteria, RecordFilter, RegionStatistics, RegionSummary,
    select_gold_recent,
};
use newtricks::models::{EnrichedRecord, EnrichedTable, RegistrantProfile, RegistrationEvent};
use newtricks::schema::date_utils::to_serial_days;

use crate::utils::as_of;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn record(
    id: i64,
    color: &str,
    registered: NaiveDate,
    region: Option<&str>,
    mixed: bool,
) -> EnrichedRecord {
    let dob = NaiveDate::from_ymd_opt(2015, 3, 1).unwrap();
    EnrichedRecord {
        profile: RegistrantProfile {
            registrant_id: id,
            zip_code: 10001,
            dog_name: format!("dog{id}"),
            dob_serial: to_serial_days(dob),
            date_of_birth: dob,
            dominant_color: color.to_string(),
            breed: if mixed { "Mixed/Other" } else { "Beagle" }.to_string(),
            extra: Vec::new(),
        },
        registration: RegistrationEvent {
            registrant_id: id,
            registration_serial: to_serial_days(registered),
            registration_date: registered,
            extra: Vec::new(),
        },
        region: region.map(str::to_string),
        mixed,
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn summary(name: &str, total: usize, mixed: usize, percent: f64) -> RegionSummary {
    RegionSummary {
        region_name: name.to_string(),
        student_count: total,
        mixed_count: mixed,
        mixed_percent: percent,
    }
}

#[test]
fn test_recency_cutoff() {
    assert_eq!(
        RecordFilter::recency_cutoff(as_of(), 4),
        at(2024, 2, 15, 10, 30)
    );
    // day of month clamps to the end of February
    assert_eq!(
        RecordFilter::recency_cutoff(at(2024, 6, 30, 12, 0), 4),
        at(2024, 2, 29, 12, 0)
    );
    assert_eq!(RecordFilter::recency_cutoff(as_of(), 0), as_of());
}

#[test]
fn test_registration_compared_at_midnight() {
    let filter = RecordFilter::RegisteredSince(at(2024, 2, 15, 0, 0));
    assert!(filter.meets_criteria(&record(1, "GOLD", day(2024, 2, 15), None, false)));
    assert!(!filter.meets_criteria(&record(1, "GOLD", day(2024, 2, 14), None, false)));

    let filter = RecordFilter::RegisteredSince(at(2024, 2, 15, 10, 30));
    assert!(!filter.meets_criteria(&record(1, "GOLD", day(2024, 2, 15), None, false)));
    assert!(filter.meets_criteria(&record(1, "GOLD", day(2024, 2, 16), None, false)));
}

#[test]
fn test_color_match_is_exact() {
    let filter = RecordFilter::DominantColor("GOLD".to_string());
    assert!(filter.meets_criteria(&record(1, "GOLD", day(2024, 1, 1), None, false)));
    assert!(!filter.meets_criteria(&record(1, "Gold", day(2024, 1, 1), None, false)));
    assert!(!filter.meets_criteria(&record(1, "GOLD ", day(2024, 1, 1), None, false)));
}

#[test]
fn test_gold_selection_keeps_layout_and_order() {
    let table = EnrichedTable {
        extra_columns: vec!["owner".to_string()],
        registration_columns: vec!["channel".to_string()],
        regions: vec!["Queens".to_string()],
        records: vec![
            record(5, "GOLD", day(2024, 6, 1), Some("Queens"), false),
            record(2, "BLACK", day(2024, 6, 1), Some("Queens"), false),
            record(9, "GOLD", day(2023, 12, 1), Some("Queens"), true),
            record(3, "GOLD", day(2024, 3, 1), None, false),
        ],
    };

    let gold = select_gold_recent(&table, "GOLD", as_of(), 4);
    assert_eq!(gold.registrant_ids(), vec![5, 3]);
    assert_eq!(gold.extra_columns, table.extra_columns);
    assert_eq!(gold.registration_columns, table.registration_columns);
    assert_eq!(gold.regions, table.regions);
}

#[test]
fn test_every_gold_record_satisfies_both_criteria() {
    let records: Vec<EnrichedRecord> = (0..60)
        .map(|i| {
            let color = if i % 3 == 0 { "GOLD" } else { "WHITE" };
            let registered = day(2023, 9, 1) + chrono::Days::new(i * 5);
            record(i as i64, color, registered, None, false)
        })
        .collect();
    let table = EnrichedTable {
        records,
        ..EnrichedTable::default()
    };

    let cutoff = RecordFilter::recency_cutoff(as_of(), 4);
    let gold = select_gold_recent(&table, "GOLD", as_of(), 4);
    assert!(!gold.is_empty());
    for r in &gold.records {
        assert_eq!(r.profile.dominant_color, "GOLD");
        assert!(r.registration_date().and_hms_opt(0, 0, 0).unwrap() >= cutoff);
    }
    let expected = table
        .records
        .iter()
        .filter(|r| {
            r.profile.dominant_color == "GOLD"
                && r.registration_date().and_hms_opt(0, 0, 0).unwrap() >= cutoff
        })
        .count();
    assert_eq!(gold.len(), expected);
}

#[test]
fn test_summary_counts_match_records() {
    let registered = day(2024, 1, 1);
    let table = EnrichedTable {
        extra_columns: Vec::new(),
        registration_columns: Vec::new(),
        regions: vec!["Bronx".into(), "Queens".into()],
        records: vec![
            record(1, "GOLD", registered, Some("Queens"), true),
            record(2, "GOLD", registered, Some("Bronx"), false),
            record(3, "GOLD", registered, Some("Queens"), false),
            record(4, "GOLD", registered, Some("Queens"), false),
            record(5, "GOLD", registered, Some("Bronx"), true),
            record(6, "GOLD", registered, None, true),
        ],
    };

    let summaries = RegionStatistics::summarize(&table).unwrap();
    assert_eq!(
        summaries,
        vec![summary("Queens", 3, 1, 33.33), summary("Bronx", 2, 1, 50.0)]
    );
    let assigned: usize = summaries.iter().map(|s| s.student_count).sum();
    assert_eq!(assigned, table.with_region().count());
}

#[test]
fn test_percentages_round_exact_halves_to_even() {
    let registered = day(2024, 1, 1);
    let records = (0..64)
        .map(|i| {
            let region = if i < 32 { "Bronx" } else { "Queens" };
            let mixed = i == 0 || (32..37).contains(&i);
            record(i, "GOLD", registered, Some(region), mixed)
        })
        .collect();
    let table = EnrichedTable {
        records,
        ..EnrichedTable::default()
    };

    let summaries = RegionStatistics::summarize(&table).unwrap();
    assert_eq!(
        summaries,
        vec![summary("Bronx", 32, 1, 3.12), summary("Queens", 32, 5, 15.62)]
    );

    let stats = CensusStats {
        total_profiles: 64,
        gold_ids: Vec::new(),
        recency_months: 4,
        mixed_breed: "Mixed/Other".to_string(),
        lowest_mixed: RegionStatistics::lowest_mixed(&summaries).unwrap(),
        regions: summaries,
    };
    let report = RegionStatistics::generate_summary(&stats);
    assert!(report.contains(
        "Region: Bronx has 32 students, of which 1 are 'Mixed/Other' breed (3.12%)"
    ));
    assert!(report.ends_with("are Bronx with 3.12% and Queens with 15.62%\n"));
}

#[test]
fn test_lowest_mixed_ties_follow_summary_order() {
    let summaries = vec![
        summary("A", 4, 2, 50.0),
        summary("B", 2, 1, 50.0),
        summary("C", 6, 3, 50.0),
    ];
    let lowest = RegionStatistics::lowest_mixed(&summaries).unwrap();
    let names: Vec<&str> = lowest.iter().map(|s| s.region_name.as_str()).collect();
    assert_eq!(names, vec!["C", "B"]);
}

#[test]
fn test_lowest_mixed_with_exactly_two_regions() {
    let summaries = vec![summary("A", 4, 0, 0.0), summary("B", 2, 1, 50.0)];
    let lowest = RegionStatistics::lowest_mixed(&summaries).unwrap();
    assert_eq!(lowest, vec![summary("A", 4, 0, 0.0), summary("B", 2, 1, 50.0)]);
}

#[test]
fn test_lowest_mixed_without_regions() {
    assert!(matches!(
        RegionStatistics::lowest_mixed(&[]),
        Err(Error::InsufficientData { needed: 2, found: 0 })
    ));
}
