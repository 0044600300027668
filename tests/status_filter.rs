// tests/status_filter.rs
//
// Filtering and per-status counts over extracted tables.

mod common;

use common::{page_with, strings, SCENARIO_PAGE};
use tower_report::{
    specs::report::extract_table,
    status::{filter_by_status, status_counts, StatusCount},
    ReportTable,
};

fn mixed() -> ReportTable {
    extract_table(&page_with(&[
        ("A", "Online"),
        ("B", "Offline"),
        ("C", "Online"),
        ("D", "Maintenance"),
        ("E", "Offline"),
        ("F", "Online"),
    ]))
    .unwrap()
}

#[test]
fn no_status_is_identity() {
    let t = mixed();
    assert_eq!(filter_by_status(&t, None), t);
}

#[test]
fn missing_status_column_is_identity() {
    let t = ReportTable::from_rows(strings(&["Site", "State"]), vec![strings(&["A", "Offline"])]).unwrap();
    assert_eq!(filter_by_status(&t, Some("Offline")), t);
    assert_eq!(status_counts(&t), None);
}

#[test]
fn present_value_keeps_exact_matches_in_order() {
    let t = mixed();
    let f = filter_by_status(&t, Some("Online"));
    assert_eq!(f.columns(), t.columns());
    let sites: Vec<&str> = (0..f.row_count()).filter_map(|i| f.cell(i, "Site")).collect();
    assert_eq!(sites, vec!["A", "C", "F"]);
}

#[test]
fn absent_value_gives_empty_table_same_columns() {
    let t = mixed();
    let f = filter_by_status(&t, Some("Decommissioned"));
    assert!(f.is_empty());
    assert_eq!(f.columns(), t.columns());
}

#[test]
fn counts_sum_to_row_count() {
    let t = mixed();
    let counts = status_counts(&t).unwrap();
    assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), t.row_count());
    assert_eq!(
        counts,
        vec![
            StatusCount { status: "Online".into(), count: 3 },
            StatusCount { status: "Offline".into(), count: 2 },
            StatusCount { status: "Maintenance".into(), count: 1 },
        ]
    );
}

#[test]
fn scenario_filter_and_counts() {
    let t = extract_table(SCENARIO_PAGE).unwrap();

    let offline = filter_by_status(&t, Some("Offline"));
    assert_eq!(offline.row_count(), 1);
    assert_eq!(offline.record(0).unwrap(), vec![("Site", "B"), ("Status", "Offline")]);

    let counts: Vec<(String, usize)> = status_counts(&t)
        .unwrap()
        .into_iter()
        .map(|c| (c.status, c.count))
        .collect();
    // tie → first seen first
    assert_eq!(counts, vec![("Online".to_string(), 1), ("Offline".to_string(), 1)]);
}
