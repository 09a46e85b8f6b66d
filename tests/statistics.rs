#[path = "common/mod.rs"]
mod common;

#[test]
fn test_empty_input_has_zero_counts() {
    let path = common::write_input_file("stats_empty.json", r#"{"data": {}}"#);
    let (stats, report) = common::run_check(&common::check_args(&path));

    assert_eq!(stats.unique_ids, 0);
    assert_eq!(stats.total_universities, 0);
    assert!(report.contains("No duplicates found."));
    assert!(report.ends_with("\nUnique university ids: 0\nTotal universities: 0\n"));
}

#[test]
fn test_absent_universities_contribute_zero() {
    let path = common::write_input_file(
        "stats_absent.json",
        r#"{"data": {"US": {}, "CA": {"universities": [{"id": 7, "name": "McGill"}]}}}"#,
    );
    let (stats, report) = common::run_check(&common::check_args(&path));

    assert_eq!(stats.total_universities, 1);
    assert_eq!(stats.unique_ids, 1);
    assert_eq!(stats.country_stats.len(), 2);
    assert_eq!(stats.country_stats[0].universities, 0);
    assert!(report.starts_with("No duplicates found.\n"));
}

#[test]
fn test_unique_equals_total_iff_no_duplicates() {
    let clean = common::write_input_file(
        "stats_clean.json",
        r#"{"data": {"US": {"universities": [{"id": 1, "name": "A"}, {"id": "1", "name": "B"}]},
                     "CA": {"universities": [{"id": 2, "name": "C"}]}}}"#,
    );
    let (stats, _) = common::run_check(&common::check_args(&clean));
    assert!(!stats.has_duplicates());
    assert_eq!(stats.unique_ids, stats.total_universities);

    let dirty = common::write_input_file(
        "stats_dirty.json",
        r#"{"data": {"US": {"universities": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]},
                     "CA": {"universities": [{"id": 2, "name": "C"}, {"id": 1, "name": "D"}, {"id": 1, "name": "E"}]}}}"#,
    );
    let (stats, report) = common::run_check(&common::check_args(&dirty));
    assert!(stats.has_duplicates());
    assert_eq!(stats.duplicated_ids, 2);
    assert_eq!(stats.unique_ids, 2);
    assert_eq!(stats.total_universities, 5);
    assert!(stats.unique_ids < stats.total_universities);
    assert!(!report.contains("No duplicates found."));
    assert!(report.starts_with(
        "Duplicate id 1:\n  - US: A\n  - CA: D\n  - CA: E\nDuplicate id 2:\n  - US: B\n  - CA: C\n\n"
    ));
}

#[test]
fn test_country_stats_count_duplicated_records() {
    let dirty = common::write_input_file(
        "stats_per_country.json",
        r#"{"data": {"US": {"universities": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]},
                     "CA": {"universities": [{"id": 1, "name": "C"}]}}}"#,
    );
    let (stats, _) = common::run_check(&common::check_args(&dirty));

    let manual_total: usize = stats.country_stats.iter().map(|c| c.universities).sum();
    assert_eq!(manual_total, stats.total_universities);
    assert_eq!(stats.country_stats[0].duplicated, 1);
    assert_eq!(stats.country_stats[1].duplicated, 1);
    assert!((stats.duplicate_ratio() - 200.0 / 3.0).abs() < 1e-9);
}
