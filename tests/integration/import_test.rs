//! End-to-end tests for the import run against the in-memory store

use person_import::{
    AcceptancePolicy, ErrorCategory, ImportError, ImportOutcome, MemoryStore, ParseError,
    run_import,
};

use crate::utils::{test_config, write_extract};

const GOOD_LINE: &str =
    "529.982.247-25 0 0 2013-05-13 1234,56 99,90 79.379.491/0001-83 79.379.491/0001-83";
const SEVEN_FIELDS: &str = "041.091.641-25 0 0 NULL NULL NULL 79.379.491/0001-83";

#[test]
fn test_malformed_line_stops_run_after_earlier_insert() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_extract(dir.path(), &[GOOD_LINE, SEVEN_FIELDS]);
    let mut store = MemoryStore::new();

    let err = run_import(&test_config(&path), &mut store).unwrap_err();

    match err {
        ImportError::MalformedRow { line, source } => {
            assert_eq!(line, 3);
            assert_eq!(
                source,
                ParseError::MissingFields {
                    expected: 8,
                    found: 7
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.rows().len(), 1);
    assert_eq!(store.rows()[0].record.person_document, "52998224725");
    assert_eq!(store.rows()[0].record.avg_ticket_value, 1234.56);
}

#[test]
fn test_nothing_after_malformed_line_is_inserted() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_extract(dir.path(), &[GOOD_LINE, SEVEN_FIELDS, GOOD_LINE]);
    let mut store = MemoryStore::new();

    assert!(run_import(&test_config(&path), &mut store).is_err());
    assert_eq!(store.rows().len(), 1);
}

#[test]
fn test_existing_rows_skip_the_whole_extract() {
    let dir = tempfile::tempdir().unwrap();
    // The file is never opened, so a missing path must not matter
    let missing = dir.path().join("does_not_exist.txt");
    let mut store = MemoryStore::new().with_existing_rows(5);

    let outcome = run_import(&test_config(&missing), &mut store).unwrap();

    assert_eq!(outcome, ImportOutcome::AlreadyPresent { existing_rows: 5 });
    assert!(store.rows().is_empty());
    assert_eq!(store.count_queries(), 1);
}

#[test]
fn test_empty_destination_attempts_every_accepted_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_extract(
        dir.path(),
        &[
            GOOD_LINE,
            "5299822472 1 0 NULL NULL NULL NULL NULL",
            "123 456 789-09  N  S  NULL  12,5  NULL  11.222.333/0001-81  NULL",
            "529982247251 1 1 2020-01-01 1 1 NULL NULL",
        ],
    );
    let mut store = MemoryStore::new();

    let outcome = run_import(&test_config(&path), &mut store).unwrap();

    let ImportOutcome::Completed(summary) = outcome else {
        panic!("expected a completed import");
    };
    assert_eq!(summary.lines_read, 4);
    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.rows_affected, 2);

    let spaced = &store.rows()[1].record;
    assert_eq!(spaced.person_document, "12345678909");
    assert_eq!(spaced.avg_ticket_value, 12.5);
    assert_eq!(spaced.last_ticket_value, 0.0);
    assert_eq!(spaced.last_purchase_date, "1900-01-01");
    assert_eq!(spaced.most_frequent_store_document, "11222333000181");
    assert_eq!(spaced.last_purchase_store_document, "NULL");
}

#[test]
fn test_second_run_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_extract(dir.path(), &[GOOD_LINE, GOOD_LINE]);
    let config = test_config(&path);
    let mut store = MemoryStore::new();

    let first = run_import(&config, &mut store).unwrap();
    assert!(matches!(first, ImportOutcome::Completed(_)));

    let second = run_import(&config, &mut store).unwrap();
    assert_eq!(second, ImportOutcome::AlreadyPresent { existing_rows: 2 });
    assert_eq!(store.rows().len(), 2);
}

#[test]
fn test_checksum_policy_filters_invalid_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_extract(
        dir.path(),
        &[GOOD_LINE, "529.982.247-26 0 0 NULL NULL NULL NULL NULL"],
    );
    let mut config = test_config(&path);
    config.acceptance = AcceptancePolicy::Checksum;
    let mut store = MemoryStore::new();

    let outcome = run_import(&config, &mut store).unwrap();

    let ImportOutcome::Completed(summary) = outcome else {
        panic!("expected a completed import");
    };
    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn test_missing_source_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist.txt");
    let mut store = MemoryStore::new();

    let err = run_import(&test_config(&missing), &mut store).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Io);
    assert!(err.to_string().contains("does_not_exist.txt"));
}

#[test]
fn test_insert_failure_is_fatal_without_rollback() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_extract(dir.path(), &[GOOD_LINE, GOOD_LINE, GOOD_LINE]);
    let mut store = MemoryStore::new().failing_on_insert(3);

    let err = run_import(&test_config(&path), &mut store).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Query);
    assert_eq!(store.rows().len(), 2);
}
