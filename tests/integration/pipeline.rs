//! Full pipeline runs against mock collaborators.

use std::path::Path;

use tempfile::TempDir;
use uuid::Uuid;

use crate::common::fixtures;
use iterm2gnome::error::ConvertError;
use iterm2gnome::pipeline;
use iterm2gnome::profile::ProfileRecord;
use iterm2gnome::store::mock::{MockStore, RecordingExecutor};

const NORD_ID: &str = "b1dcc9dd-5262-4d8d-a863-c897e6d979b9";

fn record(name: &str, id: &str) -> ProfileRecord {
    ProfileRecord {
        name: name.to_string(),
        id: id.to_string(),
    }
}

fn run_full_theme(
    dir: &TempDir,
    store: &MockStore,
    executor: &RecordingExecutor,
) -> iterm2gnome::error::Result<pipeline::RunReport> {
    let theme = fixtures::write_theme(dir.path(), "Nord", &fixtures::full_theme());
    pipeline::run(&theme, store, executor)
}

#[test]
fn test_existing_profile_is_updated_in_place() {
    let dir = TempDir::new().unwrap();
    let store = MockStore::with_profiles(vec![record("Nord", NORD_ID)]);
    let executor = RecordingExecutor::new();

    let report = run_full_theme(&dir, &store, &executor).unwrap();

    assert_eq!(report.profile_id, NORD_ID);
    assert!(!report.created);
    assert_eq!(executor.applied().len(), 7);
}

#[test]
fn test_unknown_theme_mints_a_new_profile() {
    let dir = TempDir::new().unwrap();
    let store = MockStore::with_profiles(vec![record("Default", "def-000")]);
    let executor = RecordingExecutor::new();

    let report = run_full_theme(&dir, &store, &executor).unwrap();

    assert!(report.created);
    assert_ne!(report.profile_id, "def-000");
    assert!(Uuid::parse_str(&report.profile_id).is_ok());

    // Membership write keeps the existing id first and appends the new one.
    let ops = executor.applied();
    assert_eq!(
        ops[6].value,
        format!("['def-000', '{}']", report.profile_id)
    );
}

#[test]
fn test_dry_run_output_is_golden() {
    let dir = TempDir::new().unwrap();
    let store = MockStore::with_profiles(vec![record("Nord", NORD_ID)]);
    let executor = RecordingExecutor::new();

    run_full_theme(&dir, &store, &executor).unwrap();

    let root = format!("/org/gnome/terminal/legacy/profiles:/:{NORD_ID}");
    let palette = vec!["'#FF0000'"; 16].join(", ");
    let expected = vec![
        format!("dconf write {root}/foreground_color \"'#FFFFFF'\""),
        format!("dconf write {root}/background_color \"'#000000'\""),
        format!("dconf write {root}/bold_color \"'#FFFFFF'\""),
        format!("dconf write {root}/palette \"[{palette}]\""),
        format!("dconf write {root}/visible-name \"'Nord'\""),
        format!("dconf write {root}/use-theme-colors \"false\""),
        format!("dconf write /org/gnome/terminal/legacy/profiles:/list \"['{NORD_ID}']\""),
    ];

    assert_eq!(executor.rendered(), expected);
}

#[test]
fn test_reruns_against_unchanged_store_are_identical() {
    let dir = TempDir::new().unwrap();
    let store = MockStore::with_profiles(vec![record("Nord", NORD_ID)]);

    let first = RecordingExecutor::new();
    run_full_theme(&dir, &store, &first).unwrap();

    let second = RecordingExecutor::new();
    run_full_theme(&dir, &store, &second).unwrap();

    assert_eq!(first.rendered(), second.rendered());
}

#[test]
fn test_malformed_theme_emits_zero_operations() {
    let dir = TempDir::new().unwrap();
    let theme = fixtures::write_theme(
        dir.path(),
        "Broken",
        &fixtures::theme_with_malformed_entry(),
    );
    let store = MockStore::with_profiles(vec![record("Broken", NORD_ID)]);
    let executor = RecordingExecutor::new();

    let err = pipeline::run(&theme, &store, &executor).unwrap_err();

    assert!(matches!(err, ConvertError::MalformedColorEntry { .. }));
    assert!(executor.applied().is_empty());
}

#[test]
fn test_failing_write_leaves_earlier_writes_applied() {
    let dir = TempDir::new().unwrap();
    let store = MockStore::with_profiles(vec![record("Nord", NORD_ID)]);
    let executor = RecordingExecutor::failing_at(3);

    let err = run_full_theme(&dir, &store, &executor).unwrap_err();

    match err {
        ConvertError::ExternalCommandFailed { command } => {
            assert!(command.contains("/palette"), "failing command: {command}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // The three color writes before the failure stay applied; nothing after.
    assert_eq!(executor.applied().len(), 3);
}

#[test]
fn test_missing_theme_file() {
    let store = MockStore::empty();
    let executor = RecordingExecutor::new();

    let err = pipeline::run(Path::new("/nonexistent/Nord.itermcolors"), &store, &executor)
        .unwrap_err();

    assert!(matches!(err, ConvertError::ThemeNotFound { .. }));
    assert!(executor.applied().is_empty());
}

#[test]
fn test_store_read_failure_aborts_before_any_write() {
    let dir = TempDir::new().unwrap();
    let store = MockStore::failing();
    let executor = RecordingExecutor::new();

    let err = run_full_theme(&dir, &store, &executor).unwrap_err();

    assert!(matches!(err, ConvertError::StoreRead(_)));
    assert!(executor.applied().is_empty());
}

#[test]
fn test_theme_name_derived_from_file_stem() {
    let dir = TempDir::new().unwrap();
    let theme = fixtures::write_theme(dir.path(), "Solarized Dark", &fixtures::full_theme());
    let store = MockStore::empty();
    let executor = RecordingExecutor::new();

    let report = pipeline::run(&theme, &store, &executor).unwrap();

    assert_eq!(report.theme_name, "Solarized Dark");
    assert_eq!(executor.applied()[4].value, "'Solarized Dark'");
}
