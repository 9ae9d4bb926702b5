// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests for the consistency checker over catalogs on disk

use i18n_sync::check::{self, check_pair};
use i18n_sync::compare::{MissingSide, ValueSnapshot, ViolationKind};
use i18n_sync::config::{CheckConfig, Locale};
use i18n_sync::keys::extract_keys;
use i18n_sync::loader::{self, LoadError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn locale(code: &str) -> Locale {
    code.parse().unwrap()
}

fn write_catalog(dir: &Path, code: &str, body: &str) {
    fs::write(dir.join(format!("{code}.json")), body).unwrap();
}

fn catalogs(en: &str, ro: &str) -> (TempDir, CheckConfig) {
    let dir = TempDir::new().unwrap();
    write_catalog(dir.path(), "en", en);
    write_catalog(dir.path(), "ro", ro);
    let config = CheckConfig::new(dir.path(), locale("en"), vec![locale("ro")]);
    (dir, config)
}

#[test]
fn test_passing_catalogs_exit_zero() {
    let (_dir, config) = catalogs(
        r#"{"Home": "Home", "Domains": {"title": "Domains"}}"#,
        r#"{"Home": "Acasă", "Domains": {"title": "Domenii"}}"#,
    );

    let report = check::run_check(&config).expect("check should succeed");
    assert_eq!(report.locales.len(), 1);
    assert!(report.locales[0].missing_keys.is_empty());
    assert!(report.locales[0].value_violations.is_empty());
    assert_eq!(report.locales[0].base_key_count, 2);
    assert!(report.passed());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_missing_key_is_reported_once() {
    let (_dir, config) = catalogs(
        r#"{"Home": "Home", "Extra": "Value"}"#,
        r#"{"Home": "Acasă"}"#,
    );

    let report = check::run_check(&config).expect("check should succeed");
    let locale_report = &report.locales[0];
    assert_eq!(locale_report.missing_keys.len(), 1);
    let entry = &locale_report.missing_keys[0];
    assert_eq!(entry.key, "Extra");
    assert_eq!(entry.missing_from, MissingSide::Target);
    assert_eq!(entry.base_value, ValueSnapshot::Text("Value".into()));
    assert_eq!(entry.target_value, ValueSnapshot::Missing);
    assert!(locale_report.value_violations.is_empty());
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_identical_values_are_flagged() {
    let base = loader::parse_tree(Path::new("en.json"), r#"{"Home": "Acasă"}"#).unwrap();
    let target = loader::parse_tree(Path::new("ro.json"), r#"{"Home": "Acasă"}"#).unwrap();

    let report = check_pair(&locale("en"), &base, &locale("ro"), &target);
    assert_eq!(report.value_violations.len(), 1);
    assert_eq!(report.value_violations[0].key, "Home");
    assert_eq!(report.value_violations[0].kind, ViolationKind::Identical);
    assert!(!report.passed());
}

#[test]
fn test_empty_base_value_is_flagged() {
    let base = loader::parse_tree(Path::new("en.json"), r#"{"Home": ""}"#).unwrap();
    let target = loader::parse_tree(Path::new("ro.json"), r#"{"Home": "Acasă"}"#).unwrap();

    let report = check_pair(&locale("en"), &base, &locale("ro"), &target);
    assert_eq!(report.value_violations.len(), 1);
    assert_eq!(report.value_violations[0].kind, ViolationKind::Empty);
}

#[test]
fn test_null_value_is_flagged() {
    let base = loader::parse_tree(Path::new("en.json"), r#"{"a": {"b": "Text"}}"#).unwrap();
    let target = loader::parse_tree(Path::new("ro.json"), r#"{"a": {"b": null}}"#).unwrap();

    let report = check_pair(&locale("en"), &base, &locale("ro"), &target);
    assert!(report.missing_keys.is_empty());
    assert_eq!(report.value_violations.len(), 1);
    assert_eq!(report.value_violations[0].key, "a.b");
    assert_eq!(report.value_violations[0].kind, ViolationKind::Null);
    assert_eq!(report.value_violations[0].target_value.to_string(), "null");
}

#[test]
fn test_dotted_json_key_is_unresolved() {
    let base = loader::parse_tree(Path::new("en.json"), r#"{"a.b": "Dotted"}"#).unwrap();
    let target = loader::parse_tree(Path::new("ro.json"), r#"{"a.b": "Cu punct"}"#).unwrap();

    let report = check_pair(&locale("en"), &base, &locale("ro"), &target);
    assert_eq!(report.value_violations.len(), 1);
    assert_eq!(report.value_violations[0].kind, ViolationKind::Unresolved);
    assert_eq!(report.value_violations[0].base_value, ValueSnapshot::Missing);
}

#[test]
fn test_renamed_key_with_equal_counts_fails() {
    let (_dir, config) = catalogs(
        r#"{"Home": "Home", "Old": "Old"}"#,
        r#"{"Home": "Acasă", "New": "Nou"}"#,
    );

    let report = check::run_check(&config).expect("check should succeed");
    let locale_report = &report.locales[0];
    assert_eq!(locale_report.base_key_count, locale_report.target_key_count);
    let missing: Vec<(&str, MissingSide)> = locale_report
        .missing_keys
        .iter()
        .map(|m| (m.key.as_str(), m.missing_from))
        .collect();
    assert_eq!(
        missing,
        vec![("Old", MissingSide::Target), ("New", MissingSide::Base)]
    );
    assert!(!report.passed());
}

#[test]
fn test_all_violations_are_collected_in_one_run() {
    let (_dir, config) = catalogs(
        r#"{"A": "a", "B": "same", "C": "", "Only": {"here": "x"}}"#,
        r#"{"A": "ah", "B": "same", "C": "ce", "Extra": "y"}"#,
    );

    let report = check::run_check(&config).expect("check should succeed");
    let locale_report = &report.locales[0];
    assert_eq!(locale_report.missing_keys.len(), 2);
    let flagged: Vec<&str> = locale_report
        .value_violations
        .iter()
        .map(|v| v.key.as_str())
        .collect();
    assert_eq!(flagged, vec!["B", "C"]);
    assert_eq!(report.violation_count(), 4);
}

#[test]
fn test_multiple_targets_fail_if_any_fails() {
    let dir = TempDir::new().unwrap();
    write_catalog(dir.path(), "en", r#"{"Home": "Home"}"#);
    write_catalog(dir.path(), "ro", r#"{"Home": "Acasă"}"#);
    write_catalog(dir.path(), "de", r#"{}"#);
    let config = CheckConfig::new(dir.path(), locale("en"), vec![locale("ro"), locale("de")]);

    let report = check::run_check(&config).expect("check should succeed");
    assert_eq!(report.locales.len(), 2);
    assert!(report.locales[0].passed());
    assert!(!report.locales[1].passed());
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_missing_target_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    write_catalog(dir.path(), "en", r#"{"Home": "Home"}"#);
    let config = CheckConfig::new(dir.path(), locale("en"), vec![locale("ro")]);

    let err = check::run_check(&config).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert_eq!(err.path(), dir.path().join("ro.json"));
}

#[test]
fn test_invalid_json_is_load_error() {
    let (_dir, config) = catalogs(r#"{"Home": "Home"}"#, r#"{"Home": "#);
    let err = check::run_check(&config).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn test_extraction_on_loaded_file_matches_leaves() {
    let tree = loader::parse_tree(
        Path::new("en.json"),
        r#"{"Domains": {"services": {"title": "Services", "empty": {}}}, "Home": "Home"}"#,
    )
    .unwrap();
    let keys = extract_keys(&tree);
    assert_eq!(keys, vec!["Domains.services.title", "Home"]);
    assert_eq!(keys.len(), tree.leaf_count());
}
