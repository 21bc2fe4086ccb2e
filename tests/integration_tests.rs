//! Integration tests
//!
//! Tests the full flow: options file → builder → page window → CLI output

use clap::Parser;
use page_window::cli::{Cli, Runner};
use page_window::config::OptionOverrides;
use page_window::{load_options, Error, Pagination, PaginationBuilder, PaginationOptions};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

fn options_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run_cli(args: &[&str]) -> page_window::Result<Value> {
    let cli = Cli::parse_from(std::iter::once("page-window").chain(args.iter().copied()));
    let mut out = Vec::new();
    Runner::new(cli).run_with(&mut out)?;
    Ok(serde_json::from_slice(&out).unwrap())
}

// ============================================================================
// Options File Tests
// ============================================================================

#[test]
fn test_load_yaml_file() {
    let file = options_file(
        ".yaml",
        "current_page: 47\ntotal_items_count: 100\nitems_list_size: 1\n",
    );
    let options = load_options(file.path()).unwrap();
    let window = options.builder().build();

    assert_eq!(window.current_page(), 47);
    assert_eq!(window.total_pages(), 100);
    assert_eq!(window.set_pages(), 41..=50);
    assert!(window.has_previous_set());
    assert!(window.has_next_set());
}

#[test]
fn test_load_json_file() {
    let file = options_file(
        ".json",
        r#"{"current_page": 1, "total_items_count": 5, "items_list_size": 1, "pages_count_in_set": -1}"#,
    );
    let window = load_options(file.path()).unwrap().builder().build();

    assert_eq!(window.set_pages(), 1..=1);
    assert!(!window.has_previous_set());
    assert!(window.has_next_set());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_options(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn test_load_invalid_yaml() {
    let file = options_file(".yaml", "current_page: [1, 2]\n");
    let err = load_options(file.path()).unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

#[test]
fn test_options_match_builder() {
    let options = PaginationOptions {
        current_page: 3,
        total_items_count: 12,
        items_list_size: 2,
        pages_count_in_set: 2,
    };

    let from_options = options.builder().build();
    let direct = PaginationBuilder::new()
        .set_current_page_number(3)
        .set_total_items_count(12)
        .set_items_list_size(2)
        .set_pages_count_in_set(2)
        .build();

    assert_eq!(from_options, direct);
}

#[test]
fn test_overrides_on_loaded_file() {
    let file = options_file(".yml", "total_items_count: 12\nitems_list_size: 2\npages_count_in_set: 2\n");
    let options = load_options(file.path()).unwrap().merge(OptionOverrides {
        current_page: Some(6),
        ..Default::default()
    });
    let window = options.builder().build();
    assert_eq!(window.set_pages(), 5..=6);
    assert!(!window.has_next_set());
}

// ============================================================================
// CLI Tests
// ============================================================================

#[test]
fn test_cli_flags_override_file() {
    let file = options_file(
        ".yaml",
        "current_page: 1\ntotal_items_count: 12\nitems_list_size: 2\npages_count_in_set: 2\n",
    );
    let path = file.path().to_str().unwrap();

    let value = run_cli(&["build", "--options", path, "--page", "3"]).unwrap();
    assert_eq!(value["current_page"], 3);
    assert_eq!(value["first_page_in_set"], 3);
    assert_eq!(value["last_page_in_set"], 4);
    assert_eq!(value["previous_set_page"], 2);
    assert_eq!(value["next_set_page"], 5);
}

#[test]
fn test_cli_clamps_negative_flags() {
    let value = run_cli(&[
        "build",
        "--page",
        "-1",
        "--page-size",
        "10",
        "--total-items",
        "5",
        "--window",
        "2",
    ])
    .unwrap();
    assert_eq!(
        value,
        json!({
            "current_page": 1,
            "total_pages": 1,
            "first_page_in_set": 1,
            "last_page_in_set": 1,
            "has_previous_set": false,
            "has_next_set": false,
            "previous_set_page": null,
            "next_set_page": null,
        })
    );
}

#[test]
fn test_cli_huge_window_does_not_enumerate_pages() {
    let max = i64::MAX.to_string();
    let value = run_cli(&["build", "-t", &max, "-s", "1", "-w", &max]).unwrap();
    assert_eq!(value["total_pages"], json!(i64::MAX as u64));
    assert_eq!(value["first_page_in_set"], 1);
    assert_eq!(value["last_page_in_set"], json!(i64::MAX as u64));
    assert_eq!(value["next_set_page"], Value::Null);
}

#[test]
fn test_cli_bad_options_file() {
    let file = options_file(".json", "{\"current_page\": ");
    let err = run_cli(&["build", "-o", file.path().to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}
