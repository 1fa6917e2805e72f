//! End-to-end tests for the batch (non-interactive) command line surface.

mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use support::{fixture_tree, FIXTURE_UID};

fn benchtop() -> Command {
    Command::cargo_bin("benchtop").expect("binary builds")
}

#[test]
fn contract_dump_is_valid_json() {
    // The contract is static data; no fixture root is required
    let assert = benchtop().arg("--contract").assert().success();

    let contract: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("contract parses");
    let fields = contract["fields"].as_array().expect("fields array");
    assert_eq!(fields.len(), 49);
    assert_eq!(fields[0]["name"].as_str(), Some("file_format"));
    assert_eq!(fields[0]["type"].as_str(), Some("string"));
}

#[test]
fn values_dump_prints_counted_values() {
    let dir = fixture_tree();

    let assert = benchtop()
        .arg(dir.path())
        .args(["--values", "supplier"])
        .assert()
        .success();

    let values: Value = serde_json::from_slice(&assert.get_output().stdout).expect("values parse");
    let values = values.as_array().expect("values array");
    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["value"].as_str(), Some("acme"));
    assert_eq!(values[0]["count"].as_u64(), Some(12));
}

#[test]
fn values_for_an_unmapped_field_fail() {
    let dir = fixture_tree();

    benchtop()
        .arg(dir.path())
        .args(["--values", "gene_symbol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no fixture mapping for field 'gene_symbol'",
        ));
}

#[test]
fn missing_fixture_root_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");

    benchtop()
        .arg(dir.path().join("nope"))
        .args(["--search", "cell_type=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fixture root not found"));
}

#[test]
fn missing_mapping_is_fatal() {
    // Root exists but holds no mapping.json
    let dir = tempfile::tempdir().expect("tempdir");

    benchtop()
        .arg(dir.path())
        .args(["--search", "cell_type=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load fixture mapping"));
}

#[test]
fn search_dump_echoes_requested_fields() {
    let dir = fixture_tree();

    let assert = benchtop()
        .arg(dir.path())
        .args(["--search", "cell_type=Neuron,file_format=json"])
        .assert()
        .success();

    let response: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("response parses");
    assert_eq!(response["total"].as_u64(), Some(10));
    assert_eq!(response["id"].as_str(), Some(FIXTURE_UID));

    let first = &response["data"][0];
    assert_eq!(first["cell_type"].as_str(), Some("cell_type_value_0"));
    assert!(first.get("file_format").is_none());
}

#[test]
fn degraded_search_still_exits_zero() {
    let dir = fixture_tree();
    std::fs::remove_file(dir.path().join("readouts/1.json")).expect("remove readout fixture");

    let assert = benchtop()
        .arg(dir.path())
        .args(["--search", "cell_type=Neuron"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: search degraded:"));

    let response: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("response parses");
    assert_eq!(response["total"].as_u64(), Some(50));
    let id = response["id"].as_str().expect("id string");
    assert_eq!(id.len(), 36);
    assert_ne!(id, FIXTURE_UID);
}

#[test]
fn help_names_the_batch_flags() {
    benchtop()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--contract")
                .and(predicate::str::contains("--values"))
                .and(predicate::str::contains("--search")),
        );
}
