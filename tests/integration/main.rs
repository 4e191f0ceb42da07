//! Integration tests for Primer
//!
//! These tests verify that the startup collaborators, the construction
//! pipeline and the CLI work together correctly.

use primer_bootstrap::{
    BootstrapConfig, ConfigFile, FsDirectoryEnsurer, Overrides, StaticEnv, ensure_all,
};
use primer_core::{StateCell, build_state};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn primer(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_primer"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env("USER", "tester")
        .output()
        .expect("Failed to execute primer")
}

/// Test the whole startup sequence through the library crates
#[test]
fn test_startup_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let env = StaticEnv::new().with("USER", "tester");
    let config = BootstrapConfig::resolve(&env, ConfigFile::default(), Overrides::default());

    let report = ensure_all(&FsDirectoryEnsurer, config.required_paths(root));
    assert!(report.is_complete());
    assert_eq!(report.created.len(), 3);

    let cell = StateCell::new();
    let state = cell.publish(build_state(&config.graph)).unwrap();
    assert_eq!(state.weights.sorted(), vec![("A", 20), ("B", 10), ("C", 10), ("D", 0)]);
    assert_eq!(state.symbols.lookup(400), Some("CD"));

    // Running it again finds the directories in place
    let report = ensure_all(&FsDirectoryEnsurer, config.required_paths(root));
    assert_eq!(report.present.len(), 3);
    assert!(report.created.is_empty());
}

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    let output = primer(temp_dir.path(), &["--help"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Build and inspect the startup graph and numeral table"));
}

#[test]
fn test_cli_show() {
    let temp_dir = TempDir::new().unwrap();
    let output = primer(temp_dir.path(), &["show"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Node A: 20"));
    assert!(stdout.contains("Node D: 0"));
    assert!(stdout.contains("900 = CM"));

    for dir in ["uploads", "logs", "temp"] {
        assert!(temp_dir.path().join(dir).is_dir(), "{} should exist", dir);
    }
}

#[test]
fn test_cli_show_json_with_config_graph() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("primer.toml"),
        r#"
required_dirs = ["data"]

[graph]
nodes = ["hub", "spoke"]
edges = [["hub", "spoke"], ["hub", "elsewhere"], ["hub", "hub"]]
"#,
    )
    .unwrap();

    let output = primer(temp_dir.path(), &["show", "--json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let state = &json["state"];
    assert_eq!(state["weights"]["hub"], 30);
    assert_eq!(state["weights"]["spoke"], 0);
    assert!(state["weights"].get("elsewhere").is_none());
    assert_eq!(state["edges"]["hub"], serde_json::json!(["spoke", "elsewhere", "hub"]));
    assert_eq!(state["symbols"]["4"], "IV");

    assert!(temp_dir.path().join("data").is_dir());
    assert!(!temp_dir.path().join("uploads").exists());
}

#[test]
fn test_cli_lookup() {
    let temp_dir = TempDir::new().unwrap();

    let hit = primer(temp_dir.path(), &["lookup", "90"]);
    assert!(hit.status.success());
    assert_eq!(String::from_utf8_lossy(&hit.stdout).trim(), "90 = XC");

    let miss = primer(temp_dir.path(), &["lookup", "7"]);
    assert!(miss.status.success());
    assert_eq!(String::from_utf8_lossy(&miss.stdout).trim(), "7 has no symbol");
}

#[test]
fn test_cli_check_survives_blocked_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("logs"), "in the way").unwrap();

    let output = primer(temp_dir.path(), &["--workspace", "/srv/primer", "check"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("User: tester"));
    assert!(stdout.contains("Workspace: /srv/primer"));
    assert!(stdout.contains("(missing: "));
    assert!(temp_dir.path().join("uploads").is_dir());
    assert!(temp_dir.path().join("temp").is_dir());
}

#[test]
fn test_cli_empty_variable_falls_back_to_env_file() {
    let temp_dir = TempDir::new().unwrap();
    let env_file = temp_dir.path().join("primer.env");
    fs::write(&env_file, "USER=from-file\nPRIMER_WORKSPACE=/srv/from-file\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_primer"))
        .arg("--root")
        .arg(temp_dir.path())
        .arg("--env-file")
        .arg(&env_file)
        .arg("check")
        .env("USER", "")
        .env("PRIMER_WORKSPACE", "/srv/from-process")
        .output()
        .expect("Failed to execute primer");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("User: from-file"));
    assert!(stdout.contains("Workspace: /srv/from-process"));
}

#[test]
fn test_cli_rejects_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("primer.toml"), "required_dirs = 3").unwrap();

    let output = primer(temp_dir.path(), &["show"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid config"));
}
