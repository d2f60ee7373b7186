//! Integration tests for the `rcl` CLI binary.
//!
//! Uses `assert_cmd` and `predicates` to exercise the emit and formats
//! subcommands through the actual binary, including stdin/stdout piping,
//! file I/O, every format flag, and the invalid-input failure path.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

// ─────────────────────────────────────────────────────────────────────────────
// Emit subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn emit_stdin_defaults_to_rcl() {
    let input = r#"{"listen":"0.0.0.0","port":8080}"#;

    Command::cargo_bin("rcl")
        .unwrap()
        .arg("emit")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("listen = \"0.0.0.0\";\nport = 8080;\n");
}

#[test]
fn emit_file_to_stdout() {
    Command::cargo_bin("rcl")
        .unwrap()
        .args(["emit", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"web\";"))
        .stdout(predicate::str::contains("port = 8080;"))
        .stdout(predicate::str::contains("hosts ["));
}

#[test]
fn emit_json_compact_format() {
    Command::cargo_bin("rcl")
        .unwrap()
        .args(["emit", "-i", sample_json_path(), "-f", "json-compact"])
        .assert()
        .success()
        .stdout(r#"{"name":"web","port":8080,"tls":false,"hosts":["a.example.com","b.example.com"]}"#);
}

#[test]
fn emit_json_pretty_format() {
    Command::cargo_bin("rcl")
        .unwrap()
        .args(["emit", "-i", sample_json_path(), "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    \"name\": \"web\""))
        .stdout(predicate::str::starts_with("{\n"));
}

#[test]
fn emit_yaml_format() {
    Command::cargo_bin("rcl")
        .unwrap()
        .args(["emit", "-i", sample_json_path(), "-f", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name : \"web\","))
        .stdout(predicate::str::contains("hosts : ["));
}

#[test]
fn emit_file_to_file() {
    let output_path = "/tmp/rcl-test-emit-output.rcl";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("rcl")
        .unwrap()
        .args(["emit", "-i", sample_json_path(), "-o", output_path])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.contains("port = 8080;"));

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn emit_rejects_invalid_json() {
    Command::cargo_bin("rcl")
        .unwrap()
        .arg("emit")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse input as JSON"));
}

#[test]
fn emit_missing_input_file_fails() {
    Command::cargo_bin("rcl")
        .unwrap()
        .args(["emit", "-i", "/nonexistent/config.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Formats subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn formats_lists_all_outputs() {
    Command::cargo_bin("rcl")
        .unwrap()
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("json-compact"))
        .stdout(predicate::str::contains("yaml"))
        .stdout(predicate::str::contains("rcl"));
}
