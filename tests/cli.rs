//! End-to-end tests for the `find-error` binary: exit status and the exact
//! lines it prints.

use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("tests/fixtures");
    p.push(name);
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_find-error"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn find-error")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.trim().to_string())
        .collect()
}

fn run_fixture(fixture: &str, selector: &str) -> (Output, Vec<String>) {
    let abi = fixture_path(fixture);
    let output = run(&[abi.to_str().unwrap(), selector]);
    let lines = stdout_lines(&output);
    (output, lines)
}

#[test]
fn test_match_prints_signature_last() {
    let (output, lines) = run_fixture("insufficient-balance.json", "92665351");
    assert!(output.status.success());
    assert_eq!(
        lines,
        vec![
            "found error type: InsufficientBalance with selector: 92665351",
            "Matched Error: InsufficientBalance(uint256) -> 92665351",
        ]
    );
}

#[test]
fn test_no_match_exits_successfully() {
    let (output, lines) = run_fixture("insufficient-balance.json", "deadbeef");
    assert!(output.status.success());
    assert_eq!(
        lines.last().map(String::as_str),
        Some("No matching error found for selector deadbeef")
    );
}

#[test]
fn test_prefixed_selector_scans_in_order() {
    let (output, lines) = run_fixture("registry-relay.json", "0xea8e4eb5");
    assert!(output.status.success());
    assert_eq!(lines.len(), 10);
    assert_eq!(
        lines[0],
        "found error type: AccountBalanceOverflow with selector: 01336cea"
    );
    assert_eq!(
        lines[7],
        "found error type: TransferToZeroAddress with selector: ea553b34"
    );
    assert_eq!(lines[9], "Matched Error: NotAuthorized() -> ea8e4eb5");
    assert!(lines.iter().all(|l| !l.contains('\u{1b}')));
}

#[test]
fn test_no_match_echoes_raw_input() {
    let (output, lines) = run_fixture("registry-relay.json", "0xDEADBEEF");
    assert!(output.status.success());
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[11], "No matching error found for selector 0xDEADBEEF");
}

#[test]
fn test_log_level_silences_diagnostics() {
    let abi = fixture_path("registry-relay.json");
    let output = run(&[abi.to_str().unwrap(), "ceea21b6", "--log-level", "warn"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Matched Error: TokenDoesNotExist() -> ceea21b6"]
    );
}

#[test]
fn test_listing_without_selector() {
    let abi = fixture_path("registry-relay.json");
    let output = run(&[abi.to_str().unwrap()]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "01336cea  AccountBalanceOverflow()");
    assert_eq!(lines[10], "fcb4592b  InvalidOrder((address,uint256),bytes32[])");
}

#[test]
fn test_signature_mode() {
    let output = run(&["--signature", "Foo(uint256,address)"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Foo(uint256,address) -> 3db6cc38"]
    );
}

#[test]
fn test_missing_file_fails() {
    let (output, lines) = run_fixture("does-not-exist.json", "12");
    assert!(!output.status.success());
    assert!(lines.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read ABI file"));
    assert!(stderr.contains("does-not-exist.json"));
}

#[test]
fn test_malformed_json_fails() {
    let (output, _) = run_fixture("truncated.json", "12");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to parse ABI file"));
}

#[test]
fn test_invalid_selector_fails() {
    let (output, lines) = run_fixture("registry-relay.json", "not-hex");
    assert!(!output.status.success());
    assert!(lines.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid error selector"));
}
