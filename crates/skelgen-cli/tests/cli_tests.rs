//! Integration tests for the skelgen CLI
//!
//! These tests invoke the actual skelgen-cli binary and verify:
//! - Exit codes (0 = success, 1 = invalid definitions, 2 = error)
//! - stdout/stderr output
//! - JSON output format

use std::path::PathBuf;
use std::process::Command;

// ── Helpers ───────────────────────────────────────────────

fn skelgen_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_skelgen-cli"))
}

fn fixture_valid(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(format!("../../tests/fixtures/valid/{}", name))
}

fn fixture_invalid(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(format!("../../tests/fixtures/invalid/{}", name))
}

fn run_skelgen(args: &[&str]) -> std::process::Output {
    Command::new(skelgen_bin())
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute skelgen-cli")
}

// ── Version ───────────────────────────────────────────────

#[test]
fn test_version_command() {
    let output = run_skelgen(&["version"]);
    assert!(output.status.success(), "version should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("skelgen"), "should contain 'skelgen'");
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "should contain version"
    );
}

#[test]
fn test_version_flag() {
    let output = run_skelgen(&["--version"]);
    assert!(output.status.success(), "--version should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ── Generate ──────────────────────────────────────────────

#[test]
fn test_generate_to_stdout() {
    let output = run_skelgen(&["generate", fixture_valid("arrays.json").to_str().unwrap()]);
    assert!(output.status.success(), "generate should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("const int N_MAX = 100000;"));
    assert!(stdout.contains("int X[M_MAX];"));
    assert!(stdout.contains("  scanf(\"%d%d\", &N, &M);"));
    assert!(stdout.contains("  REP(i, N) scanf(\"%d\", A + i);"));
    assert!(stdout.contains("  REP(i, M) scanf(\"%d%d\", X + i, Y + i);"));
    assert!(stdout.contains("  scanf(\"%s\", S);"));
    assert!(stdout.ends_with("}\n"));
}

#[test]
fn test_generate_deterministic() {
    let path = fixture_valid("grid.json");
    let first = run_skelgen(&["generate", path.to_str().unwrap()]);
    let second = run_skelgen(&["generate", path.to_str().unwrap()]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout, "generate must be deterministic");
}

#[test]
fn test_generate_to_file() {
    let out = std::env::temp_dir().join("skelgen_test_grid.cxx");
    let _ = std::fs::remove_file(&out);

    let output = run_skelgen(&[
        "--quiet",
        "generate",
        fixture_valid("grid.json").to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "source goes to the file only");

    let src = std::fs::read_to_string(&out).expect("output file written");
    assert!(src.contains("char C[H_MAX][W_MAX + 1];"));
    assert!(src.contains("REP(i, H) scanf(\"%s\", C[i]);"));
    let _ = std::fs::remove_file(&out);
}

#[test]
fn test_generate_ignores_existing_sources() {
    let output = run_skelgen(&[
        "generate",
        fixture_valid("with-sources.json").to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("STALE"), "only the new source is emitted");
    assert!(stdout.starts_with("#include <cstdio>"));
    assert_eq!(stdout.matches("int main() {").count(), 1);
}

#[test]
fn test_generate_to_file_writes_once() {
    let out = std::env::temp_dir().join("skelgen_test_with_sources.cxx");
    let _ = std::fs::remove_file(&out);

    let output = run_skelgen(&[
        "generate",
        fixture_valid("with-sources.json").to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("generated").count(), 1);

    let src = std::fs::read_to_string(&out).expect("output file written");
    assert!(!src.contains("STALE"));
    assert!(src.contains("int N;"));
    let _ = std::fs::remove_file(&out);
}

#[test]
fn test_generate_invalid_definitions() {
    let output = run_skelgen(&[
        "generate",
        fixture_invalid("unresolved-size.json").to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1), "bad definitions should exit 1");
    assert!(output.stdout.is_empty(), "no partial source");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("K_MAX"));
}

#[test]
fn test_generate_malformed_json() {
    let output = run_skelgen(&["generate", fixture_invalid("malformed.json").to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2), "malformed input should exit 2");
}

#[test]
fn test_generate_nonexistent_file() {
    let output = run_skelgen(&["generate", "nonexistent.json"]);
    assert_eq!(output.status.code(), Some(2), "missing file should exit 2");
}

// ── Consts ────────────────────────────────────────────────

#[test]
fn test_consts_plain() {
    let output = run_skelgen(&["consts", fixture_valid("arrays.json").to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["N_MAX = 100000", "M_MAX = 100", "S_MAX = 10"]
    );
}

#[test]
fn test_consts_json() {
    let output = run_skelgen(&[
        "consts",
        "--json",
        fixture_valid("grid.json").to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("should be valid JSON");
    assert_eq!(json[0]["name"], "H_MAX");
    assert_eq!(json[0]["value"], 50);
    assert_eq!(json[1]["name"], "W_MAX");
}

// ── Check ─────────────────────────────────────────────────

#[test]
fn test_check_valid() {
    let output = run_skelgen(&["check", fixture_valid("arrays.json").to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("valid"));
}

#[test]
fn test_check_quiet_valid() {
    let output = run_skelgen(&[
        "--quiet",
        "check",
        fixture_valid("grid.json").to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "quiet mode should produce no stdout");
}

#[test]
fn test_check_invalid_reports_all() {
    let output = run_skelgen(&[
        "check",
        fixture_invalid("unresolved-size.json").to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("definition 1"));
    assert!(stderr.contains("definition 2"));
}

#[test]
fn test_check_json_invalid() {
    let output = run_skelgen(&[
        "check",
        "--json",
        fixture_invalid("unresolved-size.json").to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("should be valid JSON");
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"], 2);
    assert_eq!(json["diagnostics"][0]["index"], 1);
    assert_eq!(json["diagnostics"][1]["index"], 2);
}

#[test]
fn test_check_warns_missing_string_width() {
    let output = run_skelgen(&[
        "check",
        fixture_valid("missing-width.json").to_str().unwrap(),
    ]);
    assert!(output.status.success(), "warnings do not fail check");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning:"));
    assert!(stderr.contains("W_MAX"));
}

#[test]
fn test_check_json_warnings() {
    let output = run_skelgen(&[
        "check",
        "--json",
        fixture_valid("missing-width.json").to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("should be valid JSON");
    assert_eq!(json["valid"], true);
    assert_eq!(json["errors"], 0);
    assert_eq!(json["warnings"], 1);
    assert_eq!(json["diagnostics"][0]["severity"], "warning");
    assert_eq!(json["diagnostics"][0]["index"], 1);
}

#[test]
fn test_check_json_valid() {
    let output = run_skelgen(&[
        "check",
        "--json",
        fixture_valid("grid.json").to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("should be valid JSON");
    assert_eq!(json["valid"], true);
    assert_eq!(json["errors"], 0);
    assert_eq!(json["q"], "grid_b");
}
