//! CLI integration tests.
//!
//! Runs the built `docstring-renderer` binary against the Python fixtures.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Get path to the Python fixtures.
fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("python")
        .join(name)
        .display()
        .to_string()
}

/// Run CLI command and return output.
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docstring-renderer"))
        .args(args)
        .output()
        .expect("Failed to run docstring-renderer")
}

/// Run CLI command with `RUST_LOG` set, or removed when `None`.
fn run_cli_with_log(args: &[&str], rust_log: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docstring-renderer"));
    cmd.args(args);
    match rust_log {
        Some(filter) => cmd.env("RUST_LOG", filter),
        None => cmd.env_remove("RUST_LOG"),
    };
    cmd.output().expect("Failed to run docstring-renderer")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn test_prints_match() {
    let file = fixture("file.py");
    let out = run_cli(&["--file-path", &file, "--keyword", "class1func1"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "MyClass1.class1func1\n");
}

#[test]
fn test_json_match() {
    let file = fixture("file.py");
    let out = run_cli(&["--file-path", &file, "--keyword", "Class2", "--format", "json"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["name"], "MyClass2");
    assert_eq!(value["kind"], "class");
    assert_eq!(value["keyword"], "Class2");
}

#[test]
fn test_not_found_exits_nonzero() {
    let file = fixture("file.py");
    let out = run_cli(&["--file-path", &file, "--keyword", "func5"]);

    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("`func5`"), "stderr: {}", stderr(&out));
}

#[test]
fn test_missing_file_exits_nonzero() {
    let file = fixture("does_not_exist.py");
    let out = run_cli(&["--file-path", &file, "--keyword", "x"]);

    assert!(!out.status.success());
    assert!(stderr(&out).contains("does_not_exist.py"));
}

#[test]
fn test_parse_error_exits_nonzero() {
    let file = fixture("invalid.py");
    let out = run_cli(&["--file-path", &file, "--keyword", "fine"]);

    assert!(!out.status.success());
    assert!(stderr(&out).contains("Parse error"), "stderr: {}", stderr(&out));
}

#[test]
fn test_missing_keyword_is_usage_error() {
    let file = fixture("file.py");
    let out = run_cli(&["--file-path", &file]);

    assert!(!out.status.success());
}

#[test]
fn test_list_text() {
    let file = fixture("file.py");
    let out = run_cli(&["--file-path", &file, "--list"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let lines: Vec<String> = stdout(&out).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "function\tfunc1");
    assert_eq!(lines[3], "method\tMyClass1.class1func1");
    assert_eq!(lines[8], "class\tMyClass2");
}

#[test]
fn test_list_json() {
    let file = fixture("file.py");
    let out = run_cli(&["--file-path", &file, "--list", "--format", "json"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["functions"].as_array().unwrap().len(), 3);
    assert_eq!(value["methods"].as_array().unwrap().len(), 4);
    assert_eq!(value["classes"][1], "MyClass2");
}

#[test]
fn test_list_json_includes_typed_declarations() {
    let file = fixture("decorated.py");
    let out = run_cli(&["--file-path", &file, "--list", "--format", "json"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let declarations = value["declarations"].as_array().unwrap();

    let cached = declarations
        .iter()
        .find(|d| d["name"] == "cached_lookup")
        .expect("cached_lookup listed");
    assert_eq!(cached["decorators"][0], "functools.lru_cache(maxsize=None)");

    let fetch = declarations
        .iter()
        .find(|d| d["name"] == "fetch_remote")
        .expect("fetch_remote listed");
    assert_eq!(fetch["is_async"], true);
}

#[test]
fn test_rust_log_enables_logging() {
    let file = fixture("file.py");
    let args = ["--file-path", file.as_str(), "--keyword", "func1"];

    let quiet = run_cli_with_log(&args, None);
    assert!(quiet.status.success());
    assert!(stderr(&quiet).is_empty(), "stderr: {}", stderr(&quiet));

    let verbose = run_cli_with_log(&args, Some("debug"));
    assert!(verbose.status.success());
    assert_eq!(stdout(&verbose), "func1\n");
    assert!(
        stderr(&verbose).contains("lowered python module"),
        "stderr: {}",
        stderr(&verbose)
    );
}
