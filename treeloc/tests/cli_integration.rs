//! Integration tests for treeloc CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::{tempdir, TempDir};

fn run_treeloc(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_treeloc"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn lines(n: usize) -> String {
    (0..n).map(|i| format!("{}\n", i)).collect()
}

/// A small project: 3 Go files (10 + 20 + 5 lines), one Markdown file
/// (40 lines), plus files the default rules skip.
fn create_project() -> TempDir {
    let temp = tempdir().unwrap();
    let root = temp.path();
    write_file(root, "cmd/main.go", &lines(10));
    write_file(root, "pkg/util.go", &lines(20));
    write_file(root, "pkg/small.go", &lines(5));
    write_file(root, "README.md", &lines(40));
    write_file(root, "go.sum", &lines(100));
    write_file(root, "node_modules/dep/index.js", &lines(1000));
    write_file(root, ".github/ci.yml", &lines(7));
    fs::write(root.join("logo.png"), [0x89, b'P', b'N', b'G', 0, 0, 0, 13]).unwrap();
    temp
}

#[test]
fn test_cli_help() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_treeloc(temp.path(), &["--help"]);

    assert!(success);
    assert!(stdout.contains("treeloc"));
    assert!(stdout.contains("--skip"));
    assert!(stdout.contains("--count"));
    assert!(stdout.contains("--include-hidden"));
    assert!(stdout.contains("--rank"));
}

#[test]
fn test_cli_version() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_treeloc(temp.path(), &["--version"]);

    assert!(success);
    assert!(stdout.contains("treeloc"));
}

#[test]
fn test_summary_output() {
    let project = create_project();
    let (stdout, _, success) = run_treeloc(project.path(), &[]);

    assert!(success);
    assert_eq!(stdout, "Files: 4\nLines: 75\nBytes: 190\n");
}

#[test]
fn test_path_option() {
    let project = create_project();
    let elsewhere = tempdir().unwrap();
    let root = project.path().to_str().unwrap();

    let (stdout, _, success) = run_treeloc(elsewhere.path(), &["--path", root]);

    assert!(success);
    assert!(stdout.starts_with("Files: 4\n"));
}

#[test]
fn test_count_filter() {
    let project = create_project();
    let (stdout, _, success) = run_treeloc(project.path(), &["--count", "go"]);

    assert!(success);
    assert!(stdout.contains("Files: 3\n"));
    assert!(stdout.contains("Lines: 35\n"));
}

#[test]
fn test_count_filter_overrides_default_skip_files() {
    let project = create_project();
    let (stdout, _, success) = run_treeloc(project.path(), &["--count", "sum,png"]);

    assert!(success);
    assert!(stdout.contains("Files: 2\n"));
    assert!(stdout.contains("Lines: 101\n"));
}

#[test]
fn test_skip_option() {
    let project = create_project();
    let (stdout, _, success) = run_treeloc(project.path(), &["--skip", "pkg,cmd"]);

    assert!(success);
    assert!(stdout.contains("Files: 1\n"));
    assert!(stdout.contains("Lines: 40\n"));
}

#[test]
fn test_include_hidden() {
    let project = create_project();
    let (stdout, _, success) = run_treeloc(project.path(), &["--include-hidden"]);

    assert!(success);
    assert!(stdout.contains("Files: 5\n"));
    assert!(stdout.contains("Lines: 82\n"));
}

#[test]
fn test_rank_output() {
    let project = create_project();
    let (stdout, _, success) = run_treeloc(project.path(), &["--rank"]);

    assert!(success);
    assert!(stdout.contains("\nTop 3 Files:\n"));
    assert!(stdout.contains("1. 40 lines  README.md\n"));
    assert!(stdout.contains("util.go\n"));
    assert!(stdout.contains("\nTop 3 Extensions (showing 2):\n"));
    assert!(stdout.contains("1. 40 lines  .md\n"));
    assert!(stdout.contains("2. 35 lines  .go\n"));
}

#[test]
fn test_rank_with_value_shows_shortfall() {
    let project = create_project();
    let (stdout, _, success) = run_treeloc(project.path(), &["--rank", "10"]);

    assert!(success);
    assert!(stdout.contains("Top 10 Files (showing 4):"));
    // line counts are right-aligned to the widest count
    assert!(stdout.contains("4.  5 lines  "));
}

#[test]
fn test_json_output() {
    let project = create_project();
    let (stdout, _, success) = run_treeloc(project.path(), &["--rank", "2", "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["files"], 4);
    assert_eq!(parsed["lines"], 75);
    assert_eq!(parsed["top_files"]["requested"], 2);
    assert_eq!(parsed["top_files"]["showing"], 2);
    assert_eq!(parsed["top_files"]["entries"][0]["path"], "README.md");
    assert_eq!(parsed["top_extensions"]["entries"][1]["extension"], ".go");
    assert_eq!(parsed["top_extensions"]["entries"][1]["files"], 3);
}

#[test]
fn test_invalid_rank_value() {
    let project = create_project();

    for bad in ["0", "-3", "many"] {
        let (stdout, stderr, success) = run_treeloc(project.path(), &["--rank", bad]);

        assert!(!success);
        assert!(stdout.is_empty());
        assert!(stderr.contains(&format!("error: invalid rank value: {}", bad)));
    }
}

#[test]
fn test_unexpected_arguments() {
    let project = create_project();

    let (_, stderr, success) = run_treeloc(project.path(), &["5"]);
    assert!(!success);
    assert!(stderr.contains("error: unexpected argument: 5"));

    let (_, stderr, success) = run_treeloc(project.path(), &["--rank", "5", "6"]);
    assert!(!success);
    assert!(stderr.contains("error: unexpected argument: 6"));
}

#[test]
fn test_invalid_path() {
    let temp = tempdir().unwrap();
    let (stdout, stderr, success) = run_treeloc(temp.path(), &["--path", "/nonexistent/path"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("error: path does not exist"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let project = create_project();
    let (stdout, stderr, success) = run_treeloc(project.path(), &["-vv"]);

    assert!(success);
    assert_eq!(stdout, "Files: 4\nLines: 75\nBytes: 190\n");
    assert!(stderr.contains("pruning"));
    assert!(stderr.contains("default-skip-file"));
}
