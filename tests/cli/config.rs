use crate::cli::support::{mazepath, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Config file tests
// ============================================================================

#[test]
fn test_config_file_sets_maze_and_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mazepath.toml");
    fs::write(
        &path,
        "[maze]\nwidth = 3\nheight = 2\nmin_weight = 3\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = mazepath()
        .arg("--config")
        .arg(&path)
        .args(["dijkstra", "--open"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["to"], serde_json::json!({ "x": 2, "y": 1 }));
    assert_eq!(json["cost"], 9);
}

#[test]
fn test_flags_override_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mazepath.toml");
    fs::write(&path, "[maze]\nwidth = 3\nheight = 2\n[output]\nformat = \"json\"\n").unwrap();

    let output = mazepath()
        .arg("--config")
        .arg(&path)
        .args(["--format", "records", "bfs", "--open", "--width", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout)
        .starts_with("H mazepath=1 records=1 mode=bfs width=2 height=2 "));
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[maze]\nwidth = 4\nheight = 1\n").unwrap();

    mazepath()
        .env("MAZEPATH_CONFIG_DIR", dir.path())
        .args(["-q", "bfs", "--open"])
        .assert()
        .success()
        .stdout("bfs 0,0 -> 3,0: visited 4 cells, target reached\n");
}

#[test]
fn test_unknown_config_key_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mazepath.toml");
    fs::write(&path, "[maze]\ndepth = 3\n").unwrap();

    mazepath()
        .arg("--config")
        .arg(&path)
        .arg("show")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("depth"));
}

#[test]
fn test_invalid_config_values_are_usage_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mazepath.toml");
    fs::write(&path, "[maze]\nmin_weight = 0\n").unwrap();

    mazepath()
        .arg("--config")
        .arg(&path)
        .arg("show")
        .assert()
        .code(2);
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();

    mazepath()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("show")
        .assert()
        .code(1);
}
