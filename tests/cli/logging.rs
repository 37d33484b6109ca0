use crate::cli::support::mazepath;
use predicates::prelude::*;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_verbose_logs_search_progress() {
    mazepath()
        .args(["-v", "dijkstra", "--open", "--width", "2", "--height", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search_begun"))
        .stderr(predicate::str::contains("search_complete"));
}

#[test]
fn test_default_level_is_quiet() {
    mazepath()
        .args(["bfs", "--open", "--width", "2", "--height", "2"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = mazepath()
        .args([
            "--log-level", "debug", "--log-json", "bfs", "--open", "--width", "2", "--height",
            "1",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.is_empty());
    for line in stderr.lines() {
        serde_json::from_str::<serde_json::Value>(line).expect("log line is not JSON");
    }
}

#[test]
fn test_log_env_var_overrides_verbose() {
    mazepath()
        .env("MAZEPATH_LOG", "off")
        .args(["-v", "bfs", "--open", "--width", "2", "--height", "1"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
