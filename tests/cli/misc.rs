use crate::cli::support::mazepath;
use predicates::prelude::*;

// ============================================================================
// Help, version and exit code tests
// ============================================================================

#[test]
fn test_help_flag() {
    mazepath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: mazepath"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("bfs"))
        .stdout(predicate::str::contains("dfs"))
        .stdout(predicate::str::contains("dijkstra"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_subcommand_help_lists_maze_flags() {
    mazepath()
        .args(["dijkstra", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--width"))
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--to"));
}

#[test]
fn test_version_flag() {
    mazepath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mazepath"));
}

#[test]
fn test_no_command_prints_banner() {
    mazepath()
        .assert()
        .success()
        .stdout(predicate::str::contains("mazepath --help"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    mazepath().arg("astar").assert().code(2);
}

#[test]
fn test_unknown_format_is_usage_error() {
    mazepath()
        .args(["--format", "yaml", "show"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("yaml"));
}

#[test]
fn test_malformed_endpoint_is_usage_error() {
    mazepath()
        .args(["bfs", "--from", "north"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("north"));
}
