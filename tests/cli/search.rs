use crate::cli::support::{mazepath, record_lines, stderr_json, stdout_json};
use predicates::prelude::*;

// ============================================================================
// bfs / dfs / dijkstra command tests
// ============================================================================

#[test]
fn test_dijkstra_open_maze_json() {
    let output = mazepath()
        .args([
            "--format",
            "json",
            "dijkstra",
            "--open",
            "--width",
            "3",
            "--height",
            "2",
            "--min-weight",
            "2",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["from"], serde_json::json!({ "x": 0, "y": 0 }));
    assert_eq!(json["to"], serde_json::json!({ "x": 2, "y": 1 }));
    assert_eq!(json["cost"], 6);
    assert_eq!(json["reached"], true);
    assert_eq!(json["path"].as_array().unwrap().len(), 4);
    assert_eq!(json["finished"].as_array().unwrap().len(), 6);
    assert_eq!(json["visited"].as_array().unwrap().len(), 6);
}

#[test]
fn test_bfs_open_maze_records() {
    let output = mazepath()
        .args([
            "--format", "records", "bfs", "--open", "--width", "3", "--height", "2",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(
        "H mazepath=1 records=1 mode=bfs width=3 height=2 from=0,0 to=2,1 visited=6 reached=true\n"
    ));
    assert_eq!(
        record_lines(&output, "V "),
        ["0,0", "0,1", "1,0", "1,1", "2,0", "2,1"]
    );
    assert!(record_lines(&output, "P ").is_empty());
    assert!(record_lines(&output, "F ").is_empty());
}

#[test]
fn test_dfs_open_maze_records() {
    let output = mazepath()
        .args([
            "--format", "records", "dfs", "--open", "--width", "2", "--height", "2",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    // Right is pushed last, so it is explored first
    assert_eq!(record_lines(&output, "V "), ["0,0", "1,0", "1,1"]);
}

#[test]
fn test_seeded_search_is_reproducible() {
    let run = || {
        mazepath()
            .args(["--format", "json", "dijkstra", "--seed", "42"])
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    // A perfect maze reaches every one of the 10x8 default cells
    let json = stdout_json(&first);
    assert_eq!(json["finished"].as_array().unwrap().len(), 80);
    assert!(json["finished"]
        .as_array()
        .unwrap()
        .iter()
        .all(|cell| cell["cost"].is_u64()));
}

#[test]
fn test_each_algorithm_reaches_target_in_generated_maze() {
    for algorithm in ["bfs", "dfs", "dijkstra"] {
        let output = mazepath()
            .args([
                "--format", "json", algorithm, "--seed", "7", "--width", "6", "--height", "5",
                "--from", "2,2", "--to", "5,0",
            ])
            .output()
            .unwrap();

        assert!(output.status.success(), "{} failed", algorithm);
        let json = stdout_json(&output);
        assert_eq!(json["algorithm"], algorithm);
        assert_eq!(json["reached"], true);
        let visited = json["visited"].as_array().unwrap();
        assert_eq!(visited.first(), Some(&serde_json::json!({ "x": 2, "y": 2 })));
    }
}

#[test]
fn test_human_output_renders_maze() {
    mazepath()
        .args(["dijkstra", "--open", "--width", "2", "--height", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+---+---+"))
        .stdout(predicate::str::contains("| S   E |"))
        .stdout(predicate::str::contains(
            "dijkstra 0,0 -> 1,0: visited 2 cells, path 2 cells, cost 1",
        ));
}

#[test]
fn test_quiet_human_output_is_summary_only() {
    mazepath()
        .args(["-q", "bfs", "--open", "--width", "2", "--height", "1"])
        .assert()
        .success()
        .stdout("bfs 0,0 -> 1,0: visited 2 cells, target reached\n");
}

#[test]
fn test_invalid_dimensions_exit_code() {
    mazepath()
        .args(["bfs", "--width", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("width"));
}

#[test]
fn test_inverted_weight_range_exit_code() {
    mazepath()
        .args(["dijkstra", "--min-weight", "5", "--max-weight", "2"])
        .assert()
        .code(2);
}

#[test]
fn test_endpoint_outside_maze_exit_code() {
    for algorithm in ["bfs", "dfs", "dijkstra"] {
        mazepath()
            .args([algorithm, "--width", "3", "--height", "3", "--to", "7,7"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("not found"));
    }
}

#[test]
fn test_json_error_envelope() {
    let output = mazepath()
        .args(["--format", "json", "dijkstra", "--width", "3", "--from", "9,0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "vertex_not_found");
}

#[test]
fn test_json_envelope_for_parse_errors() {
    let output = mazepath()
        .args(["--format", "json", "bfs", "--bogus"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_seed_with_open_maze_is_usage_error() {
    mazepath()
        .args(["bfs", "--open", "--seed", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--seed"));
}
