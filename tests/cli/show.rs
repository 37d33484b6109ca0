use crate::cli::support::{mazepath, record_lines, stdout_json};
use predicates::prelude::*;

// ============================================================================
// show command tests
// ============================================================================

#[test]
fn test_show_open_maze_human() {
    mazepath()
        .args(["show", "--open", "--width", "2", "--height", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "+---+---+\n| S     |\n+   +   +\n|     E |\n+---+---+\n",
        ))
        .stdout(predicate::str::contains("2x2 maze, 4 open passages, 8 edges"));
}

#[test]
fn test_show_records_lists_edges() {
    let output = mazepath()
        .args([
            "--format", "records", "show", "--open", "--width", "2", "--height", "1",
            "--min-weight", "4",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with(
        "H mazepath=1 records=1 mode=show width=2 height=1 passages=1 edges=2\n"
    ));
    assert_eq!(record_lines(&output, "E "), ["0,0 1,0 4", "1,0 0,0 4"]);
}

#[test]
fn test_show_generated_maze_json() {
    let output = mazepath()
        .args(["--format", "json", "show", "--seed", "5", "--width", "7", "--height", "4"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["width"], 7);
    assert_eq!(json["height"], 4);
    assert_eq!(json["vertices"], 28);
    // Perfect maze: one passage fewer than cells, each an edge both ways
    assert_eq!(json["open_passages"], 27);
    assert_eq!(json["edges"].as_array().unwrap().len(), 54);
    for edge in json["edges"].as_array().unwrap() {
        let weight = edge["weight"].as_u64().unwrap();
        assert!((1..=9).contains(&weight));
    }
}

#[test]
fn test_show_quiet_prints_summary_only() {
    mazepath()
        .args(["-q", "show", "--open", "--width", "2", "--height", "2"])
        .assert()
        .success()
        .stdout("2x2 maze, 4 open passages, 8 edges\n");
}

#[test]
fn test_show_rejects_oversized_maze() {
    mazepath()
        .args(["show", "--width", "4294967295", "--height", "4294967295"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("maze size"));

    mazepath()
        .args(["show", "--open", "--width", "4294967295", "--height", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("maze size"));
}
