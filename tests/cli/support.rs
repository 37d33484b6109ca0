use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;
use std::process::Output;

/// Get a Command for mazepath that ignores any user config file
pub fn mazepath() -> Command {
    let mut cmd = cargo_bin_cmd!("mazepath");
    cmd.env(
        "MAZEPATH_CONFIG_DIR",
        Path::new(env!("CARGO_TARGET_TMPDIR")).join("no-config"),
    )
    .env_remove("MAZEPATH_LOG")
    .env_remove("MAZEPATH_LOG_LEVEL")
    .env_remove("RUST_LOG");
    cmd
}

/// Parse stdout as JSON
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

/// Parse stderr as JSON
pub fn stderr_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).expect("stderr is not valid JSON")
}

/// Lines of stdout starting with `prefix`, prefix stripped
pub fn record_lines(output: &Output, prefix: &str) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(|line| line.strip_prefix(prefix))
        .map(str::to_string)
        .collect()
}
