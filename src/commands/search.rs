//! `mazepath bfs|dfs|dijkstra` - search a maze between two cells
//!
//! The maze is turned into a graph with a recording observer and a tracing
//! observer attached. Output is built from what the recording observer saw.

use std::fmt;

use serde::Serialize;

use crate::cli::{OutputFormat, SearchArgs};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::dispatch::trace_command;
use mazepath_core::error::{MazepathError, Result};
use mazepath_core::graph::{EventLog, RecordingObserver, TracingObserver};
use mazepath_core::maze::{build_maze_graph, render, GridMaze, Juncture, Maze, Overlay};

/// Search algorithm selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

/// Cell finished by Dijkstra; `cost` is `None` when it was unreachable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinishedCell {
    pub cell: Juncture,
    pub cost: Option<u64>,
}

/// Everything a search produced, in output order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub from: Juncture,
    pub to: Juncture,
    pub reached: bool,
    pub visited: Vec<Juncture>,
    pub path: Option<Vec<Juncture>>,
    pub cost: Option<u64>,
    pub finished: Vec<FinishedCell>,
}

/// Execute a search command
pub fn execute(ctx: &CommandContext, algorithm: Algorithm, args: &SearchArgs) -> Result<()> {
    let settings = args.maze.settings(ctx.config);
    let maze = args.maze.build(ctx.config)?;
    let (from, to) = args.endpoints(&settings);

    trace_command!(ctx.cli, ctx.start, "build_maze");

    let report = run(&maze, algorithm, from, to)?;

    trace_command!(ctx.cli, ctx.start, "search");

    match ctx.format() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Records => {
            print!("{}", records(&report, &maze));
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                print!("{}", render(&maze, &overlay(&report)));
            }
            println!("{}", summary(&report));
        }
    }

    Ok(())
}

/// Search `maze` from `from` to `to`; both must be cells of the maze
pub fn run(
    maze: &GridMaze,
    algorithm: Algorithm,
    from: Juncture,
    to: Juncture,
) -> Result<SearchReport> {
    for cell in [from, to] {
        if !maze.contains(cell) {
            return Err(MazepathError::vertex_not_found(&cell));
        }
    }

    let mut graph = build_maze_graph(maze)?;
    let log = EventLog::new();
    graph.add_observer(Box::new(RecordingObserver::with_log(log.clone())));
    graph.add_observer(Box::new(TracingObserver::new()));

    let mut report = SearchReport {
        algorithm,
        from,
        to,
        reached: false,
        visited: Vec::new(),
        path: None,
        cost: None,
        finished: Vec::new(),
    };

    match algorithm {
        Algorithm::Bfs | Algorithm::Dfs => {
            let outcome = if algorithm == Algorithm::Bfs {
                graph.bfs(&from, &to)?
            } else {
                graph.dfs(&from, &to)?
            };
            report.reached = outcome.reached_end;
            report.visited = log.visits();
        }
        Algorithm::Dijkstra => {
            let shortest = graph.dijkstra(&from, &to)?;
            report.reached = true;
            report.cost = Some(shortest.cost);
            report.path = log.path();
            report.finished = log
                .finished()
                .into_iter()
                .map(|(cell, cost)| FinishedCell {
                    cell,
                    cost: cost.value(),
                })
                .collect();
            report.visited = report
                .finished
                .iter()
                .filter(|finished| finished.cost.is_some())
                .map(|finished| finished.cell)
                .collect();
        }
    }

    tracing::debug!(
        algorithm = %algorithm,
        from = %from,
        to = %to,
        visited = report.visited.len(),
        reached = report.reached,
        "search_complete"
    );

    Ok(report)
}

fn overlay(report: &SearchReport) -> Overlay {
    Overlay::new()
        .with_endpoints(report.from, report.to)
        .with_visited(&report.visited)
        .with_path(report.path.iter().flatten())
}

fn summary(report: &SearchReport) -> String {
    let mut line = format!(
        "{} {} -> {}: visited {} cells",
        report.algorithm,
        report.from,
        report.to,
        report.visited.len(),
    );
    match (&report.path, report.cost) {
        (Some(path), Some(cost)) => {
            line.push_str(&format!(", path {} cells, cost {}", path.len(), cost));
        }
        _ if report.reached => line.push_str(", target reached"),
        _ => line.push_str(", target not reached"),
    }
    line
}

/// Line-oriented output: one `H` header, then `V` visits, `F` finished
/// cells and `P` path cells
fn records(report: &SearchReport, maze: &dyn Maze) -> String {
    let mut out = format!(
        "H mazepath=1 records=1 mode={} width={} height={} from={} to={} visited={} reached={}",
        report.algorithm,
        maze.width(),
        maze.height(),
        report.from,
        report.to,
        report.visited.len(),
        report.reached,
    );
    if let Some(cost) = report.cost {
        out.push_str(&format!(" cost={}", cost));
    }
    out.push('\n');

    for cell in &report.visited {
        out.push_str(&format!("V {}\n", cell));
    }
    for finished in &report.finished {
        match finished.cost {
            Some(cost) => out.push_str(&format!("F {} {}\n", finished.cell, cost)),
            None => out.push_str(&format!("F {} inf\n", finished.cell)),
        }
    }
    for cell in report.path.iter().flatten() {
        out.push_str(&format!("P {}\n", cell));
    }
    out
}
