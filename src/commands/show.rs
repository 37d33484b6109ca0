//! `mazepath show` - print a maze and its graph without searching

use serde_json::json;

use crate::cli::{MazeArgs, OutputFormat};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::dispatch::trace_command;
use mazepath_core::error::Result;
use mazepath_core::maze::{build_maze_graph, render, GridMaze, Juncture, Maze, MazeGraph, Overlay};

/// Execute the show command
pub fn execute(ctx: &CommandContext, args: &MazeArgs) -> Result<()> {
    let maze = args.build(ctx.config)?;
    let graph = build_maze_graph(&maze)?;

    trace_command!(ctx.cli, ctx.start, "build_maze");

    match ctx.format() {
        OutputFormat::Json => {
            let edges: Vec<_> = edges(&graph)
                .into_iter()
                .map(|(from, to, weight)| json!({ "from": from, "to": to, "weight": weight }))
                .collect();
            let output = json!({
                "width": maze.width(),
                "height": maze.height(),
                "open_passages": maze.open_passages(),
                "vertices": graph.vertex_count(),
                "edges": edges,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            print!("{}", records(&maze, &graph));
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                let corner = Juncture::new(maze.width() - 1, maze.height() - 1);
                let overlay = Overlay::new().with_endpoints(Juncture::new(0, 0), corner);
                print!("{}", render(&maze, &overlay));
            }
            println!("{}", summary(&maze, &graph));
        }
    }

    Ok(())
}

/// Every directed edge in vertex insertion order
fn edges(graph: &MazeGraph) -> Vec<(Juncture, Juncture, u32)> {
    graph
        .vertices()
        .flat_map(|cell| {
            graph
                .neighbors(cell)
                .into_iter()
                .flatten()
                .map(move |(neighbor, weight)| (*cell, *neighbor, weight))
        })
        .collect()
}

fn summary(maze: &GridMaze, graph: &MazeGraph) -> String {
    format!(
        "{}x{} maze, {} open passages, {} edges",
        maze.width(),
        maze.height(),
        maze.open_passages(),
        graph.edge_count()
    )
}

/// `H` header then one `E from to weight` line per directed edge
fn records(maze: &GridMaze, graph: &MazeGraph) -> String {
    let mut out = format!(
        "H mazepath=1 records=1 mode=show width={} height={} passages={} edges={}\n",
        maze.width(),
        maze.height(),
        maze.open_passages(),
        graph.edge_count()
    );
    for (from, to, weight) in edges(graph) {
        out.push_str(&format!("E {} {} {}\n", from, to, weight));
    }
    out
}
