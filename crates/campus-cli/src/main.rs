//! Campus navigator CLI.
//!
//! Provides the `campus` binary with subcommands that run the same
//! operations as the HTTP server against the predefined campus map and
//! print JSON to stdout.

use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use campus_core::{campus_graph, CampusGraph, NodeId};
use campus_route::{find_path, search_locations, sort_by_distance, PathReport};

/// Campus navigator: shortest paths, search and distance sorting.
#[derive(Parser)]
#[command(name = "campus", about = "Campus navigator tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the campus map as JSON.
    Graph,

    /// Compute the shortest path between two locations.
    Path {
        /// Start location: id or name.
        #[arg(short, long)]
        start: String,

        /// Destination: id or name.
        #[arg(short, long)]
        end: String,

        /// Print the step-by-step trace as text instead of JSON.
        #[arg(long)]
        trace: bool,
    },

    /// Search locations by name or category.
    Search {
        /// Search text.
        query: String,
    },

    /// Rank locations by straight-line distance from a reference.
    Sort {
        /// Reference location: id or name.
        #[arg(short, long)]
        reference: String,
    },
}

#[derive(Serialize)]
struct GraphOutput<'a> {
    nodes: &'a [campus_core::Location],
    edges: &'a [campus_core::Path],
}

fn main() {
    let cli = Cli::parse();
    let graph = campus_graph();

    let exit_code = match cli.command {
        Commands::Graph => print_json(&GraphOutput {
            nodes: graph.locations(),
            edges: graph.paths(),
        }),
        Commands::Path { start, end, trace } => run_path(&graph, &start, &end, trace),
        Commands::Search { query } => print_json(&search_locations(&graph, &query)),
        Commands::Sort { reference } => match resolve(&graph, &reference) {
            Ok(id) => match sort_by_distance(&graph, id) {
                Ok(report) => print_json(&report),
                Err(e) => fail(&e.to_string()),
            },
            Err(msg) => fail(&msg),
        },
    };
    process::exit(exit_code);
}

/// Execute the path subcommand.
///
/// Returns exit code: 0 = path found, 1 = invalid location,
/// 2 = destination unreachable.
fn run_path(graph: &CampusGraph, start: &str, end: &str, trace: bool) -> i32 {
    let (start, end) = match (resolve(graph, start), resolve(graph, end)) {
        (Ok(s), Ok(e)) => (s, e),
        (Err(msg), _) | (_, Err(msg)) => return fail(&msg),
    };

    let report = match find_path(graph, start, end) {
        Ok(report) => report,
        Err(e) => return fail(&e.to_string()),
    };

    let code = if trace {
        print!("{}", render_trace(graph, &report));
        0
    } else {
        print_json(&report)
    };

    if report.is_reachable() {
        code
    } else {
        eprintln!("No path from {} to {}", report.start_name, report.end_name);
        2
    }
}

/// Resolves a location given as an id or as a name (case-insensitive).
fn resolve(graph: &CampusGraph, arg: &str) -> Result<NodeId, String> {
    if let Ok(raw) = arg.trim().parse::<u32>() {
        return Ok(NodeId(raw));
    }
    let report = search_locations(graph, arg);
    report
        .exact
        .ok_or_else(|| format!("unknown location '{}'", arg.trim()))
}

/// Renders a report as a numbered, human-readable step listing.
fn render_trace(graph: &CampusGraph, report: &PathReport) -> String {
    let name = |id: NodeId| {
        graph
            .location(id)
            .map(|loc| loc.name.as_str())
            .unwrap_or("?")
    };

    let mut out = String::new();
    for step in &report.steps {
        out.push_str(&format!("[{:>3}] {}\n      {}\n", step.step, step.action, step.explanation));
        let queue: Vec<&str> = step.queue.iter().map(|&id| name(id)).collect();
        out.push_str(&format!("      queue: [{}]\n", queue.join(", ")));
    }

    match report.distance {
        Some(distance) => {
            let path: Vec<&str> = report.path.iter().map(|&id| name(id)).collect();
            out.push_str(&format!("\n{} ({}m)\n", path.join(" -> "), distance));
        }
        None => out.push_str(&format!(
            "\n{} is unreachable from {}\n",
            report.end_name, report.start_name
        )),
    }
    out
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => fail(&format!("failed to serialize result: {}", e)),
    }
}

fn fail(msg: &str) -> i32 {
    eprintln!("Error: {}", msg);
    1
}
