//! CLI entry point for the `agraph` command-line tool.

use std::io;
use std::process;

use clap::Parser;
use log::LevelFilter;

use adjacency_graph::cli::{Menu, OutputFormat};
use adjacency_graph::graph::AdjacencyGraph;
use adjacency_graph::types::{EdgePolicy, GraphConfig};

#[derive(Parser)]
#[command(
    name = "agraph",
    about = "agraph: interactive directed graph with adjacency lists and DFS"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Accept parallel edges instead of rejecting duplicates
    #[arg(long)]
    allow_parallel_edges: bool,

    /// Hide the menu listing and prompts (for piped input)
    #[arg(long, short)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = match OutputFormat::from_name(&cli.format) {
        Some(f) => f,
        None => {
            eprintln!("Invalid output format: {}", cli.format);
            process::exit(3);
        }
    };
    let policy = if cli.allow_parallel_edges {
        EdgePolicy::AllowParallel
    } else {
        EdgePolicy::Reject
    };
    log::debug!("starting with edge policy {policy}, format {format:?}");

    let graph = AdjacencyGraph::with_config(GraphConfig::with_edge_policy(policy));
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(graph, stdin.lock(), stdout.lock())
        .with_format(format)
        .quiet(cli.quiet);

    // Graph errors are rendered by the menu; only a broken stdin/stdout gets here.
    if let Err(e) = menu.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
