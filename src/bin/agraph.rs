//! CLI entry point for the `agraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use attr_graph::cli::commands;
use attr_graph::{GraphError, DEFAULT_DISTANCE_ATTRIBUTE};

#[derive(Parser)]
#[command(
    name = "agraph",
    about = "agraph CLI — inspect and search attribute-tagged graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a graph file
    Info {
        /// Path to the JSON graph file
        file: PathBuf,
    },
    /// Run breadth-first search from a root node
    Bfs {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Root node ID
        root: String,
        /// Attribute receiving the hop distance
        #[arg(long, default_value = DEFAULT_DISTANCE_ATTRIBUTE)]
        attr: String,
    },
    /// List nodes in ascending order of an attribute
    Order {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Attribute to order by
        attr: String,
        /// Maximum nodes to show
        #[arg(long, default_value = "100")]
        limit: usize,
    },
    /// Check whether two nodes share an edge
    Connected {
        /// Path to the JSON graph file
        file: PathBuf,
        /// First node ID
        source: String,
        /// Second node ID
        target: String,
    },
    /// List the neighbours of a node
    Adjacent {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Node ID
        node_id: String,
    },
    /// Re-emit the graph as normalized JSON
    Export {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = match cli.format.as_str() {
        "json" => true,
        "text" => false,
        other => {
            eprintln!("Invalid output format: {}", other);
            process::exit(3);
        }
    };

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Bfs { file, root, attr } => commands::cmd_bfs(&file, &root, &attr, json),
        Commands::Order { file, attr, limit } => commands::cmd_order(&file, &attr, limit, json),
        Commands::Connected {
            file,
            source,
            target,
        } => commands::cmd_connected(&file, &source, &target, json),
        Commands::Adjacent { file, node_id } => commands::cmd_adjacent(&file, &node_id, json),
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_)
            | GraphError::UnknownGraphType(_)
            | GraphError::InvalidNodeId(_)
            | GraphError::InvalidAttributeValue { .. }
            | GraphError::NonFiniteValue { .. } => 2,
            GraphError::NodeNotFound(_) | GraphError::UnknownNode(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
