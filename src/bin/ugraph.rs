//! CLI entry point for the `ugraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use undirected_graph::cli::commands;
use undirected_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "ugraph",
    about = "Undirected graph tool — edge lists in, adjacency matrices out"
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
    /// Print the adjacency matrix of an edge list
    Matrix {
        /// Edge-list file; stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Print the 0-indexed adjacency lists of an edge list
    Lists {
        /// Edge-list file; stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Summarize an edge list
    Info {
        /// Edge-list file; stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Re-emit an edge list in normalized form
    Edges {
        /// Edge-list file; stdin when omitted or "-"
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Matrix { file } => commands::cmd_matrix(file.as_deref(), json),
        Commands::Lists { file } => commands::cmd_lists(file.as_deref(), json),
        Commands::Info { file } => commands::cmd_info(file.as_deref(), json),
        Commands::Edges { file } => commands::cmd_edges(file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            e if e.is_malformed() => 2,
            e if e.is_out_of_range() => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
