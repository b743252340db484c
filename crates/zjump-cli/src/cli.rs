//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// zjump - jump to frequently and recently used directories
///
/// Reads the z database maintained by a shell tracking agent and ranks
/// matching directories by frecency.
#[derive(Parser, Debug)]
#[command(name = "zjump", version, about)]
pub struct Cli {
    /// Path to a TOML config file (built-in defaults are used when absent)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the database for directories matching a pattern
    Search {
        /// Case-insensitive regular expression matched against stored paths
        query: String,

        /// Override the configured maximum number of results
        #[arg(long)]
        max_results: Option<usize>,
    },
    /// Record a selection: bump the directory's rank and refresh its timestamp
    Select {
        /// Exact stored path of the chosen directory
        path: String,
    },
}
