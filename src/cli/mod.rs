//! CLI argument parsing for algoviz
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --no-animate, --delay

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};

pub use algoviz_core::format::OutputFormat;
pub use args::{PathArgs, PathTarget, SortArgs, SortTarget};
use parse::parse_output_format;

/// Algoviz - watch sorting and pathfinding algorithms work, one step at a time
#[derive(Parser, Debug)]
#[command(name = "algoviz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json)
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. info, debug, algoviz_core=trace)
    #[arg(long, global = true, env = "ALGOVIZ_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Run without animation or delays and print only the final state
    #[arg(long, global = true)]
    pub no_animate: bool,

    /// Milliseconds between animation steps (10-1000)
    #[arg(long, global = true)]
    pub delay: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort an array with one or all of the sorting algorithms
    Sort(SortArgs),

    /// Search a grid from start to end with BFS, DFS or Dijkstra
    Path(PathArgs),

    /// Show the effective configuration and where it was read from
    Config,
}
