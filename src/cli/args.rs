//! CLI argument structures

use crate::config::OutputFormat;
use crate::core::Operation;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Apply small array transformations from the command line
#[derive(Parser, Debug)]
#[command(name = "arrayops")]
#[command(about = "arrayops - Small array transformations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (plain or json)
    #[arg(long, global = true)]
    pub output: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an operation over the given values
    #[command(allow_negative_numbers = true)]
    Run {
        /// Operation name (see `arrayops list`)
        operation: Operation,

        /// Input values; use `--` before text values starting with '-'
        #[arg(conflicts_with = "json")]
        values: Vec<String>,

        /// Input as a JSON array instead of positional values
        #[arg(long, value_name = "ARRAY")]
        json: Option<String>,
    },

    /// List available operations
    List,
}
