use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Rename TMDB report files by pattern and embedded date
#[derive(Parser, Debug)]
#[command(name = "renombra")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Print debug diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename the report files in a directory and move unknown files to manual review
    Run {
        /// Directory holding the report files
        directory: PathBuf,

        /// Show what would be renamed or moved without changing anything
        #[arg(long)]
        dry_run: bool,

        /// Don't replace underscores with spaces before matching
        #[arg(long)]
        skip_normalize: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Only print the final summary
        #[arg(long)]
        quiet: bool,
    },

    /// Show how file names would be renamed, without touching the filesystem
    Check {
        /// File names to check
        #[arg(required = true)]
        names: Vec<String>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
