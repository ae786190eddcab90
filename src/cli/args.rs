//! Command line argument parsing for the wikisearch CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::query::Score;

/// wikisearch - boolean search over a term index
#[derive(Parser, Debug, Clone)]
#[command(name = "wikisearch")]
#[command(about = "Boolean search and relevance ranking over a term index")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct WikiSearchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Search configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WIKISEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WikiSearchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run a boolean query against an index
    Search(SearchArgs),

    /// List the terms of an index
    Terms(TermsArgs),

    /// Show two terms and their AND, OR and MINUS combinations
    Demo(DemoArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the index file (JSON)
    #[arg(value_name = "INDEX_FILE")]
    pub index_file: PathBuf,

    /// Query string, e.g. "java AND programming MINUS coffee"
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to show (highest scores are kept)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Minimum score threshold for results
    #[arg(long)]
    pub min_score: Option<Score>,

    /// Look up terms one at a time instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Keep the case of query terms
    #[arg(long)]
    pub case_sensitive: bool,
}

/// Arguments for listing terms
#[derive(Parser, Debug, Clone)]
pub struct TermsArgs {
    /// Path to the index file (JSON)
    #[arg(value_name = "INDEX_FILE")]
    pub index_file: PathBuf,
}

/// Arguments for the demo command
#[derive(Parser, Debug, Clone)]
pub struct DemoArgs {
    /// Path to the index file (JSON)
    #[arg(value_name = "INDEX_FILE")]
    pub index_file: PathBuf,

    /// First term
    #[arg(value_name = "TERM1", default_value = "java")]
    pub first: String,

    /// Second term
    #[arg(value_name = "TERM2", default_value = "programming")]
    pub second: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
