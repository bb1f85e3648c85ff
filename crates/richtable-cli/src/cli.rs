//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// richtable: typed rendering of rich table cells
#[derive(Parser)]
#[command(name = "richtable")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a single JSON value into a content variant
    Classify {
        /// JSON value to classify, or "-" to read stdin
        #[arg(value_name = "VALUE")]
        value: String,

        /// Truncate display text longer than this many characters
        #[arg(long)]
        max_length: Option<usize>,
    },

    /// Resolve a table definition file into typed rows
    Resolve {
        /// Path to the table definition (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Skip unresolvable rows and report them instead of failing
        #[arg(long)]
        collect: bool,

        /// Truncate display text longer than this many characters
        #[arg(long)]
        max_length: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    /// Field delimiter for flat exports.
    pub fn delimiter(self) -> Option<u8> {
        match self {
            OutputFormat::Json => None,
            OutputFormat::Csv => Some(b','),
            OutputFormat::Tsv => Some(b'\t'),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Tsv => write!(f, "tsv"),
        }
    }
}
