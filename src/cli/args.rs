//! Command line argument parsing for the synoverlap CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::synonym::dictionary::SynonymFormat;

/// synoverlap - synonym-aware tuple overlap between two documents
#[derive(Parser, Debug, Clone)]
#[command(name = "synoverlap")]
#[command(about = "Measure synonym-aware word tuple overlap between two documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SynOverlapArgs {
    /// Synonym file (one group of space-separated words per line)
    #[arg(value_name = "SYNONYMS")]
    pub synonyms: PathBuf,

    /// Suspected plagiarized document
    #[arg(value_name = "PLAGIARIZED")]
    pub plagiarized: PathBuf,

    /// Source document
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Number of words per tuple
    #[arg(value_name = "TUPLE_SIZE", value_parser = clap::value_parser!(u64).range(1..))]
    pub tuple_size: Option<u64>,

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

    /// Synonym file format
    #[arg(long, value_name = "FORMAT")]
    pub synonym_format: Option<SynonymFileFormat>,

    /// Reject synonym files where a word belongs to more than one group
    #[arg(long)]
    pub strict_synonyms: bool,

    /// Fail when a tuple expands to more than this many variants
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_variants: Option<u64>,

    /// Match tuples on a thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Thread pool size for --parallel (default: number of CPUs)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub threads: Option<u64>,

    /// JSON matching configuration; explicit flags take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SynOverlapArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Output formats available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The percentage on a single line
    Human,
    /// The full report as JSON
    Json,
}

/// Synonym file formats accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynonymFileFormat {
    /// One group per line
    Lines,
    /// A JSON array of arrays of words
    Json,
}

impl From<SynonymFileFormat> for SynonymFormat {
    fn from(format: SynonymFileFormat) -> Self {
        match format {
            SynonymFileFormat::Lines => SynonymFormat::Lines,
            SynonymFileFormat::Json => SynonymFormat::Json,
        }
    }
}
