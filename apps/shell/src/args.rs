//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use geoq::domain::relation::RelationCategory;
use geoq::features::fewshot::Language;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "geoq")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Normalize extracted geographic queries into executable spatial queries")]
pub struct Cli {
    /// Configuration file (toml/json/yaml); `GEOQ__*` environment variables override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off); overrides the configuration
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the spatial relation catalogue
    Relations {
        /// Only list relation names of this category
        #[arg(long)]
        category: Option<RelationCategory>,
    },
    /// Print the full priming text for the extraction oracle
    Prompt {},
    /// Render the few-shot examples
    Examples {
        #[arg(long)]
        language: Option<Language>,
        #[arg(long)]
        category: Option<RelationCategory>,
    },
    /// Enrich and validate a candidate query (JSON) and print the result
    Validate {
        /// Candidate JSON file, or '-' for stdin
        input: String,
        /// Minimum overall confidence (0-1)
        #[arg(long)]
        threshold: Option<f64>,
        /// Fail instead of warning on low confidence
        #[arg(long)]
        strict: bool,
    },
}
