//! CLI argument definitions using clap
//!
//! Commands:
//! - assertify generate --schema <path> [--out <path>]
//! - assertify check --schema <path> --type <Name> [--data <path>] [--verbose]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Compiles record schemas into validator routines
#[derive(Parser, Debug)]
#[command(name = "assertify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to generator configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit Rust validator source for every type in a schema
    Generate {
        /// Schema file, or a directory of schema files
        #[arg(long)]
        schema: PathBuf,

        /// Write the source here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Crate path the generated code imports the runtime from
        #[arg(long)]
        runtime_crate: Option<String>,

        /// Omit the @generated header
        #[arg(long)]
        no_header: bool,
    },

    /// Validate one JSON record against a schema type
    Check {
        /// Schema file, or a directory of schema files
        #[arg(long)]
        schema: PathBuf,

        /// Type to validate against
        #[arg(long = "type")]
        type_name: String,

        /// Record file; stdin when absent
        #[arg(long)]
        data: Option<PathBuf>,

        /// Report every failing property instead of the first
        #[arg(long)]
        verbose: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
