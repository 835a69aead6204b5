//! CLI module for assertify
//!
//! Provides command-line interface for:
//! - generate: Emit validator source from a schema
//! - check: Validate one JSON record in-process

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, generate, run, run_command, CheckReport};
pub use config::{GeneratorConfig, DEFAULT_CONFIG_FILE};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_record, read_record, write_json, write_source};
