//! CLI command implementations
//!
//! Commands are thin wrappers: they load the schema and the record, hand
//! them to the library and print what comes back. Neither command carries
//! validation semantics of its own.

use std::path::Path;

use serde_json::Value;

use crate::emitter::EmitOptions;
use crate::logging::init_logging;
use crate::runtime::{Outcome, ValidateOptions};
use crate::schema::SchemaLoader;
use crate::validators::Validators;

use super::args::{Cli, Command};
use super::config::GeneratorConfig;
use super::errors::{CliError, CliResult};
use super::io::{read_record, write_json, write_source};

/// Parses arguments, installs logging and runs the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let config = GeneratorConfig::resolve(cli.config.as_deref())?;
    init_logging(cli.log_format.unwrap_or(config.log_format));
    run_command(cli.command, &config)
}

/// Run a CLI command
pub fn run_command(command: Command, config: &GeneratorConfig) -> CliResult<()> {
    match command {
        Command::Generate {
            schema,
            out,
            runtime_crate,
            no_header,
        } => {
            let mut options = config.emit_options();
            if let Some(runtime_crate) = runtime_crate {
                options.runtime_crate = runtime_crate;
            }
            if no_header {
                options.header = false;
            }

            let source = generate(&schema, &options)?;
            match out {
                Some(out) => {
                    SchemaLoader::save_generated(&out, &source).map_err(|e| {
                        CliError::io_error(format!("Failed to write {}: {}", out.display(), e))
                    })?;
                    tracing::info!(path = %out.display(), bytes = source.len(), "wrote validators");
                    Ok(())
                }
                None => write_source(&source),
            }
        }
        Command::Check {
            schema,
            type_name,
            data,
            verbose,
        } => {
            let record = read_record(data.as_deref())?;
            let report = check(&schema, &type_name, &record, verbose)?;
            write_json(&report.output)?;
            match report.failure {
                Some(message) => Err(CliError::validation_failed(message)),
                None => Ok(()),
            }
        }
    }
}

/// Loads a schema and renders its validators.
pub fn generate(schema: &Path, options: &EmitOptions) -> CliResult<String> {
    let schema = SchemaLoader::new(schema).load()?;
    let validators = Validators::new(&schema)?;

    tracing::info!(
        types = validators.compiled().len(),
        runtime_crate = %options.runtime_crate,
        "generating validators"
    );
    Ok(validators.emit(options)?)
}

/// What `check` prints, and why it failed if it did.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// The transformed record, the Validation Result, or the failing error
    pub output: Value,
    /// Failure message when the record is invalid
    pub failure: Option<String>,
}

/// Validates one record against a schema type.
pub fn check(
    schema: &Path,
    type_name: &str,
    record: &Value,
    verbose: bool,
) -> CliResult<CheckReport> {
    let schema = SchemaLoader::new(schema).load()?;
    let validators = Validators::new(&schema)?;
    let validator = validators
        .get(type_name)
        .ok_or_else(|| CliError::unknown_type(type_name))?;

    tracing::info!(type_name, verbose, "checking record");

    let options = ValidateOptions { verbose };
    match validator.validate(record, &options) {
        Ok(Outcome::Valid(value)) => Ok(CheckReport {
            output: value,
            failure: None,
        }),
        Ok(Outcome::Report(result)) => {
            let failure = (!result.is_valid)
                .then(|| format!("{} record failed {} check(s)", type_name, result.errors.len()));
            Ok(CheckReport {
                output: serde_json::to_value(&result)?,
                failure,
            })
        }
        Err(failure) => Ok(CheckReport {
            output: serde_json::to_value(failure.error())?,
            failure: Some(failure.to_string()),
        }),
    }
}
