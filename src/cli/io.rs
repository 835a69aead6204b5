//! Record input and JSON output for the CLI
//!
//! - Input: one JSON document from a file or stdin
//! - Output: pretty-printed JSON on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read a JSON record from `path`, or stdin when absent
pub fn read_record(path: Option<&Path>) -> CliResult<Value> {
    let text = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            CliError::io_error(format!("Failed to read record {}: {}", path.display(), e))
        })?,
        None => {
            let mut text = String::new();
            io::stdin().lock().read_to_string(&mut text)?;
            text
        }
    };

    parse_record(&text)
}

/// Parse record text
pub fn parse_record(text: &str) -> CliResult<Value> {
    if text.trim().is_empty() {
        return Err(CliError::invalid_input("Empty input"));
    }
    serde_json::from_str(text)
        .map_err(|e| CliError::invalid_input(format!("Record is not valid JSON: {}", e)))
}

/// Write a JSON value to stdout
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write generated source to stdout
pub fn write_source(source: &str) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(source.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
