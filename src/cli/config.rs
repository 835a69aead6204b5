//! Generator configuration
//!
//! Read from `assertify.json` in the working directory, or from the file
//! `--config` names. Every field is optional:
//!
//! ```json
//! { "runtime_crate": "assertify", "header": true, "log_format": "text" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::emitter::{EmitOptions, DEFAULT_RUNTIME_CRATE};
use crate::logging::LogFormat;

use super::errors::{CliError, CliResult};

/// Config file looked up when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "assertify.json";

/// Generator configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Crate path generated code imports the runtime from
    #[serde(default = "default_runtime_crate")]
    pub runtime_crate: String,

    /// Prepend the @generated header (default true)
    #[serde(default = "default_header")]
    pub header: bool,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_runtime_crate() -> String {
    DEFAULT_RUNTIME_CRATE.to_string()
}

fn default_header() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_crate: default_runtime_crate(),
            header: default_header(),
            log_format: LogFormat::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: GeneratorConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Resolves the config for a run.
    ///
    /// An explicit path must exist. Without one, `assertify.json` in the
    /// working directory is used when present, defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> CliResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if !is_crate_path(&self.runtime_crate) {
            return Err(CliError::config_error(format!(
                "Invalid runtime_crate: '{}'. Expected a Rust path like 'assertify' or 'crate::validation'.",
                self.runtime_crate
            )));
        }
        Ok(())
    }

    /// Emitter options this config selects
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            runtime_crate: self.runtime_crate.clone(),
            header: self.header,
        }
    }
}

/// `ident(::ident)*`, each segment ASCII and not starting with a digit.
fn is_crate_path(path: &str) -> bool {
    !path.is_empty()
        && path.split("::").all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
                }
                _ => false,
            }
        })
}
