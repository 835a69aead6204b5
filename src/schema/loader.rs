//! Schema loader for reading schema documents from disk
//!
//! A schema path is either a single JSON file mapping type names to
//! property sets, or a directory of such files. Files in a directory are
//! read in file-name order so the resulting type order is deterministic.
//! A type declared in two files is rejected.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{GenerationError, SchemaResult};
use super::types::Schema;

/// Loads schemas from a file or directory.
pub struct SchemaLoader {
    /// File or directory containing schema documents
    path: PathBuf,
}

impl SchemaLoader {
    /// Creates a loader for the given file or directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the configured path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every schema document and merges them into one schema.
    pub fn load(&self) -> SchemaResult<Schema> {
        if !self.path.is_dir() {
            return Self::load_file(&self.path);
        }

        let entries = fs::read_dir(&self.path).map_err(|e| {
            GenerationError::malformed(format!(
                "failed to read schema directory '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| {
                    GenerationError::malformed(format!(
                        "failed to read directory entry in '{}': {}",
                        self.path.display(),
                        e
                    ))
                })?
                .path();

            // Skip non-JSON files
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            files.push(path);
        }
        files.sort();

        let mut merged = Schema::new();
        for path in &files {
            let schema = Self::load_file(path)?;
            for (name, properties) in schema.types() {
                merged.insert(name, properties.clone()).map_err(|e| {
                    GenerationError::malformed(format!("{}: {}", path.display(), e))
                })?;
            }
        }

        tracing::debug!(
            dir = %self.path.display(),
            files = files.len(),
            types = merged.len(),
            "loaded schema directory"
        );
        Ok(merged)
    }

    /// Loads a single schema file.
    fn load_file(path: &Path) -> SchemaResult<Schema> {
        let content = fs::read_to_string(path).map_err(|e| {
            GenerationError::malformed(format!(
                "failed to read schema file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let schema = Schema::from_json(&content).map_err(|e| {
            GenerationError::malformed(format!("{}: {}", path.display(), e))
        })?;

        tracing::debug!(file = %path.display(), types = schema.len(), "loaded schema file");
        Ok(schema)
    }

    /// Writes generated source next to the schema or at an explicit path.
    pub fn save_generated(path: &Path, source: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, source)
    }
}
