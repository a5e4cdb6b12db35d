//! Generator configuration
//!
//! Loaded from `entitygen.toml` when present. Every key is optional:
//!
//! ```toml
//! input_dir = "schemas"
//! input_extension = "csv"
//! output_dir = "out"
//! output_extension = "java"
//! on_read_error = "abort"   # or "skip"
//! log_level = "info"
//! ```

use crate::LogLevel;
use crate::descriptor::OutputLayout;
use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "entitygen.toml";

/// What to do when an input file cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadErrorPolicy {
    /// Fail the whole run on the first unreadable input
    #[default]
    Abort,
    /// Log a warning and continue with the remaining inputs
    Skip,
}

/// Configuration for a generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory scanned for input files
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Extension of input files, without the dot
    #[serde(default = "default_input_extension")]
    pub input_extension: String,

    /// Directory that is cleared and filled with generated files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Extension of generated files, without the dot
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    #[serde(default)]
    pub on_read_error: ReadErrorPolicy,

    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_input_extension() -> String {
    "csv".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_output_extension() -> String {
    "java".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            input_extension: default_input_extension(),
            output_dir: default_output_dir(),
            output_extension: default_output_extension(),
            on_read_error: ReadErrorPolicy::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML
    pub fn from_toml(content: &str) -> GenResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GenError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        Self::from_toml(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> GenResult<()> {
        validate_extension("input_extension", &self.input_extension)?;
        validate_extension("output_extension", &self.output_extension)?;

        if self.output_dir.as_os_str().is_empty() {
            return Err(GenError::Config("output_dir must not be empty".into()));
        }

        // The output directory is removed on every run, so it must not hold the inputs.
        let input = resolve_dir(&self.input_dir)?;
        let output = resolve_dir(&self.output_dir)?;
        if input.starts_with(&output) {
            return Err(GenError::Config(format!(
                "output_dir {} would remove input_dir {}",
                self.output_dir.display(),
                self.input_dir.display()
            )));
        }

        Ok(())
    }

    /// Output directory and extension for descriptors
    pub fn layout(&self) -> OutputLayout {
        OutputLayout::new(&self.output_dir, &self.output_extension)
    }
}

/// Absolute form of `dir`, following symlinks when it exists and folding
/// `.`/`..` lexically when it does not
fn resolve_dir(dir: &Path) -> GenResult<PathBuf> {
    if let Ok(canonical) = dir.canonicalize() {
        return Ok(canonical);
    }

    let absolute = std::path::absolute(dir).map_err(|e| {
        GenError::Config(format!("cannot resolve {}: {e}", dir.display()))
    })?;

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved.canonicalize().unwrap_or(resolved))
}

fn validate_extension(key: &str, extension: &str) -> GenResult<()> {
    if extension.is_empty() {
        return Err(GenError::Config(format!("{key} must not be empty")));
    }

    if extension.contains(['.', '/', '\\']) {
        return Err(GenError::Config(format!(
            "{key} must be a bare extension without dots or separators: {extension}"
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
