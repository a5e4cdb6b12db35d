//! entitygen-core - Entity generation pipeline
//!
//! This crate turns CSV field definitions into Java entity classes:
//! - [`load_schemas`] reads input files into a [`SchemaSet`]
//! - [`build_descriptors`] resolves the three [`Variant`]s of each [`Schema`]
//! - [`render`] produces the class body for one [`EntityDescriptor`]
//! - [`OutputSink`] resets the output directory and writes the artifacts
//! - [`Generator`] wires the stages together from a [`GeneratorConfig`]

mod config;
mod descriptor;
mod discover;
mod error;
mod field;
mod loader;
mod pipeline;
mod render;
mod sink;
mod types;
mod variant;

pub use config::{CONFIG_FILE_NAME, GeneratorConfig, ReadErrorPolicy};
pub use descriptor::{EntityDescriptor, OutputLayout, build_descriptors};
pub use discover::discover_inputs;
pub use error::{GenError, GenResult};
pub use field::{Field, Schema};
pub use loader::{SchemaSet, load_schemas, parse_rows, schema_identifier};
pub use pipeline::{Artifact, Generator, RunSummary, build_artifacts, write_artifacts};
pub use render::render;
pub use sink::{FsSink, MemorySink, OutputSink, SinkEvent};
pub use types::translate_type;
pub use variant::Variant;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Log levels accepted by the configuration file and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Lowercase name, as used in filter directives
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(GenError::Config(format!("unknown log level: {other}"))),
        }
    }
}
