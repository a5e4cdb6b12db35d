//! Error types for entity generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum GenError {
    /// An input file could not be opened, read, or decoded as UTF-8
    #[error("failed to read input {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file name does not yield a schema identifier
    #[error("cannot derive a schema identifier from {}", path.display())]
    InvalidIdentifier { path: PathBuf },

    /// The input directory could not be listed
    #[error("failed to scan input directory {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be reset, or an artifact could not be written
    #[error("failed to write output {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is malformed
    #[error("invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl GenError {
    /// Returns the process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            GenError::InputRead { .. } => 2,
            GenError::InvalidIdentifier { .. } => 3,
            GenError::Discovery { .. } => 4,
            GenError::OutputWrite { .. } => 5,
            GenError::ConfigParse(_) => 6,
            GenError::Config(_) => 7,
        }
    }

    pub(crate) fn input_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::InputRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
