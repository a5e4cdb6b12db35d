//! Output sinks
//!
//! A sink is reset once, then receives every artifact. [`FsSink`] writes to
//! disk; [`MemorySink`] records everything for inspection.

use crate::error::{GenError, GenResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Destination for rendered artifacts
pub trait OutputSink {
    /// Remove any previous output and prepare an empty destination
    fn reset(&mut self) -> GenResult<()>;

    /// Write one artifact, replacing any existing file at `path`
    fn write(&mut self, path: &Path, contents: &str) -> GenResult<()>;
}

/// Writes artifacts to the filesystem under a root directory
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for FsSink {
    fn reset(&mut self) -> GenResult<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root).map_err(|e| GenError::output_write(&self.root, e))?;
            debug!(dir = %self.root.display(), "Removed previous output");
        }

        fs::create_dir_all(&self.root).map_err(|e| GenError::output_write(&self.root, e))
    }

    fn write(&mut self, path: &Path, contents: &str) -> GenResult<()> {
        fs::write(path, contents).map_err(|e| GenError::output_write(path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "Wrote artifact");
        Ok(())
    }
}

/// One call received by a [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Reset,
    Write(PathBuf),
}

/// Keeps artifacts in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>,
    events: Vec<SinkEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &BTreeMap<PathBuf, String> {
        &self.files
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Calls received so far, in order
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }
}

impl OutputSink for MemorySink {
    fn reset(&mut self) -> GenResult<()> {
        self.files.clear();
        self.events.push(SinkEvent::Reset);
        Ok(())
    }

    fn write(&mut self, path: &Path, contents: &str) -> GenResult<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        self.events.push(SinkEvent::Write(path.to_path_buf()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "sink/sink_tests.rs"]
mod sink_tests;
