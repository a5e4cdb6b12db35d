//! Input discovery

use crate::error::{GenError, GenResult};
use std::fs;
use std::path::{Path, PathBuf};

/// List the input files in `dir` with the given extension.
///
/// Non-recursive. Hidden files (leading `.`) are ignored, matching shell glob
/// behavior. The result is sorted by path so that identifier collisions and
/// output order are the same on every platform.
pub fn discover_inputs(dir: &Path, extension: &str) -> GenResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| GenError::Discovery {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| GenError::Discovery {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_file() && has_extension(&path, extension) && !is_hidden(&path) {
            inputs.push(path);
        }
    }

    inputs.sort();
    Ok(inputs)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
