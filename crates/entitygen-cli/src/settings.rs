//! Configuration resolution: file, then command-line overrides

use crate::Overrides;
use anyhow::{Context, Result};
use entitygen_core::{CONFIG_FILE_NAME, GeneratorConfig, ReadErrorPolicy};
use std::path::{Path, PathBuf};

/// Configuration plus where it came from
#[derive(Debug, Clone)]
pub struct Resolved {
    pub config: GeneratorConfig,
    pub source: Option<PathBuf>,
}

/// Resolve configuration relative to the current directory
pub fn resolve(overrides: &Overrides) -> Result<Resolved> {
    resolve_in(Path::new("."), overrides)
}

/// Resolve configuration relative to `base`.
///
/// An explicit `--config` must exist. Otherwise `entitygen.toml` in `base` is
/// used when present, and defaults apply when it is not.
pub fn resolve_in(base: &Path, overrides: &Overrides) -> Result<Resolved> {
    let source = match &overrides.config {
        Some(path) => Some(path.clone()),
        None => {
            let default = base.join(CONFIG_FILE_NAME);
            default.is_file().then_some(default)
        }
    };

    let mut config = match &source {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    apply_overrides(&mut config, overrides);
    config.validate()?;

    Ok(Resolved { config, source })
}

fn apply_overrides(config: &mut GeneratorConfig, overrides: &Overrides) {
    if let Some(dir) = &overrides.input_dir {
        config.input_dir = dir.clone();
    }
    if let Some(dir) = &overrides.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(level) = overrides.log_level {
        config.log_level = level;
    }
    if overrides.skip_unreadable {
        config.on_read_error = ReadErrorPolicy::Skip;
    }
}
