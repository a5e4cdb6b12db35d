//! Plan command implementation

use anyhow::{Context, Result};
use entitygen_core::{Artifact, Generator, GeneratorConfig, Variant};
use serde::Serialize;
use std::path::Path;

/// One planned output file, as printed with `--json`
#[derive(Debug, Serialize)]
pub struct PlanEntry<'a> {
    pub identifier: &'a str,
    pub variant: Variant,
    pub class_name: &'a str,
    pub path: &'a Path,
}

impl<'a> From<&'a Artifact> for PlanEntry<'a> {
    fn from(artifact: &'a Artifact) -> Self {
        Self {
            identifier: &artifact.identifier,
            variant: artifact.variant,
            class_name: &artifact.class_name,
            path: &artifact.path,
        }
    }
}

/// Run the plan command
pub fn run(config: GeneratorConfig, json: bool) -> Result<()> {
    let artifacts = Generator::new(config)?.plan()?;

    if json {
        println!("{}", render_json(&artifacts)?);
    } else {
        for artifact in &artifacts {
            println!("{}", artifact.path.display());
        }
    }

    Ok(())
}

/// Serialize the plan as a pretty-printed JSON array
pub fn render_json(artifacts: &[Artifact]) -> Result<String> {
    let entries: Vec<PlanEntry<'_>> = artifacts.iter().map(PlanEntry::from).collect();
    serde_json::to_string_pretty(&entries).context("Failed to serialize plan")
}
