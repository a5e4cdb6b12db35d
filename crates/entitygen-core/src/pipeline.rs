//! Generation pipeline: discover, load, build, render, write.

use crate::config::GeneratorConfig;
use crate::descriptor::{OutputLayout, build_descriptors};
use crate::discover::discover_inputs;
use crate::error::GenResult;
use crate::loader::{SchemaSet, load_schemas};
use crate::render::render;
use crate::sink::OutputSink;
use crate::variant::Variant;
use std::path::PathBuf;
use tracing::{debug, info};

/// One rendered class, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub identifier: String,
    pub variant: Variant,
    pub class_name: String,
    pub path: PathBuf,
    pub contents: String,
}

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub inputs: usize,
    pub schemas: usize,
    pub artifacts: usize,
    pub skipped: Vec<PathBuf>,
}

/// Render every schema in every variant.
///
/// Schemas are visited in identifier order; each contributes its App,
/// Relational and Document artifacts in that order.
pub fn build_artifacts(schemas: &SchemaSet, layout: &OutputLayout) -> Vec<Artifact> {
    schemas
        .iter()
        .flat_map(|schema| {
            build_descriptors(schema, layout).map(|descriptor| Artifact {
                identifier: schema.identifier().to_string(),
                variant: descriptor.variant,
                contents: render(&descriptor),
                class_name: descriptor.class_name,
                path: descriptor.output_path,
            })
        })
        .collect()
}

/// Reset `sink` once, then write every artifact. Stops at the first failure.
pub fn write_artifacts<S: OutputSink + ?Sized>(
    sink: &mut S,
    artifacts: &[Artifact],
) -> GenResult<usize> {
    sink.reset()?;

    for artifact in artifacts {
        sink.write(&artifact.path, &artifact.contents)?;
    }

    Ok(artifacts.len())
}

/// Runs the pipeline for one configuration
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator, validating the configuration
    pub fn new(config: GeneratorConfig) -> GenResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Discover and load inputs
    pub fn load(&self) -> GenResult<(usize, SchemaSet)> {
        let inputs = discover_inputs(&self.config.input_dir, &self.config.input_extension)?;
        debug!(
            dir = %self.config.input_dir.display(),
            count = inputs.len(),
            "Discovered inputs"
        );

        let schemas = load_schemas(&inputs, self.config.on_read_error)?;
        Ok((inputs.len(), schemas))
    }

    /// Load and render everything without writing
    pub fn plan(&self) -> GenResult<Vec<Artifact>> {
        let (_, schemas) = self.load()?;
        Ok(build_artifacts(&schemas, &self.config.layout()))
    }

    /// Load, render, and write everything to `sink`
    pub fn run<S: OutputSink + ?Sized>(&self, sink: &mut S) -> GenResult<RunSummary> {
        let (inputs, schemas) = self.load()?;
        let artifacts = build_artifacts(&schemas, &self.config.layout());
        let written = write_artifacts(sink, &artifacts)?;

        info!(
            schemas = schemas.len(),
            artifacts = written,
            output = %self.config.output_dir.display(),
            "Generation complete"
        );

        Ok(RunSummary {
            inputs,
            schemas: schemas.len(),
            artifacts: written,
            skipped: schemas.skipped().to_vec(),
        })
    }
}
