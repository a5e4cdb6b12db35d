//! Check command implementation

use crate::settings::Resolved;
use anyhow::Result;
use entitygen_core::{Generator, schema_identifier};

/// Run the check command
pub fn run(resolved: &Resolved) -> Result<()> {
    match &resolved.source {
        Some(path) => println!("Checking configuration: {}", path.display()),
        None => println!("Checking configuration: (defaults)"),
    }

    let generator = Generator::new(resolved.config.clone())?;
    let config = generator.config();

    println!("✓ Input: {} (*.{})", config.input_dir.display(), config.input_extension);
    println!("✓ Output: {} (*.{})", config.output_dir.display(), config.output_extension);

    let (inputs, schemas) = generator.load()?;
    println!("✓ Inputs: {inputs}");
    for schema in schemas.iter() {
        println!("  {} ({} fields)", schema.identifier(), schema.len());
    }
    for path in schemas.skipped() {
        let name = schema_identifier(path).unwrap_or_else(|| path.display().to_string());
        println!("  {name} (unreadable, skipped)");
    }

    println!("\nConfiguration is valid!");

    Ok(())
}
