//! Generate command implementation

use anyhow::Result;
use entitygen_core::{FsSink, Generator, GeneratorConfig};

/// Run the generate command
pub fn run(config: GeneratorConfig) -> Result<()> {
    let mut sink = FsSink::new(&config.output_dir);
    let generator = Generator::new(config)?;

    let summary = generator.run(&mut sink)?;

    println!(
        "Generated {} files from {} schemas into {}",
        summary.artifacts,
        summary.schemas,
        sink.root().display()
    );
    for path in &summary.skipped {
        println!("  skipped: {}", path.display());
    }

    Ok(())
}
