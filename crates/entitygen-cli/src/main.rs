//! entitygen CLI - Java entity generator
//!
//! Commands:
//! - `entitygen generate` - Regenerate the output directory (default)
//! - `entitygen plan` - List the files a run would write
//! - `entitygen check` - Validate configuration and list inputs

use clap::{Args, Parser, Subcommand};
use entitygen_core::{GenError, LogLevel};
use std::path::PathBuf;
use std::process::ExitCode;

mod check;
mod generate;
mod plan;
mod settings;

#[derive(Parser)]
#[command(name = "entitygen")]
#[command(author, version, about = "Generate Java entity classes from CSV field definitions", long_about = None)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Flags that override values from the configuration file
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    /// Path to configuration file (default: ./entitygen.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory scanned for input files
    #[arg(short, long, global = true)]
    pub input_dir: Option<PathBuf>,

    /// Directory to regenerate
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(short, long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Skip unreadable inputs instead of aborting
    #[arg(long, global = true)]
    pub skip_unreadable: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the output directory from the input files
    Generate,

    /// Show the files a run would write, without writing them
    Plan {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration and list discovered inputs
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<GenError>()
                .map(GenError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let resolved = settings::resolve(&cli.overrides)?;
    entitygen_logging::init_logging(resolved.config.log_level);

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => generate::run(resolved.config)?,
        Commands::Plan { json } => plan::run(resolved.config, json)?,
        Commands::Check => check::run(&resolved)?,
    }

    Ok(())
}
