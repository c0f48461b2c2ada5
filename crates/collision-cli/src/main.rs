//! Collision design CLI
//!
//! Command-line tool for regenerating, checking and inspecting the collision
//! design document built from the collision CSV sheets.

use clap::{Args, Parser, Subcommand};
use collision_core::{
    check_document, discover_sources, load_model, write_document, CheckOutcome, DocConfig,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "collision-doc")]
#[command(about = "Collision design document generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the document from the CSV sources and write it
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Override the output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the written document matches the CSV sources
    Check {
        #[command(flatten)]
        source: SourceArgs,

        /// Override the output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the parsed model as JSON
    Dump {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Create a config file with default settings
    InitConfig {
        /// Output path for the config file
        #[arg(short, long)]
        output: PathBuf,

        /// Directory to discover sources in; canonical names are used otherwise
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Directory to search for the CSV sources
    #[arg(short, long, conflicts_with = "config")]
    dir: Option<PathBuf>,

    /// Path to a config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SourceArgs {
    fn resolve(&self) -> collision_core::Result<DocConfig> {
        let config = match (&self.config, &self.dir) {
            (Some(config), _) => DocConfig::load(config)?,
            (None, Some(dir)) => DocConfig::with_sources(discover_sources(dir)?),
            (None, None) => DocConfig::with_sources(discover_sources(".")?),
        };
        debug!(sources = ?config.sources, "resolved collision sources");
        Ok(config)
    }

    /// Resolve the config, replacing the output path when one is given
    fn resolve_with_output(&self, output: Option<PathBuf>) -> collision_core::Result<DocConfig> {
        let mut config = self.resolve()?;
        if let Some(output) = output {
            config.sources.output = output;
        }
        Ok(config)
    }
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> collision_core::Result<i32> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Generate { source, output } => cmd_generate(&source, output),
        Commands::Check { source, output } => cmd_check(&source, output),
        Commands::Dump { source } => cmd_dump(&source),
        Commands::InitConfig { output, dir } => cmd_init_config(&output, dir.as_ref()),
    }
}

fn cmd_generate(source: &SourceArgs, output: Option<PathBuf>) -> collision_core::Result<i32> {
    let config = source.resolve_with_output(output)?;

    let written = write_document(&config)?;
    println!("Wrote {}", written.display());

    Ok(0)
}

fn cmd_check(source: &SourceArgs, output: Option<PathBuf>) -> collision_core::Result<i32> {
    let config = source.resolve_with_output(output)?;
    let output = config.sources.output.display().to_string();

    match check_document(&config)? {
        CheckOutcome::UpToDate => {
            println!("{} is up to date", output);
            Ok(0)
        }
        CheckOutcome::Stale => {
            println!("{} is out of date; run `collision-doc generate`", output);
            Ok(2)
        }
        CheckOutcome::Missing => {
            println!("{} does not exist; run `collision-doc generate`", output);
            Ok(2)
        }
    }
}

fn cmd_dump(source: &SourceArgs) -> collision_core::Result<i32> {
    let config = source.resolve()?;
    let model = load_model(&config.sources)?;

    println!("{}", serde_json::to_string_pretty(&model)?);

    Ok(0)
}

fn cmd_init_config(output: &PathBuf, dir: Option<&PathBuf>) -> collision_core::Result<i32> {
    // Discovered paths are stored absolute so the config loads from anywhere
    let config = match dir {
        Some(dir) => DocConfig::with_sources(discover_sources(dir.canonicalize()?)?),
        None => DocConfig::default(),
    };

    config.save(output)?;
    println!("Created config file: {}", output.display());
    println!();
    println!("Edit the file to adjust sources or prose, then run:");
    println!("  collision-doc generate --config {}", output.display());

    Ok(0)
}
