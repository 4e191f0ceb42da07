//! Primer CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "primer")]
#[command(about = "Build and inspect the startup graph and numeral table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Root directory for the config file and required directories
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Config file (defaults to <root>/primer.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dotenv file consulted for variables missing from the environment
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Override the workspace directory
    #[arg(long)]
    workspace: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the initial state and print weights and numerals
    Show {
        /// Print the whole state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up the symbol for a magnitude
    Lookup {
        magnitude: u32,
    },
    /// Resolve configuration and ensure required directories exist
    Check,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "primer={0},primer_core={0},primer_bootstrap={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Primer v{}", env!("CARGO_PKG_VERSION"));

    let options = commands::Options {
        root: cli.root,
        config: cli.config,
        env_file: cli.env_file,
        workspace: cli.workspace,
    };

    match cli.command {
        Commands::Show { json } => commands::show(&options, json),
        Commands::Lookup { magnitude } => commands::lookup(&options, magnitude),
        Commands::Check => commands::check(&options),
        Commands::Version => {
            println!("Primer v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
