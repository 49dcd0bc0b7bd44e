//! Topograph CLI entry point

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::{AppConfig, Overrides};

#[derive(Parser)]
#[command(name = "topograph")]
#[command(about = "Render a JSON graph description as an image with Graphviz", long_about = None)]
struct Cli {
    /// Defaults to `render` with no overrides
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./topograph.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out the graph, write the image, and open it
    Render(Overrides),
    /// Print the DOT source to stdout
    Source(Overrides),
    /// Load and validate the input file
    Check(Overrides),
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!("topograph={}", log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Topograph v{}", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.as_deref();
    match cli.command.unwrap_or(Commands::Render(Overrides::default())) {
        Commands::Render(overrides) => commands::render(&configure(config_path, &overrides)?),
        Commands::Source(overrides) => commands::source(&configure(config_path, &overrides)?),
        Commands::Check(overrides) => commands::check(&configure(config_path, &overrides)?),
        Commands::Version => {
            println!("Topograph v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Config file (or defaults) with this run's flags applied on top.
fn configure(path: Option<&Path>, overrides: &Overrides) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::discover(path)?;
    config.apply(overrides);
    Ok(config)
}
