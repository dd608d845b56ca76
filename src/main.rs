//! Cortes clip generator
//!
//! Command-line front end for a video clip generation backend: fills the
//! generation form, validates it, submits it and renders the returned clips.
//!
//! # Usage
//!
//! ```bash
//! cortes generate --url "https://youtu.be/..." --clips 3 --max-duration 45 --platform tiktok
//! cortes generate --mode upload --file video.mp4 --clips 5 --download-dir ./clips
//! cortes health
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cortes::cli::{commands, Cli, Commands};
use cortes::config_initialization::initialize_configuration_hierarchy;
use cortes::utils::{init_logging, LoggingConfig};

/// Main entry point for the Cortes CLI application
#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Resolve configuration: CLI > env > file > defaults
    let config = initialize_configuration_hierarchy(cli.config.as_deref(), &cli.overrides())?;

    // Initialize logging
    init_logging(&LoggingConfig {
        level: config.log_level,
        json: config.log_json,
    })?;

    info!("Starting Cortes {}", env!("CARGO_PKG_VERSION"));

    // Execute the requested command
    let code = match cli.command {
        Commands::Generate(args) => {
            info!("Executing generate command");
            commands::generate(args, &config).await?
        }
        Commands::Health(args) => {
            info!("Executing health command");
            commands::health(args, &config).await?
        }
    };

    Ok(code)
}
