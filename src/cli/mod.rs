//! CLI module for Cortes
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config_initialization::CliOverrides;

pub mod args;
pub mod commands;

pub use args::{GenerateArgs, HealthArgs};

/// Cortes clip generator
///
/// Fills the clip generation form from the command line, submits it to the
/// backend and prints the resulting clips.
#[derive(Parser, Debug)]
#[command(name = "cortes")]
#[command(about = "Cortes - Generate short clips from a video through the clip backend")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, env = "CORTES_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Backend address
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Logging level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Command-line layer of the configuration hierarchy
    pub fn overrides(&self) -> CliOverrides {
        let platform = match &self.command {
            Commands::Generate(args) => args.platform.clone(),
            Commands::Health(_) => None,
        };
        CliOverrides {
            backend_url: self.backend.clone(),
            platform,
            log_level: self.log_level.clone(),
            log_json: self.log_json,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a video and render the generated clips
    Generate(args::GenerateArgs),
    /// Check that the backend is reachable
    Health(args::HealthArgs),
}
