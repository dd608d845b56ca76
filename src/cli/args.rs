//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the generate command
///
/// Numeric fields are kept as text so the form validator sees exactly what
/// was typed.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Video source: url or upload
    #[arg(short, long, default_value = "url")]
    pub mode: String,

    /// Video URL (url mode)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Video file to upload (upload mode)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Number of clips to generate (1-20)
    #[arg(short, long, default_value = "3", allow_hyphen_values = true)]
    pub clips: String,

    /// Maximum clip duration in seconds (at least 5)
    #[arg(short = 'd', long, default_value = "60", allow_hyphen_values = true)]
    pub max_duration: String,

    /// Target platform (youtube, instagram, tiktok, ...)
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Print the rendered form as JSON
    #[arg(long)]
    pub json: bool,

    /// Save every generated clip into this directory
    #[arg(long)]
    pub download_dir: Option<PathBuf>,

    /// Fail instead of replacing clips already in the download directory
    #[arg(long)]
    pub no_overwrite: bool,
}

/// Arguments for the health command
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
