//! Command implementations

use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::adapters::toml_config::ClientConfig;
use crate::app::container::{AppContainer, DefaultAppContainer};
use crate::app::{DownloadResult, SubmitOutcome};
use crate::cli::args::{GenerateArgs, HealthArgs};
use crate::domain::errors::DomainError;
use crate::domain::model::{HealthReport, Mode, RawForm, SelectedFile};
use crate::error::CortesError;
use crate::output::{ClipWriter, FormView, OverwritePolicy};

/// Everything `generate --json` prints
#[derive(Serialize)]
struct GenerateReport<'a> {
    view: &'a FormView,
    downloads: &'a [DownloadResult],
}

/// Execute the generate command
pub async fn generate(args: GenerateArgs, config: &ClientConfig) -> Result<ExitCode> {
    let mode = Mode::parse(&args.mode)?;
    info!("Starting generate operation");
    info!("Mode: {}", mode);
    info!("Backend: {}", config.backend_url);

    let form = build_form(&args, mode, config)?;
    let container = DefaultAppContainer::new(config)?;
    let controller = container.form_controller(mode);
    controller.select_mode(mode);

    let outcome = controller.submit(&form).await;
    let view = controller.snapshot();

    let mut downloads = Vec::new();
    if let (Some(dir), SubmitOutcome::Rendered { .. }) = (&args.download_dir, &outcome) {
        let policy = if args.no_overwrite {
            OverwritePolicy::Never
        } else {
            OverwritePolicy::Always
        };
        let writer = ClipWriter::new(dir, policy);
        downloads = container
            .download_interactor()
            .download_all(&view.cards, &writer)
            .await;
    }

    if args.json {
        let report = GenerateReport {
            view: &view,
            downloads: &downloads,
        };
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize form view to JSON")?;
        println!("{}", json);
    } else {
        print!("{}", view);
        display_downloads(&downloads);
    }

    let downloads_failed = downloads.iter().any(|d| !d.success());
    if outcome.is_failure() || downloads_failed {
        warn!("Generate operation finished with errors");
        Ok(ExitCode::FAILURE)
    } else {
        info!("Generate operation completed successfully");
        Ok(ExitCode::SUCCESS)
    }
}

/// Execute the health command
pub async fn health(args: HealthArgs, config: &ClientConfig) -> Result<ExitCode> {
    info!("Starting health check against {}", config.backend_url);

    let container = DefaultAppContainer::new(config)?;
    match container.health_interactor().check().await {
        Ok(report) => {
            if args.json {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize health report to JSON")?;
                println!("{}", json);
            } else {
                display_health(&config.backend_url, &report);
            }
            Ok(if report.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(err) => {
            eprintln!("Erro: {}", user_message(&err));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Fill the form from arguments; only upload mode reads the file
fn build_form(args: &GenerateArgs, mode: Mode, config: &ClientConfig) -> Result<RawForm> {
    let mut form = RawForm::new(mode);
    form.clips_count = args.clips.clone();
    form.max_duration = args.max_duration.clone();
    form.platform = config.platform.clone();

    match mode {
        Mode::Url => {
            if args.file.is_some() {
                warn!("--file is ignored in url mode");
            }
            form.video_url = args.url.clone().unwrap_or_default();
        }
        Mode::Upload => {
            if args.url.is_some() {
                warn!("--url is ignored in upload mode");
            }
            if let Some(path) = &args.file {
                let file = SelectedFile::read(path).map_err(|e| CortesError::VideoFile {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                if file.is_empty() {
                    warn!("{} is empty; the backend will likely reject it", file.name);
                }
                info!("Selected {} ({} bytes)", file.name, file.len());
                form.file = Some(file);
            }
        }
    }
    Ok(form)
}

/// Text shown to the user for a failed interaction
fn user_message(err: &DomainError) -> String {
    match err {
        DomainError::Transport(message) => message.clone(),
        DomainError::Backend { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

/// Display download results in human-readable format
fn display_downloads(downloads: &[DownloadResult]) {
    if downloads.is_empty() {
        return;
    }
    println!();
    println!("Downloads:");
    for download in downloads {
        match (&download.path, &download.error) {
            (Some(path), _) => println!("  ✓ Corte #{}: {}", download.clip_id, path.display()),
            (None, Some(error)) => println!("  ✗ Corte #{}: {}", download.clip_id, error),
            (None, None) => println!("  ✗ Corte #{}", download.clip_id),
        }
    }
}

/// Display health report in human-readable format
fn display_health(backend_url: &str, report: &HealthReport) {
    let mark = |ok: bool| if ok { "✓" } else { "✗" };
    println!("Backend: {}", backend_url);
    println!("Status:  {}", report.status);
    println!("FFmpeg:  {}", mark(report.ffmpeg));
    println!("Whisper: {}", mark(report.whisper));
}
