//! Configuration initialization and hierarchy management

use std::path::Path;

use tracing::debug;

use crate::adapters::toml_config::{ClientConfig, TomlConfigAdapter};
use crate::domain::model::Platform;
use crate::error::CortesResult;
use crate::utils::logging::LogLevel;

pub const ENV_BACKEND_URL: &str = "CORTES_BACKEND_URL";
pub const ENV_PLATFORM: &str = "CORTES_PLATFORM";
pub const ENV_LOG_LEVEL: &str = "CORTES_LOG_LEVEL";

/// Values given on the command line; `None` leaves the lower layers alone
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub backend_url: Option<String>,
    pub platform: Option<String>,
    pub log_level: Option<String>,
    pub log_json: bool,
}

/// Resolve configuration following precedence: CLI > Env > File > Defaults.
///
/// An explicit `config_path` must exist; otherwise `./cortes.toml` is used
/// when present.
pub fn initialize_configuration_hierarchy(
    config_path: Option<&Path>,
    cli: &CliOverrides,
) -> CortesResult<ClientConfig> {
    resolve(config_path, cli, |key| std::env::var(key).ok())
}

/// Same as `initialize_configuration_hierarchy` with an injectable environment
pub fn resolve<F>(config_path: Option<&Path>, cli: &CliOverrides, env: F) -> CortesResult<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    // Step 1: defaults
    let mut config = ClientConfig::default();

    // Step 2: config file
    let file = config_path
        .map(Path::to_path_buf)
        .or_else(TomlConfigAdapter::default_config_path);
    if let Some(path) = file {
        debug!("Loading configuration from: {}", path.display());
        config = TomlConfigAdapter::merge_file(config, &path)?;
    }

    // Step 3: environment
    if let Some(url) = env(ENV_BACKEND_URL) {
        debug!("Environment override: {} = {}", ENV_BACKEND_URL, url);
        config.backend_url = TomlConfigAdapter::validate_backend_url(&url)?;
    }
    if let Some(platform) = env(ENV_PLATFORM) {
        config.platform = Platform::new(platform);
    }
    if let Some(level) = env(ENV_LOG_LEVEL) {
        config.log_level = LogLevel::parse(&level)?;
    }

    // Step 4: command line
    if let Some(url) = &cli.backend_url {
        config.backend_url = TomlConfigAdapter::validate_backend_url(url)?;
    }
    if let Some(platform) = &cli.platform {
        config.platform = Platform::new(platform.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = LogLevel::parse(level)?;
    }
    if cli.log_json {
        config.log_json = true;
    }

    Ok(config)
}
