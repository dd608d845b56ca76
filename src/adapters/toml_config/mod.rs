// TOML config adapter - Client configuration from TOML files

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::model::Platform;
use crate::error::{CortesError, CortesResult};
use crate::utils::logging::LogLevel;

/// Backend address used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cortes.toml";

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientConfig {
    pub backend_url: String,
    pub platform: Platform,
    pub log_level: LogLevel,
    pub log_json: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            platform: Platform::default(),
            log_level: LogLevel::default(),
            log_json: false,
        }
    }
}

/// `[cortes]` table; every key optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CortesSection {
    backend_url: Option<String>,
    platform: Option<String>,
    log_level: Option<String>,
    log_json: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    cortes: CortesSection,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse a config document and layer it over `base`
    pub fn merge_str(base: ClientConfig, toml_content: &str) -> CortesResult<ClientConfig> {
        let parsed: ConfigFile =
            toml::from_str(toml_content).map_err(|e| CortesError::InvalidConfig {
                message: format!("Failed to parse TOML config: {}", e),
            })?;
        let section = parsed.cortes;

        let mut config = base;
        if let Some(url) = section.backend_url {
            config.backend_url = Self::validate_backend_url(&url)?;
        }
        if let Some(platform) = section.platform {
            config.platform = Platform::new(platform);
        }
        if let Some(level) = section.log_level {
            config.log_level = LogLevel::parse(&level)?;
        }
        if let Some(json) = section.log_json {
            config.log_json = json;
        }
        Ok(config)
    }

    /// Read `path` and layer it over `base`
    pub fn merge_file(base: ClientConfig, path: &Path) -> CortesResult<ClientConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| CortesError::ConfigFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::merge_str(base, &content)
    }

    /// Config file in the working directory, if present
    pub fn default_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        path.is_file().then_some(path)
    }

    /// Backend URLs must be absolute http(s) origins
    pub fn validate_backend_url(url: &str) -> CortesResult<String> {
        let url = url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(url.trim_end_matches('/').to_string())
        } else {
            Err(CortesError::InvalidConfig {
                message: format!("backend_url must start with http:// or https://: {}", url),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.platform, Platform::new("youtube"));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_merge_partial_file() {
        let config = TomlConfigAdapter::merge_str(
            ClientConfig::default(),
            "[cortes]\nbackend_url = \"http://10.0.0.5:9000/\"\nlog_level = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.backend_url, "http://10.0.0.5:9000");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.platform, Platform::default());
    }

    #[test]
    fn test_empty_file_keeps_base() {
        let config = TomlConfigAdapter::merge_str(ClientConfig::default(), "").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(TomlConfigAdapter::merge_str(
            ClientConfig::default(),
            "[cortes]\nbackend_url = \"localhost:8000\"\n"
        )
        .is_err());
        assert!(TomlConfigAdapter::merge_str(
            ClientConfig::default(),
            "[cortes]\nlog_level = \"loud\"\n"
        )
        .is_err());
        assert!(TomlConfigAdapter::merge_str(
            ClientConfig::default(),
            "[cortes]\nunknown_key = 1\n"
        )
        .is_err());
        assert!(TomlConfigAdapter::merge_str(ClientConfig::default(), "not toml [").is_err());
    }

    #[test]
    fn test_merge_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cortes.toml");
        std::fs::write(&path, "[cortes]\nplatform = \"tiktok\"\nlog_json = true\n").unwrap();

        let config = TomlConfigAdapter::merge_file(ClientConfig::default(), &path).unwrap();
        assert_eq!(config.platform, Platform::new("tiktok"));
        assert!(config.log_json);

        let missing = temp.path().join("nope.toml");
        assert!(TomlConfigAdapter::merge_file(ClientConfig::default(), &missing).is_err());
    }
}
