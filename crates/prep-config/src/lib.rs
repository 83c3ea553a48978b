//! Configuration management for prep.
//!
//! Parses `prep.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! Two sections exist:
//! - `[source]` - where catalog documents live (base URL, index document
//!   path, fetch timeout)
//! - `[browse]` - the deployment's answer-level set and default level
//!   (level sets vary between deployments, so they are configuration,
//!   not code)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "prep.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content base URL.
    pub base_url: Option<String>,
    /// Override fetch timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Override the default answer level.
    pub level: Option<String>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content source configuration.
    pub source: SourceConfig,
    /// Browse configuration.
    pub browse: BrowseConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            browse: BrowseConfig::default(),
            config_path: None,
        }
    }
}

/// Content source configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Content root URL the catalog documents are served from.
    pub base_url: String,
    /// Content path of the index document.
    pub index_path: String,
    /// Fetch timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:7979/data".to_owned(),
            index_path: "spaces-index.json".to_owned(),
            timeout_secs: 30,
        }
    }
}

/// Browse configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Answer levels this deployment uses, in display order.
    pub levels: Vec<String>,
    /// Level shown when none is requested explicitly.
    pub default_level: String,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            levels: vec![
                "junior".to_owned(),
                "middle".to_owned(),
                "senior".to_owned(),
                "tricky".to_owned(),
            ],
            default_level: "junior".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `prep.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to
    /// take precedence over config file values. Validation runs last, so an
    /// invalid override is rejected the same way an invalid file is.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Fetch timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_secs)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.source.base_url.clone_from(base_url);
        }
        if let Some(timeout_secs) = settings.timeout_secs {
            self.source.timeout_secs = timeout_secs;
        }
        if let Some(level) = &settings.level {
            self.browse.default_level.clone_from(level);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.source.base_url, "source.base_url")?;
        require_http_url(&self.source.base_url, "source.base_url")?;
        require_non_empty(&self.source.index_path, "source.index_path")?;

        if self.source.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "source.timeout_secs must be greater than 0".to_owned(),
            ));
        }

        if self.browse.levels.is_empty() {
            return Err(ConfigError::Validation(
                "browse.levels cannot be empty".to_owned(),
            ));
        }
        require_non_empty(&self.browse.default_level, "browse.default_level")?;
        if !self.browse.levels.contains(&self.browse.default_level) {
            return Err(ConfigError::Validation(format!(
                "browse.default_level '{}' is not one of browse.levels",
                self.browse.default_level
            )));
        }

        Ok(())
    }
}
