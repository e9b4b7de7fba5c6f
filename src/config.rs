//! Configuration management for regconsole
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_API_BASE, DEFAULT_BASE_URL, DEFAULT_REFRESH_INTERVAL_SECS,
    DEFAULT_REGISTRY_PORT, MAX_REFRESH_INTERVAL_SECS, ROOT_PATH, TOAST_DISPLAY_MS, TOAST_FADE_MS,
    TOAST_SHOW_DELAY_MS,
};
use crate::messages::Language;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub notifications: NotificationConfig,
    pub logging: LoggingConfig,
}

/// Registry manager connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the registry manager web service
    pub base_url: String,
    /// Path prefix of the JSON API
    pub api_base: String,
    /// Host shown in pull commands; the base URL host when unset
    pub registry_host: Option<String>,
    /// Port shown in pull commands
    pub registry_port: u16,
    /// Stats refresh interval in seconds
    pub refresh_interval_secs: u64,
    /// Periodically refresh the stats counters
    pub auto_refresh: bool,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Language of toasts and messages ("en" or "zh")
    pub language: Language,
    /// Location opened on startup ("/", "/repositories", "/repositories/<name>", "/login")
    pub start_path: String,
}

/// Toast timing configuration, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub show_delay_ms: u64,
    pub display_ms: u64,
    pub fade_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
    /// Maximum level ("error", "warn", "info", "debug", "trace")
    pub level: String,
    /// Log file path; defaults to the data directory
    pub file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            registry_host: None,
            registry_port: DEFAULT_REGISTRY_PORT,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            auto_refresh: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            start_path: ROOT_PATH.to_string(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: TOAST_SHOW_DELAY_MS,
            display_ms: TOAST_DISPLAY_MS,
            fade_ms: TOAST_FADE_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl ServerConfig {
    /// Parsed base URL
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url).with_context(|| format!("Invalid base_url '{}'", self.base_url))
    }

    /// Host shown in pull commands
    pub fn pull_host(&self) -> String {
        if let Some(host) = &self.registry_host {
            return host.clone();
        }
        Url::parse(&self.base_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "localhost".to_string())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        Self::get_default_config_path().ok().filter(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base_url = self.server.base_url()?;
        if !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!("base_url must use http or https, got '{}'", base_url.scheme());
        }

        if !self.server.api_base.starts_with('/') {
            anyhow::bail!("api_base must start with '/', got '{}'", self.server.api_base);
        }

        if self.server.registry_port == 0 {
            anyhow::bail!("registry_port cannot be 0");
        }

        if self.server.refresh_interval_secs == 0 || self.server.refresh_interval_secs > MAX_REFRESH_INTERVAL_SECS {
            anyhow::bail!(
                "refresh_interval_secs must be between 1 and {}, got {}",
                MAX_REFRESH_INTERVAL_SECS,
                self.server.refresh_interval_secs
            );
        }

        if !self.ui.start_path.starts_with('/') {
            anyhow::bail!("start_path must start with '/', got '{}'", self.ui.start_path);
        }

        if self.notifications.display_ms <= self.notifications.show_delay_ms {
            anyhow::bail!(
                "notifications.display_ms ({}) must exceed show_delay_ms ({})",
                self.notifications.display_ms,
                self.notifications.show_delay_ms
            );
        }

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# regconsole Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
