//! Application configuration.
//!
//! Configuration is stored in `<config dir>/helpdesk/config.yaml` (or the path
//! named by `HELPDESK_CONFIG`) and includes:
//! - The ticket service origin
//! - The request timeout
//! - Debounce windows for classification and search
//! - An optional log file for the dashboard

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::DEFAULT_API_URL;
use crate::error::{HelpdeskError, Result};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "HELPDESK_CONFIG";

/// Environment variable overriding the configured service origin
pub const API_URL_ENV: &str = "HELPDESK_API_URL";

/// Keys accepted by `config set`
pub const CONFIG_KEYS: &[&str] = &[
    "api_url",
    "request_timeout",
    "classify_debounce_ms",
    "search_debounce_ms",
    "log_file",
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ticket service origin, e.g. `http://localhost:8000`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Quiet period before a description is sent for classification (default: 1000)
    #[serde(default = "default_classify_debounce_ms")]
    pub classify_debounce_ms: u64,

    /// Quiet period before typed search text is applied (default: 500)
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Where the dashboard writes its log
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    #[serde(skip)]
    api_url_override: Option<String>,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_classify_debounce_ms() -> u64 {
    1000
}

fn default_search_debounce_ms() -> u64 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            request_timeout: default_request_timeout(),
            classify_debounce_ms: default_classify_debounce_ms(),
            search_debounce_ms: default_search_debounce_ms(),
            log_file: None,
            api_url_override: None,
        }
    }
}

/// Debounce windows handed to the dashboard model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub classify_debounce: Duration,
    pub search_debounce: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Config::default().timing()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        ProjectDirs::from("", "", "helpdesk")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .ok_or_else(|| {
                HelpdeskError::Config("could not determine a configuration directory".to_string())
            })
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            HelpdeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                HelpdeskError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            HelpdeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    /// Use `url` in place of anything the environment or file says
    pub fn with_api_url_override(mut self, url: Option<String>) -> Self {
        self.api_url_override = url.filter(|u| !u.trim().is_empty());
        self
    }

    /// Resolve the service origin: override, then environment, then file, then default
    pub fn api_url(&self) -> String {
        if let Some(url) = &self.api_url_override {
            return url.clone();
        }

        if let Ok(url) = env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            return url;
        }

        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Get the request timeout duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn timing(&self) -> Timing {
        Timing {
            classify_debounce: Duration::from_millis(self.classify_debounce_ms),
            search_debounce: Duration::from_millis(self.search_debounce_ms),
        }
    }

    /// Set one key from its string form, validating the value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" => {
                let url = Url::parse(value.trim())
                    .map_err(|e| HelpdeskError::InvalidUrl(value.to_string(), e))?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(HelpdeskError::Config(format!(
                        "api_url must use http or https, got '{}'",
                        url.scheme()
                    )));
                }
                self.api_url = Some(value.trim().to_string());
            }
            "request_timeout" => {
                let seconds = parse_number(key, value)?;
                if seconds == 0 {
                    return Err(HelpdeskError::Config(
                        "request_timeout must be at least 1 second".to_string(),
                    ));
                }
                self.request_timeout = seconds;
            }
            "classify_debounce_ms" => self.classify_debounce_ms = parse_number(key, value)?,
            "search_debounce_ms" => self.search_debounce_ms = parse_number(key, value)?,
            "log_file" => {
                self.log_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => {
                return Err(HelpdeskError::Config(format!(
                    "invalid config key '{key}'. Valid keys: {}",
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|_| {
        HelpdeskError::Config(format!(
            "invalid value '{value}' for {key}. Expected a whole number"
        ))
    })
}
