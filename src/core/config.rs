//! Configuration management for the MCP server.
//!
//! Configuration is built from defaults, then the environment (including a
//! `.env` file), then command-line flags. For the guide base URL this gives
//! the precedence `--base-url` > `AI_DEVELOPER_GUIDE_URL` > built-in default.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::{Error, Result};
use crate::domains::guides::DEFAULT_BASE_URL;

/// Environment variable holding the guide API base URL.
pub const BASE_URL_ENV: &str = "AI_DEVELOPER_GUIDE_URL";

/// Environment variable holding the optional request timeout in seconds.
pub const TIMEOUT_ENV: &str = "AI_DEVELOPER_GUIDE_TIMEOUT_SECS";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Guide API configuration.
    pub guide: GuideConfig,

    /// Environment settings that were rejected while loading.
    #[serde(skip)]
    pub ignored: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration of the remote guide API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Base URL of the JSON API.
    pub base_url: String,

    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            guide: GuideConfig::default(),
            ignored: Vec::new(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`); the guide API uses `AI_DEVELOPER_GUIDE_URL` and
    /// `AI_DEVELOPER_GUIDE_TIMEOUT_SECS`.
    ///
    /// Runs before logging is set up, so rejected values are collected in
    /// `ignored` and logged later by [`Config::report_ignored`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.guide.base_url = base_url;
            }
        }

        if let Ok(timeout) = std::env::var(TIMEOUT_ENV) {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.guide.request_timeout_secs = Some(secs),
                _ => config
                    .ignored
                    .push(format!("Ignoring invalid {}: {:?}", TIMEOUT_ENV, timeout)),
            }
        }

        config
    }

    /// Log the settings rejected by [`Config::from_env`].
    pub fn report_ignored(&self) {
        for message in &self.ignored {
            warn!("{}", message);
        }
    }

    /// Apply a base URL given on the command line, if any.
    ///
    /// A blank value counts as absent.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            info!("Using base URL from command line");
            self.guide.base_url = base_url;
        }
        self
    }

    /// Check that the configuration can be used to start the server.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.guide.base_url)
            .map_err(|e| Error::config(format!("invalid base URL '{}': {}", self.guide.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base URL must use http or https: {}",
                self.guide.base_url
            )));
        }
        Ok(())
    }
}
