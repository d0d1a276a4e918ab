//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// External portfolio API. Required: the tool is only a client of it.
    pub api: ApiConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub assistant: Option<AssistantConfig>,

    #[serde(default)]
    pub analytics: Option<AnalyticsConfig>,
}

/// External REST API the portfolio data lives behind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Gateway server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Session and token persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token lifetime applied on login, in days
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,

    /// Override for the CLI token file location
    #[serde(default)]
    pub token_path: Option<PathBuf>,
}

fn default_token_ttl_days() -> i64 {
    1
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_days: default_token_ttl_days(),
            token_path: None,
        }
    }
}

/// Optional chat-completion integration; absent means disabled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    pub api_key: String,
}

/// Optional analytics/telemetry id; absent means disabled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub id: String,
}

impl Config {
    /// Validate invariants that serde defaults cannot express.
    ///
    /// A missing or empty API base URL is a hard startup failure, not a
    /// degraded mode.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(crate::error::Error::Config(
                "api.base_url is required".to_string(),
            ));
        }
        reqwest::Url::parse(&self.api.base_url)
            .map_err(|e| crate::error::Error::Config(format!("api.base_url is invalid: {}", e)))?;
        Ok(())
    }

    pub fn assistant_enabled(&self) -> bool {
        self.assistant
            .as_ref()
            .map(|a| !a.api_key.is_empty())
            .unwrap_or(false)
    }

    pub fn analytics_enabled(&self) -> bool {
        self.analytics
            .as_ref()
            .map(|a| !a.id.is_empty())
            .unwrap_or(false)
    }
}
