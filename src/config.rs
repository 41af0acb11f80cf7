//! Client configuration loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// Input handling knobs.
    #[serde(default)]
    pub input: InputConfig,
    /// Service alias targets.
    #[serde(default)]
    pub services: ServicesConfig,
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Input handling configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Line count above which a multi-line paste asks for confirmation
    /// before being sent as separate messages (default: 3).
    #[serde(default = "default_multiline_threshold")]
    pub multiline_confirm_threshold: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            multiline_confirm_threshold: default_multiline_threshold(),
        }
    }
}

/// Target nicks for the service alias commands.
///
/// Networks differ in how their services are named; the aliases follow the
/// config rather than hard-coding the conventional nicks.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    /// Nick the `/ns` and `/nickserv` aliases message (default: "NickServ").
    #[serde(default = "default_nickserv")]
    pub nickserv: String,
    /// Nick the `/ms` and `/memoserv` aliases message (default: "MemoServ").
    #[serde(default = "default_memoserv")]
    pub memoserv: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            nickserv: default_nickserv(),
            memoserv: default_memoserv(),
        }
    }
}

fn default_multiline_threshold() -> usize {
    3
}

fn default_nickserv() -> String {
    "NickServ".to_string()
}

fn default_memoserv() -> String {
    "MemoServ".to_string()
}
