//! Configuration loading and validation.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server identity.
    pub server: ServerConfig,
    /// Client listener.
    pub listen: ListenConfig,
    /// Queue and line limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Reject values the server cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = &self.server.name;
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!(
                "server.name must be a non-empty word, got {name:?}"
            )));
        }

        let limits = [
            ("limits.max_line_length", self.limits.max_line_length),
            ("limits.outbound_queue", self.limits.outbound_queue),
            ("limits.dispatcher_queue", self.limits.dispatcher_queue),
        ];
        for (key, value) in limits {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{key} must be greater than 0")));
            }
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name, used as the prefix of server-originated lines.
    pub name: String,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    /// Address to bind (e.g. "127.0.0.1:6667"). Port 0 picks a free port.
    pub address: SocketAddr,
}

/// Queue and line limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Longest accepted client line in bytes, excluding the terminator
    /// (default: 512). A longer line closes the connection.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    /// Per-connection outbound queue (default: 64). Lines for a client whose
    /// queue is full are dropped.
    #[serde(default = "default_outbound_queue")]
    pub outbound_queue: usize,
    /// Dispatcher mailbox capacity (default: 1024).
    #[serde(default = "default_dispatcher_queue")]
    pub dispatcher_queue: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            outbound_queue: default_outbound_queue(),
            dispatcher_queue: default_dispatcher_queue(),
        }
    }
}

fn default_max_line_length() -> usize {
    512
}

fn default_outbound_queue() -> usize {
    64
}

fn default_dispatcher_queue() -> usize {
    1024
}
