//! Configuration loading and management.
//!
//! Configuration is a single TOML file with three sections:
//! - `[server]`: listen address and server name
//! - `[timeouts]`: idle window
//! - `[limits]`: queue capacities and line length
//!
//! Every field has a default, so an empty file is a valid configuration.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Top-level daemon configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Liveness settings.
    #[serde(default)]
    pub timeouts: TimeoutsConfig,
    /// Queue and line-length bounds.
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1:8888").
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
    /// Server name used in startup logging.
    #[serde(default = "default_server_name")]
    pub name: String,
}

/// Liveness configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeoutsConfig {
    /// Seconds a session may stay silent before it is disconnected.
    #[serde(default = "default_idle_secs")]
    pub idle_secs: u64,
}

/// Queue and line-length bounds.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Capacity of each session's outbound mailbox.
    #[serde(default = "default_mailbox_capacity")]
    pub mailbox_capacity: usize,
    /// Capacity of the broadcast hub's input queue.
    #[serde(default = "default_hub_capacity")]
    pub hub_capacity: usize,
    /// Maximum accepted input line length in bytes.
    #[serde(default = "default_max_line_len")]
    pub max_line_len: usize,
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8888))
}

fn default_server_name() -> String {
    "parleyd".to_string()
}

fn default_idle_secs() -> u64 {
    10
}

fn default_mailbox_capacity() -> usize {
    64
}

fn default_hub_capacity() -> usize {
    1024
}

fn default_max_line_len() -> usize {
    1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            name: default_server_name(),
        }
    }
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            idle_secs: default_idle_secs(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: default_mailbox_capacity(),
            hub_capacity: default_hub_capacity(),
            max_line_len: default_max_line_len(),
        }
    }
}

impl Config {
    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The idle window as a [`Duration`].
    pub fn idle_window(&self) -> Duration {
        Duration::from_secs(self.timeouts.idle_secs)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.timeouts.idle_secs == 0 {
            anyhow::bail!("timeouts.idle_secs must be at least 1");
        }
        if self.limits.mailbox_capacity == 0 {
            anyhow::bail!("limits.mailbox_capacity must be at least 1");
        }
        if self.limits.hub_capacity == 0 {
            anyhow::bail!("limits.hub_capacity must be at least 1");
        }
        if self.limits.max_line_len == 0 {
            anyhow::bail!("limits.max_line_len must be at least 1");
        }
        Ok(())
    }
}
