//! Configuration loading
//!
//! The shell reads `~/.config/streamctl/config.toml` for the server target,
//! with `STREAMCTL_*` environment overrides on top and CLI flags above both.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ShellError, ShellResult};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the orchestration server, e.g. `http://localhost:9393`.
    /// Unset means stream commands are unavailable.
    pub server: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> ShellResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(path: &Path) -> ShellResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);
        let config: Config = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| ShellError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from the user config file if present, else defaults, with env
    /// overrides applied either way.
    pub fn load_or_default() -> Self {
        let config = user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| Self::load(&p).ok())
            .unwrap_or_default();
        with_env_overrides(config)
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("streamctl/config.toml"))
}

/// Apply environment variable overrides (STREAMCTL_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(server) = std::env::var("STREAMCTL_SERVER") {
        if !server.is_empty() {
            config.server = Some(server);
        }
    }

    if let Ok(timeout) = std::env::var("STREAMCTL_TIMEOUT_SECS") {
        if let Ok(secs) = timeout.parse() {
            config.timeout_secs = secs;
        }
    }

    config
}
