// ABOUTME: Configuration types and parsing for launchpad.yml.
// ABOUTME: Handles YAML parsing, platform token sources, and dispatch tuning.

mod env_value;
mod init;

pub use env_value::EnvValue;
pub use init::init_config;

use crate::error::{Error, Result};
use crate::types::Platform;
use serde::Deserialize;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "launchpad.yml";
pub const CONFIG_FILENAME_ALT: &str = "launchpad.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".launchpad/config.yml";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Branch used when a request does not name one.
    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// Simulated duration of a remote platform call.
    #[serde(default = "default_latency", with = "humantime_serde")]
    pub latency: Duration,

    /// Upper bound on a single adapter call. Unbounded when absent.
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,

    /// Maximum number of deployments dispatched at once. Unbounded when absent.
    #[serde(default)]
    pub max_concurrent: Option<NonZeroUsize>,

    /// How often callers poll for a terminal status.
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub poll_interval: Duration,

    #[serde(default = "default_platforms")]
    pub platforms: HashMap<Platform, PlatformConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformConfig {
    /// Access token source. Falls back to the platform's `*_TOKEN` variable.
    #[serde(default)]
    pub token: Option<EnvValue>,

    /// Per-platform override of the simulated call latency.
    #[serde(default, with = "humantime_serde")]
    pub latency: Option<Duration>,
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_latency() -> Duration {
    Duration::from_secs(2)
}

fn default_poll_interval() -> Duration {
    Duration::from_millis(250)
}

fn default_platforms() -> HashMap<Platform, PlatformConfig> {
    Platform::ALL
        .into_iter()
        .map(|p| (p, PlatformConfig::default()))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_branch: default_branch(),
            latency: default_latency(),
            timeout: None,
            max_concurrent: None,
            poll_interval: default_poll_interval(),
            platforms: default_platforms(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!("Loading configuration from {}", path.display());
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Like [`Config::discover`], but falls back to built-in defaults when no
    /// configuration file exists. Parse errors are still reported.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
            other => other,
        }
    }

    /// Token source for a platform: configured value or its `*_TOKEN` variable.
    pub fn token_source(&self, platform: Platform) -> EnvValue {
        self.platforms
            .get(&platform)
            .and_then(|p| p.token.clone())
            .unwrap_or_else(|| EnvValue::from_env(platform.token_env_var()))
    }

    pub fn latency_for(&self, platform: Platform) -> Duration {
        self.platforms
            .get(&platform)
            .and_then(|p| p.latency)
            .unwrap_or(self.latency)
    }

    fn validate(&self) -> Result<()> {
        if self.default_branch.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "default_branch cannot be empty".to_string(),
            ));
        }
        if self.poll_interval.is_zero() {
            return Err(Error::InvalidConfig(
                "poll_interval must be greater than zero".to_string(),
            ));
        }
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(Error::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
