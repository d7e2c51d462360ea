//! Configuration settings management
//!
//! This module handles loading the tunables of the create-after-delete
//! wait from defaults, an optional file and the environment.

use crate::error::{Result, ShimError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable prefix, e.g. `STORAGE_SHIM_WAIT__POLL_INTERVAL_SECS`
pub const ENV_PREFIX: &str = "STORAGE_SHIM";

/// How a data-plane create waits for a pending delete to finish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitSettings {
    pub poll_interval_secs: u64,
    pub not_found_checks: usize,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: 10,
            not_found_checks: 180,
        }
    }
}

impl WaitSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_secs == 0 {
            return Err(ShimError::config("wait.poll_interval_secs must be greater than zero"));
        }

        if self.not_found_checks == 0 {
            return Err(ShimError::config("wait.not_found_checks must be greater than zero"));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShimConfig {
    pub wait: WaitSettings,
}

impl ShimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration.
    /// Priority: environment > file > defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = WaitSettings::default();
        let mut builder = config::Config::builder()
            .set_default("wait.poll_interval_secs", defaults.poll_interval_secs)?
            .set_default("wait.not_found_checks", defaults.not_found_checks as u64)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: ShimConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.wait.validate()
    }
}
