//! Capture configuration
//!
//! The active [`Config`] is read once from the environment on first use and
//! can be replaced at runtime with [`set`]:
//! - `ERRSTACK_MAX_DEPTH` - maximum frames per captured trace (default 32)
//! - `ERRSTACK_CAPTURE` - `0`/`false`/`off` disables capture entirely

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Environment variable holding the maximum capture depth
pub const MAX_DEPTH_ENV: &str = "ERRSTACK_MAX_DEPTH";

/// Environment variable toggling stack capture
pub const CAPTURE_ENV: &str = "ERRSTACK_CAPTURE";

/// Default number of frames recorded per trace
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Stack capture settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of frames recorded per captured trace
    pub max_depth: usize,
    /// Whether factories capture stacks at all
    pub capture: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            capture: true,
        }
    }
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Depth was not a positive integer
    #[error("invalid ERRSTACK_MAX_DEPTH value {0:?}: expected a positive integer")]
    InvalidDepth(String),

    /// Capture flag was not a recognised boolean
    #[error("invalid ERRSTACK_CAPTURE value {0:?}: expected true/false, 1/0 or on/off")]
    InvalidFlag(String),
}

impl Config {
    /// Build a configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_DEPTH_ENV) {
            config.max_depth = parse_depth(&raw)?;
        }
        if let Some(raw) = lookup(CAPTURE_ENV) {
            config.capture = parse_flag(&raw)?;
        }

        Ok(config)
    }
}

fn parse_depth(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(ConfigError::InvalidDepth(raw.to_string())),
    }
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(raw.to_string())),
    }
}

static ACTIVE: Lazy<ArcSwap<Config>> = Lazy::new(|| {
    let config = Config::from_env().unwrap_or_else(|err| {
        tracing::warn!("Ignoring capture configuration: {err}");
        Config::default()
    });
    ArcSwap::from_pointee(config)
});

/// The configuration currently in effect.
pub fn current() -> Arc<Config> {
    ACTIVE.load_full()
}

/// Replace the active configuration for all subsequent captures.
pub fn set(config: Config) {
    tracing::debug!(
        "Capture configuration set: max_depth={}, capture={}",
        config.max_depth,
        config.capture
    );
    ACTIVE.store(Arc::new(config));
}
