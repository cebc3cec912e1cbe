//! Main application configuration
//!
//! This module defines the top-level configuration for the draft engine and
//! its tooling, including environment variable loading, TOML files, and
//! validation.

use crate::config::{EloConfig, MatchmakingConfig};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub matchmaking: MatchmakingConfig,
    pub rating: EloConfig,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "court-draft".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Parse an environment variable if present
fn env_override<T: FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("Invalid {} value: {}", key, raw)),
        Err(_) => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; environment variables still win
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&raw)?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from TOML text; missing keys take defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(raw).map_err(|e| anyhow!("Invalid configuration TOML: {}", e))?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Some(name) = env_override("SERVICE_NAME")? {
            self.service.name = name;
        }
        if let Some(log_level) = env_override("LOG_LEVEL")? {
            self.service.log_level = log_level;
        }

        // Draft settings
        if let Some(size) = env_override("MIN_TEAM_SIZE")? {
            self.matchmaking.min_team_size = size;
        }
        if let Some(size) = env_override("MAX_TEAM_SIZE")? {
            self.matchmaking.max_team_size = size;
        }
        if let Some(count) = env_override("MAX_COURT_COUNT")? {
            self.matchmaking.max_court_count = count;
        }
        if let Some(size) = env_override("MAX_GROUP_SIZE")? {
            self.matchmaking.max_group_size = size;
        }
        if let Some(fallback) = env_override("FALLBACK_UNPLACED_GROUPS")? {
            self.matchmaking.fallback_unplaced_groups = fallback;
        }
        if let Some(span) = env_override("FAIRNESS_SPAN")? {
            self.matchmaking.fairness_span = span;
        }
        if let Some(iterations) = env_override("SWAP_MAX_ITERATIONS")? {
            self.matchmaking.optimizer.max_iterations = iterations;
        }
        if let Some(target) = env_override("SWAP_TARGET_FAIRNESS")? {
            self.matchmaking.optimizer.target_fairness = target;
        }
        if let Some(improvement) = env_override("SWAP_MIN_IMPROVEMENT")? {
            self.matchmaking.optimizer.min_improvement = improvement;
        }

        // Rating settings
        if let Some(k) = env_override("ELO_K_FACTOR")? {
            self.rating.k_factor = k;
        }
        if let Some(scale) = env_override("ELO_SCALE")? {
            self.rating.scale = scale;
        }
        if let Some(floor) = env_override::<i32>("ELO_RATING_FLOOR")? {
            self.rating.rating_floor = Some(floor);
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.matchmaking.validate()?;
    config.rating.validate()?;

    Ok(())
}
