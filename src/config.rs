// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! These settings mirror the user preferences the apps expose: whether
//! health-platform workouts are merged into the history at all, and
//! whether duplicates of locally recorded activities are hidden.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Merge health-platform workouts into the activity history
    pub integrate_platform_activities: bool,
    /// Drop platform workouts whose time range overlaps a local
    /// activity (or an earlier platform workout)
    pub hide_platform_duplicates: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Both settings default to enabled when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            integrate_platform_activities: env_flag("HEALTH_INTEGRATION_ENABLED", true)?,
            hide_platform_duplicates: env_flag("HEALTH_HIDE_DUPLICATES", true)?,
        })
    }

    /// Default config for tests: integration and dedup both on.
    pub fn test_default() -> Self {
        Self {
            integrate_platform_activities: true,
            hide_platform_duplicates: true,
        }
    }
}

/// Parse a boolean environment variable, falling back to `default` when
/// the variable is unset.
fn env_flag(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid(name)),
        },
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unparseable boolean environment variable: {0}")]
    Invalid(&'static str),
}
