// ABOUTME: Application configuration loaded from environment variables
// ABOUTME: Exercise catalog location, USDA client settings, session tick rate and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use metriq_core::errors::{AppError, AppResult};
use tracing::info;

use crate::external::UsdaClientConfig;
use crate::logging::LoggingConfig;

/// Default session timer tick in milliseconds
pub const DEFAULT_SESSION_TICK_MS: u64 = 1000;

/// Workout session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Interval between elapsed-time updates
    pub tick_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_SESSION_TICK_MS),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Exercise feed on disk; `None` means no catalog is configured
    pub catalog_path: Option<PathBuf>,
    /// Food lookup client settings
    pub usda: UsdaClientConfig,
    /// Workout session settings
    pub session: SessionConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns a config error when a numeric variable is set but malformed
    /// or out of range
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let defaults = UsdaClientConfig::default();
        let usda = UsdaClientConfig {
            api_key: env::var("USDA_API_KEY").unwrap_or_default(),
            base_url: env::var("USDA_BASE_URL").unwrap_or(defaults.base_url),
            cache_ttl_secs: parsed_env_or("USDA_CACHE_TTL_SECS", defaults.cache_ttl_secs)?,
            rate_limit_per_minute: parsed_env_or(
                "USDA_RATE_LIMIT_PER_MINUTE",
                defaults.rate_limit_per_minute,
            )?,
        };
        if usda.rate_limit_per_minute == 0 {
            return Err(AppError::config(
                "USDA_RATE_LIMIT_PER_MINUTE must be greater than zero",
            ));
        }

        let tick_ms = parsed_env_or("METRIQ_SESSION_TICK_MS", DEFAULT_SESSION_TICK_MS)?;
        if tick_ms == 0 {
            return Err(AppError::config(
                "METRIQ_SESSION_TICK_MS must be greater than zero",
            ));
        }

        let config = Self {
            catalog_path: env::var("METRIQ_EXERCISE_CATALOG")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            usda,
            session: SessionConfig {
                tick_interval: Duration::from_millis(tick_ms),
            },
            logging: LoggingConfig::from_env(),
        };

        info!(
            catalog = ?config.catalog_path,
            usda_key_present = !config.usda.api_key.is_empty(),
            tick_ms,
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// Parse an env var, keeping `default` when it is unset
fn parsed_env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("Invalid value for {key}: {raw}"))),
        Err(_) => Ok(default),
    }
}
