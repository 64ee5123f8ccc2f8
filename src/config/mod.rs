// ABOUTME: Configuration management module for application settings
// ABOUTME: Environment-driven app config plus re-exports of the calculator configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Metriq
//!
//! - **Environment**: Catalog location, food lookup, session and logging settings
//! - **Intelligence**: Calculator coefficients and thresholds, re-exported from
//!   `metriq-intelligence`

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, SessionConfig, DEFAULT_SESSION_TICK_MS};
pub use metriq_intelligence::config::{
    ConfigError, GoalConfig, IntelligenceConfig, NutritionConfig, RecoveryConfig, VolumeConfig,
};
