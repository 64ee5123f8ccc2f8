// ABOUTME: Configuration error types for intelligence config validation
// ABOUTME: Defines error variants for invalid ranges, unparsable overrides and out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for intelligence config validation.

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Ordered thresholds are not in order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Override value could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Single value outside its accepted bounds
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
