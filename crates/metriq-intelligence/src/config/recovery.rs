// ABOUTME: Muscle recovery decay configuration
// ABOUTME: Elapsed-hour windows and the fatigue score assigned inside each window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Step-function decay from training time to fatigue score
///
/// A log younger than `acute_hours` scores `acute_score`, younger than
/// `moderate_hours` scores `moderate_score`, younger than `residual_hours`
/// scores `residual_score`, and anything older scores zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// End of the acute window (24 h)
    pub acute_hours: i64,
    /// End of the moderate window (48 h)
    pub moderate_hours: i64,
    /// End of the residual window (72 h)
    pub residual_hours: i64,
    /// Score inside the acute window (1.0)
    pub acute_score: f32,
    /// Score inside the moderate window (0.6)
    pub moderate_score: f32,
    /// Score inside the residual window (0.3)
    pub residual_score: f32,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            acute_hours: 24,
            moderate_hours: 48,
            residual_hours: 72,
            acute_score: 1.0,
            moderate_score: 0.6,
            residual_score: 0.3,
        }
    }
}

impl RecoveryConfig {
    /// Validate window ordering and score bounds
    ///
    /// # Errors
    ///
    /// Returns an error when windows are not strictly ascending or scores are
    /// outside `[0, 1]` or not descending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.acute_hours <= 0
            || self.acute_hours >= self.moderate_hours
            || self.moderate_hours >= self.residual_hours
        {
            return Err(ConfigError::InvalidRange(
                "recovery windows must be positive and strictly ascending",
            ));
        }
        let scores = [self.acute_score, self.moderate_score, self.residual_score];
        if scores.iter().any(|score| !(0.0..=1.0).contains(score)) {
            return Err(ConfigError::ValueOutOfRange(
                "recovery scores must be within [0, 1]",
            ));
        }
        if self.acute_score < self.moderate_score || self.moderate_score < self.residual_score {
            return Err(ConfigError::InvalidRange(
                "recovery scores must be descending",
            ));
        }
        Ok(())
    }
}
