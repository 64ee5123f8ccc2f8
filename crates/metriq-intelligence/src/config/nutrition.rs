// ABOUTME: Nutrition aggregation configuration for history windows and deficiency analysis
// ABOUTME: Deficiency ratio, report sizes, day-offset bounds and recommended daily amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Aggregation Configuration
//!
//! Default daily amounts follow the adult RDA tables of the
//! NIH Office of Dietary Supplements.

use super::error::ConfigError;
use crate::nutrition_aggregator::NutrientGoals;
use serde::{Deserialize, Serialize};

/// Nutrition aggregation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// A nutrient is deficient below `goal * deficiency_ratio` (0.75)
    pub deficiency_ratio: f64,
    /// Deficiencies kept in a report, most severe first (3)
    pub max_deficiencies: usize,
    /// Contributing foods listed per deficiency (3)
    pub max_contributors: usize,
    /// Days covered by the history view (7)
    pub history_window_days: u32,
    /// Furthest day the diary can look back (30)
    pub max_day_offset: u32,
    /// Recommended daily amounts for deficiency analysis
    pub daily_goals: NutrientGoals,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            deficiency_ratio: 0.75,
            max_deficiencies: 3,
            max_contributors: 3,
            history_window_days: 7,
            max_day_offset: 30,
            daily_goals: NutrientGoals::recommended_daily(),
        }
    }
}

impl NutritionConfig {
    /// Validate nutrition configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the deficiency ratio is outside `(0, 1]`, a report
    /// size or the history window is zero, or a goal is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.deficiency_ratio > 0.0 && self.deficiency_ratio <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "deficiency_ratio must be in (0, 1]",
            ));
        }
        if self.max_deficiencies == 0 || self.max_contributors == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "report sizes must be > 0",
            ));
        }
        if self.history_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "history_window_days must be > 0",
            ));
        }
        if self.daily_goals.iter().any(|(_, amount)| amount < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "daily goals must not be negative",
            ));
        }
        Ok(())
    }
}
