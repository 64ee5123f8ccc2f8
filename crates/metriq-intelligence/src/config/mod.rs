// ABOUTME: Intelligence configuration for goal, recovery, nutrition and volume calculations
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Every coefficient and threshold used by the calculators lives here with the
//! documented defaults, so a calculator never hardcodes a number.
//!
//! # Module Structure
//!
//! - `goals` - BMR coefficients, activity factors, goal adjustments, macro caps
//! - `recovery` - Recovery decay windows and scores
//! - `nutrition` - Deficiency analysis and history windows
//! - `volume` - Weekly volume buckets
//!
//! # Environment Overrides
//!
//! `IntelligenceConfig::load` starts from defaults and applies `METRIQ_*`
//! variables, e.g. `METRIQ_GOAL_CALORIE_FLOOR=1400` or
//! `METRIQ_RECOVERY_ACUTE_HOURS=36`.

pub mod error;
pub mod goals;
pub mod nutrition;
pub mod recovery;
pub mod volume;

pub use error::ConfigError;
pub use goals::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, GoalConfig, MacroTargetConfig,
};
pub use nutrition::NutritionConfig;
pub use recovery::RecoveryConfig;
pub use volume::VolumeConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for daily goal calculation
    pub goals: GoalConfig,
    /// Configuration for muscle recovery scoring
    pub recovery: RecoveryConfig,
    /// Configuration for nutrient aggregation and deficiency analysis
    pub nutrition: NutritionConfig,
    /// Configuration for training volume aggregation
    pub volume: VolumeConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        config = config.apply_env_overrides()?;

        config.validate()?;

        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.goals.validate()?;
        self.recovery.validate()?;
        self.nutrition.validate()?;
        self.volume.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Goal overrides
        Self::apply_env_var(
            "METRIQ_GOAL_CALORIE_FLOOR",
            &mut self.goals.adjustments.calorie_floor_kcal,
        )?;
        Self::apply_env_var(
            "METRIQ_GOAL_LOSE_FAT_KCAL",
            &mut self.goals.adjustments.lose_fat_kcal,
        )?;
        Self::apply_env_var(
            "METRIQ_GOAL_GAIN_MUSCLE_KCAL",
            &mut self.goals.adjustments.gain_muscle_kcal,
        )?;
        Self::apply_env_var(
            "METRIQ_GOAL_PROTEIN_G_PER_KG",
            &mut self.goals.macros.protein_g_per_kg,
        )?;
        Self::apply_env_var(
            "METRIQ_GOAL_PROTEIN_CAP_G",
            &mut self.goals.macros.protein_cap_g,
        )?;
        Self::apply_env_var("METRIQ_GOAL_FAT_G_PER_KG", &mut self.goals.macros.fat_g_per_kg)?;
        Self::apply_env_var("METRIQ_GOAL_FAT_CAP_G", &mut self.goals.macros.fat_cap_g)?;

        // Recovery overrides
        Self::apply_env_var("METRIQ_RECOVERY_ACUTE_HOURS", &mut self.recovery.acute_hours)?;
        Self::apply_env_var(
            "METRIQ_RECOVERY_MODERATE_HOURS",
            &mut self.recovery.moderate_hours,
        )?;
        Self::apply_env_var(
            "METRIQ_RECOVERY_RESIDUAL_HOURS",
            &mut self.recovery.residual_hours,
        )?;

        // Nutrition overrides
        Self::apply_env_var(
            "METRIQ_NUTRITION_DEFICIENCY_RATIO",
            &mut self.nutrition.deficiency_ratio,
        )?;
        Self::apply_env_var(
            "METRIQ_NUTRITION_HISTORY_DAYS",
            &mut self.nutrition.history_window_days,
        )?;
        Self::apply_env_var(
            "METRIQ_NUTRITION_MAX_DAY_OFFSET",
            &mut self.nutrition.max_day_offset,
        )?;

        // Volume overrides
        Self::apply_env_var("METRIQ_VOLUME_WEEKS", &mut self.volume.weeks)?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_recovery_windows_must_ascend() {
        let mut config = IntelligenceConfig::default();
        config.recovery.moderate_hours = config.recovery.residual_hours;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_deficiency_ratio_bounds() {
        let mut config = IntelligenceConfig::default();
        config.nutrition.deficiency_ratio = 0.0;
        assert!(config.validate().is_err());
        config.nutrition.deficiency_ratio = 1.0;
        assert!(config.validate().is_ok());
    }
}
