// ABOUTME: Goal calculation configuration for BMR, activity scaling and macro targets
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, goal adjustments and macro caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Calculation Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Goal calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustments per fitness goal
    pub adjustments: GoalAdjustmentConfig,
    /// Macro split rules
    pub macros: MacroTargetConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Daily calorie adjustment per fitness goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Added to TDEE for fat loss (-500 kcal)
    pub lose_fat_kcal: f64,
    /// Added to TDEE for muscle gain (+300 kcal)
    pub gain_muscle_kcal: f64,
    /// Lowest calorie goal ever produced (1200 kcal)
    pub calorie_floor_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_fat_kcal: -500.0,
            gain_muscle_kcal: 300.0,
            calorie_floor_kcal: 1200.0,
        }
    }
}

/// Body-weight based macro targets with absolute caps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroTargetConfig {
    /// Protein per kg body weight (2.0 g)
    pub protein_g_per_kg: f64,
    /// Protein cap (250 g)
    pub protein_cap_g: f64,
    /// Fat per kg body weight (0.9 g)
    pub fat_g_per_kg: f64,
    /// Fat cap (100 g)
    pub fat_cap_g: f64,
    /// Energy per gram of protein (4 kcal)
    pub kcal_per_g_protein: f64,
    /// Energy per gram of carbohydrate (4 kcal)
    pub kcal_per_g_carbs: f64,
    /// Energy per gram of fat (9 kcal)
    pub kcal_per_g_fat: f64,
}

impl Default for MacroTargetConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 2.0,
            protein_cap_g: 250.0,
            fat_g_per_kg: 0.9,
            fat_cap_g: 100.0,
            kcal_per_g_protein: 4.0,
            kcal_per_g_carbs: 4.0,
            kcal_per_g_fat: 9.0,
        }
    }
}

impl GoalConfig {
    /// Validate goal configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the calorie floor, macro caps or energy densities are not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adjustments.calorie_floor_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_floor_kcal must be > 0",
            ));
        }
        if self.macros.protein_cap_g <= 0.0 || self.macros.fat_cap_g <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("macro caps must be > 0"));
        }
        if self.macros.kcal_per_g_protein <= 0.0
            || self.macros.kcal_per_g_carbs <= 0.0
            || self.macros.kcal_per_g_fat <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "energy densities must be > 0",
            ));
        }
        let factors = &self.activity_factors;
        if factors.sedentary > factors.lightly_active
            || factors.lightly_active > factors.moderately_active
            || factors.moderately_active > factors.very_active
            || factors.very_active > factors.extra_active
        {
            return Err(ConfigError::InvalidRange(
                "activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}
