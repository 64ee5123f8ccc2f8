// ABOUTME: Daily calorie and macro goal calculation from the user body profile
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, goal adjustment and body-weight macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! Profile fields are free text; anything that does not parse counts as zero
//! and the calculation still completes. Results stay fractional until they are
//! persisted as [`UserGoals`], where they are truncated.

use metriq_core::models::{ActivityLevel, FitnessGoal, UserGoals, UserProfile};
use serde::{Deserialize, Serialize};

use crate::config::{ActivityFactorsConfig, BmrConfig, GoalConfig};

/// Calculated daily targets with the intermediate energy figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalBreakdown {
    /// Daily energy target (kcal)
    pub calorie_goal: f64,
    /// Daily protein target (g)
    pub protein_goal: f64,
    /// Daily carbohydrate target (g)
    pub carbs_goal: f64,
    /// Daily fat target (g)
    pub fats_goal: f64,
    /// Basal metabolic rate (kcal)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal)
    pub tdee: f64,
}

impl GoalBreakdown {
    /// Truncate every figure for persistence
    #[must_use]
    pub fn to_user_goals(&self) -> UserGoals {
        UserGoals {
            calorie_goal: truncate(self.calorie_goal),
            protein_goal: truncate(self.protein_goal),
            carbs_goal: truncate(self.carbs_goal),
            fats_goal: truncate(self.fats_goal),
            bmr: truncate(self.bmr),
            tdee: truncate(self.tdee),
        }
    }

    /// Same breakdown with every figure truncated toward zero
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            calorie_goal: self.calorie_goal.trunc(),
            protein_goal: self.protein_goal.trunc(),
            carbs_goal: self.carbs_goal.trunc(),
            fats_goal: self.fats_goal.trunc(),
            bmr: self.bmr.trunc(),
            tdee: self.tdee.trunc(),
        }
    }
}

/// Daily goal calculation
pub struct GoalCalculator;

impl GoalCalculator {
    /// Mifflin-St Jeor basal metabolic rate
    #[must_use]
    pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, is_male: bool, config: &BmrConfig) -> f64 {
        let sex_constant = if is_male {
            config.msj_male_constant
        } else {
            config.msj_female_constant
        };
        config.msj_weight_coef * weight_kg
            + config.msj_height_coef * height_cm
            + config.msj_age_coef * f64::from(age)
            + sex_constant
    }

    /// Activity multiplier for a tier
    #[must_use]
    pub const fn activity_factor(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
        match level {
            ActivityLevel::Sedentary => config.sedentary,
            ActivityLevel::LightlyActive => config.lightly_active,
            ActivityLevel::ModeratelyActive => config.moderately_active,
            ActivityLevel::VeryActive => config.very_active,
            ActivityLevel::ExtraActive => config.extra_active,
        }
    }

    /// Calorie goal after the goal adjustment and the floor
    #[must_use]
    pub fn adjusted_calories(tdee: f64, goal: FitnessGoal, config: &GoalConfig) -> f64 {
        let adjusted = match goal {
            FitnessGoal::LoseFat => tdee + config.adjustments.lose_fat_kcal,
            FitnessGoal::GainMuscle => tdee + config.adjustments.gain_muscle_kcal,
            FitnessGoal::MaintainWeight => tdee,
        };
        adjusted.max(config.adjustments.calorie_floor_kcal)
    }

    /// Full goal calculation for a profile
    #[must_use]
    pub fn calculate(profile: &UserProfile, config: &GoalConfig) -> GoalBreakdown {
        let weight = profile.weight_value();
        let bmr = Self::bmr(
            weight,
            profile.height_value(),
            profile.age_years(),
            profile.is_male(),
            &config.bmr,
        );
        let tdee = bmr * Self::activity_factor(profile.activity(), &config.activity_factors);
        let calorie_goal = Self::adjusted_calories(tdee, profile.goal(), config);

        let macros = &config.macros;
        let protein_goal = (macros.protein_g_per_kg * weight).min(macros.protein_cap_g);
        let fats_goal = (macros.fat_g_per_kg * weight).min(macros.fat_cap_g);
        let carbs_kcal = (calorie_goal
            - macros.kcal_per_g_protein * protein_goal
            - macros.kcal_per_g_fat * fats_goal)
            .max(0.0);
        let carbs_goal = carbs_kcal / macros.kcal_per_g_carbs;

        GoalBreakdown {
            calorie_goal,
            protein_goal,
            carbs_goal,
            fats_goal,
            bmr,
            tdee,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_never_rounds_up() {
        assert_eq!(truncate(1799.99), 1799);
        assert_eq!(truncate(-3.0), 0);
        assert_eq!(truncate(f64::NAN), 0);
    }
}
