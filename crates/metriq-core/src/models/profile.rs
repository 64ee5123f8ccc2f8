// ABOUTME: User body profile and persisted daily macro goals
// ABOUTME: Profile fields stay as entered text and are parsed leniently on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parsing::{lenient_f64, lenient_u32};

/// Activity tier used to scale BMR into total daily energy expenditure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days per week
    LightlyActive,
    /// Moderate exercise 3-5 days per week
    ModeratelyActive,
    /// Hard exercise 6-7 days per week
    VeryActive,
    /// Physical job or twice-daily training
    ExtraActive,
}

impl ActivityLevel {
    /// All tiers in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Label shown in the profile picker and persisted as text
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::ExtraActive => "Extra Active",
        }
    }

    /// Parse a stored label, unknown text falls back to `Sedentary`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == label.trim())
            .unwrap_or_default()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body-composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FitnessGoal {
    /// Keep current weight
    #[default]
    MaintainWeight,
    /// Caloric deficit
    LoseFat,
    /// Caloric surplus
    GainMuscle,
}

impl FitnessGoal {
    /// All goals in picker order
    pub const ALL: [Self; 3] = [Self::MaintainWeight, Self::LoseFat, Self::GainMuscle];

    /// Label shown in the profile picker and persisted as text
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MaintainWeight => "Maintain Weight",
            Self::LoseFat => "Lose Fat",
            Self::GainMuscle => "Gain Muscle",
        }
    }

    /// Parse a stored label, unknown text falls back to `MaintainWeight`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|goal| goal.label() == label.trim())
            .unwrap_or_default()
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body profile as entered on the profile screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Age in years
    pub age: String,
    /// Free-text gender; only `"male"` (any case) selects the male BMR offset
    pub gender: String,
    /// Height in centimeters
    pub height_cm: String,
    /// Weight in kilograms
    pub weight_kg: String,
    /// Activity tier label
    pub activity_level: String,
    /// Fitness goal label
    pub fitness_goal: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: "30".into(),
            gender: "Male".into(),
            height_cm: "175".into(),
            weight_kg: "75".into(),
            activity_level: ActivityLevel::Sedentary.label().into(),
            fitness_goal: FitnessGoal::MaintainWeight.label().into(),
        }
    }
}

impl UserProfile {
    /// Age, `0` when not a whole number
    #[must_use]
    pub fn age_years(&self) -> u32 {
        lenient_u32(&self.age)
    }

    /// Height, `0.0` when malformed
    #[must_use]
    pub fn height_value(&self) -> f64 {
        lenient_f64(&self.height_cm)
    }

    /// Weight, `0.0` when malformed
    #[must_use]
    pub fn weight_value(&self) -> f64 {
        lenient_f64(&self.weight_kg)
    }

    /// Whether the male BMR offset applies
    #[must_use]
    pub fn is_male(&self) -> bool {
        self.gender.trim().eq_ignore_ascii_case("male")
    }

    /// Parsed activity tier
    #[must_use]
    pub fn activity(&self) -> ActivityLevel {
        ActivityLevel::from_label(&self.activity_level)
    }

    /// Parsed fitness goal
    #[must_use]
    pub fn goal(&self) -> FitnessGoal {
        FitnessGoal::from_label(&self.fitness_goal)
    }
}

/// Daily targets persisted after a goal calculation
///
/// Values are whole numbers; fractional results are truncated when stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGoals {
    /// Daily energy target (kcal)
    pub calorie_goal: u32,
    /// Daily protein target (g)
    pub protein_goal: u32,
    /// Daily carbohydrate target (g)
    pub carbs_goal: u32,
    /// Daily fat target (g)
    pub fats_goal: u32,
    /// Basal metabolic rate the goals were derived from (kcal)
    pub bmr: u32,
    /// Total daily energy expenditure the goals were derived from (kcal)
    pub tdee: u32,
}

impl Default for UserGoals {
    fn default() -> Self {
        Self {
            calorie_goal: 2000,
            protein_goal: 150,
            carbs_goal: 200,
            fats_goal: 67,
            bmr: 0,
            tdee: 0,
        }
    }
}
