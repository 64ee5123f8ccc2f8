// ABOUTME: Nutrition tracking models for logged food intake
// ABOUTME: LoggedFood, MealType, the tracked Nutrient set and NutrientTotals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// All meal types in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Tag persisted alongside a logged food
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Breakfast => "BREAKFAST",
            Self::Lunch => "LUNCH",
            Self::Dinner => "DINNER",
            Self::Snack => "SNACK",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    /// Parse a stored tag; tags are exact upper-case names
    fn from_str(tag: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|meal| meal.tag() == tag)
            .ok_or_else(|| AppError::data_integrity(format!("unknown meal type tag '{tag}'")))
    }
}

/// The twenty nutrient fields tracked per logged food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy
    Calories,
    /// Protein
    Protein,
    /// Carbohydrate
    Carbs,
    /// Total fat
    Fats,
    /// Dietary fiber
    Fiber,
    /// Total sugars
    Sugar,
    /// Sodium
    Sodium,
    /// Cholesterol
    Cholesterol,
    /// Potassium
    Potassium,
    /// Saturated fatty acids
    SaturatedFat,
    /// Vitamin D (D2 + D3)
    VitaminD,
    /// Vitamin B12
    VitaminB12,
    /// Folate
    Folate,
    /// Vitamin A (RAE)
    VitaminA,
    /// Vitamin C
    VitaminC,
    /// Iron
    Iron,
    /// Calcium
    Calcium,
    /// Magnesium
    Magnesium,
    /// Iodine
    Iodine,
    /// Zinc
    Zinc,
}

impl Nutrient {
    /// Every tracked nutrient
    pub const ALL: [Self; 20] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fats,
        Self::Fiber,
        Self::Sugar,
        Self::Sodium,
        Self::Cholesterol,
        Self::Potassium,
        Self::SaturatedFat,
        Self::VitaminD,
        Self::VitaminB12,
        Self::Folate,
        Self::VitaminA,
        Self::VitaminC,
        Self::Iron,
        Self::Calcium,
        Self::Magnesium,
        Self::Iodine,
        Self::Zinc,
    ];

    /// Micronutrients with a recommended daily amount
    pub const MICRONUTRIENTS: [Self; 10] = [
        Self::VitaminD,
        Self::VitaminB12,
        Self::Folate,
        Self::VitaminA,
        Self::VitaminC,
        Self::Iron,
        Self::Calcium,
        Self::Magnesium,
        Self::Iodine,
        Self::Zinc,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Protein => "Protein",
            Self::Carbs => "Carbs",
            Self::Fats => "Fats",
            Self::Fiber => "Fiber",
            Self::Sugar => "Sugar",
            Self::Sodium => "Sodium",
            Self::Cholesterol => "Cholesterol",
            Self::Potassium => "Potassium",
            Self::SaturatedFat => "Saturated Fat",
            Self::VitaminD => "Vitamin D",
            Self::VitaminB12 => "Vitamin B12",
            Self::Folate => "Folate",
            Self::VitaminA => "Vitamin A",
            Self::VitaminC => "Vitamin C",
            Self::Iron => "Iron",
            Self::Calcium => "Calcium",
            Self::Magnesium => "Magnesium",
            Self::Iodine => "Iodine",
            Self::Zinc => "Zinc",
        }
    }

    /// Unit the amount is expressed in
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein
            | Self::Carbs
            | Self::Fats
            | Self::Fiber
            | Self::Sugar
            | Self::SaturatedFat => "g",
            Self::Sodium
            | Self::Cholesterol
            | Self::Potassium
            | Self::VitaminC
            | Self::Iron
            | Self::Calcium
            | Self::Magnesium
            | Self::Zinc => "mg",
            Self::VitaminD | Self::VitaminB12 | Self::Folate | Self::VitaminA | Self::Iodine => {
                "mcg"
            }
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Amounts of every tracked nutrient
///
/// Used both for a single logged food (already scaled to the eaten weight)
/// and for field-wise sums over many foods. Missing fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrate (g)
    pub carbs: f64,
    /// Total fat (g)
    pub fats: f64,
    /// Fiber (g)
    pub fiber: f64,
    /// Sugars (g)
    pub sugar: f64,
    /// Sodium (mg)
    pub sodium: f64,
    /// Cholesterol (mg)
    pub cholesterol: f64,
    /// Potassium (mg)
    pub potassium: f64,
    /// Saturated fat (g)
    pub saturated_fat: f64,
    /// Vitamin D (mcg)
    pub vitamin_d: f64,
    /// Vitamin B12 (mcg)
    pub vitamin_b12: f64,
    /// Folate (mcg)
    pub folate: f64,
    /// Vitamin A (mcg RAE)
    pub vitamin_a: f64,
    /// Vitamin C (mg)
    pub vitamin_c: f64,
    /// Iron (mg)
    pub iron: f64,
    /// Calcium (mg)
    pub calcium: f64,
    /// Magnesium (mg)
    pub magnesium: f64,
    /// Iodine (mcg)
    pub iodine: f64,
    /// Zinc (mg)
    pub zinc: f64,
}

impl NutrientTotals {
    /// Amount of one nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fats => self.fats,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
            Nutrient::Sodium => self.sodium,
            Nutrient::Cholesterol => self.cholesterol,
            Nutrient::Potassium => self.potassium,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::VitaminD => self.vitamin_d,
            Nutrient::VitaminB12 => self.vitamin_b12,
            Nutrient::Folate => self.folate,
            Nutrient::VitaminA => self.vitamin_a,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::Iron => self.iron,
            Nutrient::Calcium => self.calcium,
            Nutrient::Magnesium => self.magnesium,
            Nutrient::Iodine => self.iodine,
            Nutrient::Zinc => self.zinc,
        }
    }

    /// Mutable access to one nutrient
    pub fn get_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fats => &mut self.fats,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::Sugar => &mut self.sugar,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::Cholesterol => &mut self.cholesterol,
            Nutrient::Potassium => &mut self.potassium,
            Nutrient::SaturatedFat => &mut self.saturated_fat,
            Nutrient::VitaminD => &mut self.vitamin_d,
            Nutrient::VitaminB12 => &mut self.vitamin_b12,
            Nutrient::Folate => &mut self.folate,
            Nutrient::VitaminA => &mut self.vitamin_a,
            Nutrient::VitaminC => &mut self.vitamin_c,
            Nutrient::Iron => &mut self.iron,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Magnesium => &mut self.magnesium,
            Nutrient::Iodine => &mut self.iodine,
            Nutrient::Zinc => &mut self.zinc,
        }
    }

    /// Set one nutrient, builder style
    #[must_use]
    pub fn with(mut self, nutrient: Nutrient, amount: f64) -> Self {
        *self.get_mut(nutrient) = amount;
        self
    }

    /// Every amount multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let mut scaled = Self::default();
        for nutrient in Nutrient::ALL {
            *scaled.get_mut(nutrient) = self.get(nutrient) * factor;
        }
        scaled
    }
}

impl AddAssign<&Self> for NutrientTotals {
    fn add_assign(&mut self, other: &Self) {
        for nutrient in Nutrient::ALL {
            *self.get_mut(nutrient) += other.get(nutrient);
        }
    }
}

/// A food entry in the user's diary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedFood {
    /// Store-assigned identifier, `0` before the first insert
    #[serde(default)]
    pub id: i64,
    /// Food description
    pub name: String,
    /// Absolute nutrient amounts for the eaten portion
    #[serde(flatten)]
    pub nutrients: NutrientTotals,
    /// Stored meal tag, see [`MealType::tag`]
    pub meal_type: String,
    /// Eaten portion in grams
    #[serde(default)]
    pub weight_grams: f64,
    /// When the food was eaten
    pub timestamp: DateTime<Utc>,
}

impl LoggedFood {
    /// Create an entry for a known meal type
    pub fn new(
        name: impl Into<String>,
        nutrients: NutrientTotals,
        meal: MealType,
        weight_grams: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            nutrients,
            meal_type: meal.tag().to_owned(),
            weight_grams,
            timestamp,
        }
    }

    /// Amount of one nutrient in this entry
    #[must_use]
    pub const fn amount(&self, nutrient: Nutrient) -> f64 {
        self.nutrients.get(nutrient)
    }

    /// Decode the stored meal tag
    ///
    /// # Errors
    ///
    /// Returns a `DataIntegrity` error when the tag is not a known meal type.
    pub fn meal(&self) -> AppResult<MealType> {
        self.meal_type.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_meal_tags_parse_exactly() {
        assert_eq!("DINNER".parse::<MealType>().unwrap(), MealType::Dinner);
        let error = "dinner".parse::<MealType>().unwrap_err();
        assert_eq!(error.code, ErrorCode::DataIntegrity);
    }

    #[test]
    fn test_accessors_cover_every_field() {
        let mut totals = NutrientTotals::default();
        for (index, nutrient) in Nutrient::ALL.into_iter().enumerate() {
            *totals.get_mut(nutrient) = f64::from(u32::try_from(index).unwrap() + 1);
        }
        let sum: f64 = Nutrient::ALL.into_iter().map(|n| totals.get(n)).sum();
        assert!((sum - 210.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_logged_food_json_is_flat() {
        let food: LoggedFood = serde_json::from_str(
            r#"{"name":"Oats","calories":150.0,"iron":2.0,"meal_type":"BREAKFAST",
                "weight_grams":40.0,"timestamp":"2025-03-04T08:00:00Z"}"#,
        )
        .unwrap();
        assert!((food.amount(Nutrient::Iron) - 2.0).abs() < f64::EPSILON);
        assert!(food.amount(Nutrient::Zinc).abs() < f64::EPSILON);
        assert_eq!(food.meal().unwrap(), MealType::Breakfast);
    }
}
