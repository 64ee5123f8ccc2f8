// ABOUTME: Food ingestion from the nutrition database into the food diary
// ABOUTME: Resolves per-100g nutrients, scales them to the eaten portion and timestamps the entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Ingestion
//!
//! Search results only carry a subset of nutrients, so logging a food first
//! asks for the full details. When that lookup fails the search summary is
//! used instead and the failure is logged.
//!
//! Nutrient amounts from the database are per 100 g and are multiplied by
//! `weight / 100` before storage. A nutrient missing from the food counts as
//! zero.

use std::sync::Arc;

use chrono::{DateTime, Days, TimeZone, Utc};
use metriq_core::errors::{AppError, AppResult};
use metriq_core::models::{LoggedFood, MealType, Nutrient, NutrientTotals};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::external::{Food, FoodLookup, FoodNutrient, UsdaClient, DEFAULT_DATA_TYPES};
use crate::storage::FoodStore;

/// Name stored when the database gives no description
pub const UNKNOWN_FOOD_NAME: &str = "Unknown Food";

/// Database nutrient name for each tracked nutrient
const NUTRIENT_NAMES: [(Nutrient, &str); 20] = [
    (Nutrient::Calories, "Energy"),
    (Nutrient::Protein, "Protein"),
    (Nutrient::Carbs, "Carbohydrate, by difference"),
    (Nutrient::Fats, "Total lipid (fat)"),
    (Nutrient::Fiber, "Fiber, total dietary"),
    (Nutrient::Sugar, "Sugars, total including NLEA"),
    (Nutrient::Sodium, "Sodium, Na"),
    (Nutrient::Cholesterol, "Cholesterol"),
    (Nutrient::Potassium, "Potassium, K"),
    (Nutrient::SaturatedFat, "Fatty acids, total saturated"),
    (Nutrient::VitaminD, "Vitamin D (D2 + D3)"),
    (Nutrient::VitaminB12, "Vitamin B-12"),
    (Nutrient::Folate, "Folate, total"),
    (Nutrient::VitaminA, "Vitamin A, RAE"),
    (Nutrient::VitaminC, "Vitamin C, total ascorbic acid"),
    (Nutrient::Iron, "Iron, Fe"),
    (Nutrient::Calcium, "Calcium, Ca"),
    (Nutrient::Magnesium, "Magnesium, Mg"),
    (Nutrient::Iodine, "Iodine, I"),
    (Nutrient::Zinc, "Zinc, Zn"),
];

/// Energy is reported in both kcal and kJ; only kcal is used
const ENERGY_UNIT: &str = "KCAL";

/// Searches the nutrition database and logs foods into the diary
#[derive(Clone)]
pub struct FoodIngestor {
    lookup: Arc<dyn FoodLookup>,
    store: Arc<dyn FoodStore>,
}

impl FoodIngestor {
    /// Create an ingestor over a lookup service and a food store
    #[must_use]
    pub fn new(lookup: Arc<dyn FoodLookup>, store: Arc<dyn FoodStore>) -> Self {
        Self { lookup, store }
    }

    /// Create an ingestor backed by the USDA client described in `config`
    ///
    /// # Errors
    ///
    /// Returns a config error when no USDA API key is configured
    pub fn from_config(config: &AppConfig, store: Arc<dyn FoodStore>) -> AppResult<Self> {
        if config.usda.api_key.trim().is_empty() {
            return Err(AppError::config(
                "USDA API key not configured. Set USDA_API_KEY",
            ));
        }
        info!(base_url = %config.usda.base_url, "Using USDA FoodData Central for food lookup");
        Ok(Self::new(
            Arc::new(UsdaClient::new(config.usda.clone())),
            store,
        ))
    }

    /// Search with the default data-type filter
    ///
    /// # Errors
    ///
    /// Returns an error when the lookup service fails
    pub async fn search(&self, query: &str) -> AppResult<Vec<Food>> {
        self.lookup.search_foods(query, &DEFAULT_DATA_TYPES).await
    }

    /// Log `weight_grams` of a searched food into the diary
    ///
    /// `offset_days` is how many days before today the food was eaten. The
    /// entry is stamped `now` for today and local noon otherwise, so it always
    /// falls inside that day's range.
    ///
    /// # Errors
    ///
    /// Returns an error only when the store rejects the insert
    pub async fn log_food<Tz: TimeZone>(
        &self,
        summary: &Food,
        weight_grams: f64,
        offset_days: u32,
        meal: MealType,
        now: &DateTime<Tz>,
    ) -> AppResult<LoggedFood> {
        let timestamp = entry_timestamp(offset_days, now);
        let details = match self.lookup.get_food_details(summary.fdc_id).await {
            Ok(details) => details,
            Err(e) => {
                warn!(
                    fdc_id = summary.fdc_id,
                    error = %e,
                    "Food details unavailable, falling back to search summary"
                );
                summary.clone()
            }
        };

        let mut food = build_logged_food(&details, weight_grams, meal, timestamp);
        food.id = self.store.insert_food(food.clone()).await?;

        info!(
            food_id = food.id,
            fdc_id = summary.fdc_id,
            weight_grams,
            meal = meal.tag(),
            "Food logged"
        );
        Ok(food)
    }
}

/// Scale a food's per-100g nutrients to `weight_grams`
#[must_use]
pub fn build_logged_food(
    food: &Food,
    weight_grams: f64,
    meal: MealType,
    timestamp: DateTime<Utc>,
) -> LoggedFood {
    let factor = weight_grams / 100.0;
    let nutrients = NUTRIENT_NAMES
        .iter()
        .fold(NutrientTotals::default(), |totals, &(nutrient, name)| {
            let unit = (nutrient == Nutrient::Calories).then_some(ENERGY_UNIT);
            totals.with(nutrient, nutrient_value(&food.food_nutrients, name, unit) * factor)
        });

    let name = if food.description.trim().is_empty() {
        UNKNOWN_FOOD_NAME.to_owned()
    } else {
        food.description.clone()
    };

    LoggedFood::new(name, nutrients, meal, weight_grams, timestamp)
}

/// First nutrient with exactly `name` (and exactly `unit`, when given)
fn nutrient_value(nutrients: &[FoodNutrient], name: &str, unit: Option<&str>) -> f64 {
    nutrients
        .iter()
        .find(|n| {
            n.nutrient_name == name
                && match unit {
                    Some(unit) => n.unit_name == unit,
                    None => true,
                }
        })
        .map_or(0.0, |n| n.amount)
}

/// `now` for today, local noon of the target day otherwise
fn entry_timestamp<Tz: TimeZone>(offset_days: u32, now: &DateTime<Tz>) -> DateTime<Utc> {
    let now_utc = now.with_timezone(&Utc);
    if offset_days == 0 {
        return now_utc;
    }

    let tz = now.timezone();
    now.date_naive()
        .checked_sub_days(Days::new(u64::from(offset_days)))
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .and_then(|noon| tz.from_local_datetime(&noon).earliest())
        .map_or_else(
            || {
                warn!(offset_days, "Could not resolve local noon, stamping entry with now");
                now_utc
            },
            |noon| noon.with_timezone(&Utc),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    #[test]
    fn energy_requires_exact_kcal_unit() {
        let nutrients = vec![
            FoodNutrient::new("Energy", "kJ", 690.0),
            FoodNutrient::new("Energy", "kcal", 170.0),
            FoodNutrient::new("Energy", "KCAL", 165.0),
        ];
        assert!((nutrient_value(&nutrients, "Energy", Some(ENERGY_UNIT)) - 165.0).abs() < 1e-9);
        assert!((nutrient_value(&nutrients, "Energy", None) - 690.0).abs() < 1e-9);
        assert!(nutrient_value(&nutrients, "Protein", None).abs() < f64::EPSILON);
    }

    #[test]
    fn past_entries_land_on_local_noon() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 3, 10, 8, 30, 0).unwrap();

        assert_eq!(entry_timestamp(0, &now), now.with_timezone(&Utc));

        let stamped = entry_timestamp(2, &now).with_timezone(&tz);
        assert_eq!(stamped.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
        assert_eq!(stamped.time(), chrono::NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }
}
