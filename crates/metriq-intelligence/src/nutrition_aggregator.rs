// ABOUTME: Nutrient aggregation over logged foods for daily totals, history and deficiencies
// ABOUTME: Also derives local day windows and dashboard progress ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Aggregator Module
//!
//! Foods are stored with absolute, already-scaled nutrient amounts, so
//! aggregation is plain field-wise summation. Date grouping uses the local
//! calendar date of the caller's time zone.
//!
//! # Deficiency analysis
//!
//! A nutrient with a positive goal is deficient when the day's total is below
//! `goal * deficiency_ratio`. Each deficiency lists the foods that contributed
//! most of it, and the report keeps the nutrients furthest from their goal.

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use metriq_core::models::{LoggedFood, MealType, Nutrient, NutrientTotals, UserGoals};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::config::NutritionConfig;

const DAY_MILLIS: i64 = 86_400_000;

/// Longest stretch of skipped local time searched past a missing midnight
const GAP_SCAN_MINUTES: i64 = 180;

/// Target daily amount per nutrient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientGoals(BTreeMap<Nutrient, f64>);

impl NutrientGoals {
    /// Adult recommended daily amounts for the tracked micronutrients
    #[must_use]
    pub fn recommended_daily() -> Self {
        Self(BTreeMap::from([
            (Nutrient::VitaminD, 15.0),
            (Nutrient::VitaminB12, 2.4),
            (Nutrient::Folate, 400.0),
            (Nutrient::VitaminA, 900.0),
            (Nutrient::VitaminC, 90.0),
            (Nutrient::Iron, 18.0),
            (Nutrient::Calcium, 1000.0),
            (Nutrient::Magnesium, 400.0),
            (Nutrient::Iodine, 150.0),
            (Nutrient::Zinc, 11.0),
        ]))
    }

    /// Macro goals from persisted user targets
    #[must_use]
    pub fn from_user_goals(goals: &UserGoals) -> Self {
        Self(BTreeMap::from([
            (Nutrient::Calories, f64::from(goals.calorie_goal)),
            (Nutrient::Protein, f64::from(goals.protein_goal)),
            (Nutrient::Carbs, f64::from(goals.carbs_goal)),
            (Nutrient::Fats, f64::from(goals.fats_goal)),
        ]))
    }

    /// Goal for one nutrient, `0.0` when none is set
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.0.get(&nutrient).copied().unwrap_or(0.0)
    }

    /// Set or replace a goal
    pub fn set(&mut self, nutrient: Nutrient, amount: f64) {
        self.0.insert(nutrient, amount);
    }

    /// Goals in nutrient order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0.iter().map(|(&nutrient, &amount)| (nutrient, amount))
    }
}

/// One nutrient below its goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deficiency {
    /// Deficient nutrient
    pub nutrient: Nutrient,
    /// Amount eaten
    pub current_amount: f64,
    /// Daily goal
    pub goal_amount: f64,
    /// Foods providing the most of this nutrient, largest first
    pub top_contributors: Vec<LoggedFood>,
}

impl Deficiency {
    /// Share of the goal reached
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.current_amount / self.goal_amount
    }
}

/// End-of-day deficiency report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientReport {
    /// Most severe deficiencies first
    pub deficiencies: Vec<Deficiency>,
}

/// Half-open UTC window `[start, end)` covering one local day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    /// Inclusive start
    pub start: DateTime<Utc>,
    /// Exclusive end
    pub end: DateTime<Utc>,
}

impl DayRange {
    /// Whether `instant` falls inside the window
    #[must_use]
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.start && *instant < self.end
    }
}

/// Gram shares of protein, carbohydrate and fat
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share in `[0, 1]`
    pub protein: f64,
    /// Carbohydrate share in `[0, 1]`
    pub carbs: f64,
    /// Fat share in `[0, 1]`
    pub fats: f64,
}

/// Nutrient aggregation
pub struct NutritionAggregator;

impl NutritionAggregator {
    /// Field-wise sum of all foods; zero for an empty slice
    #[must_use]
    pub fn daily_totals(foods: &[LoggedFood]) -> NutrientTotals {
        foods
            .iter()
            .fold(NutrientTotals::default(), |mut totals, food| {
                totals += &food.nutrients;
                totals
            })
    }

    /// Foods grouped by meal, preserving input order within a meal
    ///
    /// Records with an unknown meal tag are logged and left out.
    #[must_use]
    pub fn group_by_meal_type(foods: &[LoggedFood]) -> BTreeMap<MealType, Vec<LoggedFood>> {
        let mut groups: BTreeMap<MealType, Vec<LoggedFood>> = BTreeMap::new();
        for food in foods {
            match food.meal() {
                Ok(meal) => groups.entry(meal).or_default().push(food.clone()),
                Err(e) => warn!(food_id = food.id, error = %e, "Skipping logged food"),
            }
        }
        groups
    }

    /// Daily totals for dates after `today - window_days`, most recent first
    #[must_use]
    pub fn historical_daily_totals<Tz: TimeZone>(
        foods: &[LoggedFood],
        now: &DateTime<Tz>,
        window_days: u32,
    ) -> Vec<(NaiveDate, NutrientTotals)> {
        let tz = now.timezone();
        let cutoff = now
            .date_naive()
            .checked_sub_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MIN);

        let mut by_day: BTreeMap<NaiveDate, NutrientTotals> = BTreeMap::new();
        for food in foods {
            let date = food.timestamp.with_timezone(&tz).date_naive();
            if date > cutoff {
                *by_day.entry(date).or_default() += &food.nutrients;
            }
        }
        by_day.into_iter().rev().collect()
    }

    /// Nutrients below their goal, most severe first
    #[must_use]
    pub fn deficiency_report(
        foods: &[LoggedFood],
        goals: &NutrientGoals,
        config: &NutritionConfig,
    ) -> NutrientReport {
        let totals = Self::daily_totals(foods);

        let mut deficiencies: Vec<Deficiency> = goals
            .iter()
            .filter_map(|(nutrient, goal)| {
                let amount = totals.get(nutrient);
                if goal <= 0.0 || amount >= goal * config.deficiency_ratio {
                    return None;
                }
                let mut contributors = foods.to_vec();
                contributors
                    .sort_by(|a, b| b.amount(nutrient).total_cmp(&a.amount(nutrient)));
                contributors.truncate(config.max_contributors);
                Some(Deficiency {
                    nutrient,
                    current_amount: amount,
                    goal_amount: goal,
                    top_contributors: contributors,
                })
            })
            .collect();

        deficiencies.sort_by(|a, b| a.ratio().total_cmp(&b.ratio()));
        deficiencies.truncate(config.max_deficiencies);
        NutrientReport { deficiencies }
    }

    /// Local day `offset_days` before today as a UTC window
    ///
    /// A day whose midnight is skipped by DST starts at its first valid local
    /// time. If the boundaries cannot be computed at all (date overflow) the
    /// window falls back to the UTC day containing `now`.
    #[must_use]
    pub fn day_range<Tz: TimeZone>(offset_days: u32, now: &DateTime<Tz>) -> DayRange {
        let tz = now.timezone();
        let resolved = now
            .date_naive()
            .checked_sub_days(Days::new(u64::from(offset_days)))
            .and_then(|target| {
                let start = local_midnight(&tz, target)?;
                let end = local_midnight(&tz, target.checked_add_days(Days::new(1))?)?;
                Some(DayRange { start, end })
            });

        resolved.unwrap_or_else(|| {
            warn!(offset_days, "Could not resolve local day boundaries, using UTC day");
            utc_day_fallback(now.timestamp_millis())
        })
    }

    /// Clamp a diary navigation offset to `0..=max_offset`
    #[must_use]
    pub fn clamp_day_offset(offset: i64, max_offset: u32) -> u32 {
        u32::try_from(offset.clamp(0, i64::from(max_offset))).unwrap_or(0)
    }

    /// Foods whose timestamp falls inside `range`
    #[must_use]
    pub fn foods_in_range(foods: &[LoggedFood], range: &DayRange) -> Vec<LoggedFood> {
        foods
            .iter()
            .filter(|food| range.contains(&food.timestamp))
            .cloned()
            .collect()
    }

    /// Progress toward a goal in `[0, 1]`; zero when the goal is not positive
    #[must_use]
    pub fn goal_progress(current: f64, goal: f64) -> f64 {
        if goal <= 0.0 {
            return 0.0;
        }
        (current / goal).clamp(0.0, 1.0)
    }

    /// Protein, carbohydrate and fat as shares of their gram total
    #[must_use]
    pub fn macro_split(totals: &NutrientTotals) -> MacroSplit {
        let total = totals.protein + totals.carbs + totals.fats;
        if total <= 0.0 {
            return MacroSplit::default();
        }
        MacroSplit {
            protein: totals.protein / total,
            carbs: totals.carbs / total,
            fats: totals.fats / total,
        }
    }

    /// Percent of a daily value, truncated
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent_daily_value(amount: f64, daily_value: f64) -> u32 {
        if daily_value <= 0.0 {
            return 0;
        }
        let percent = amount / daily_value * 100.0;
        if percent.is_finite() && percent > 0.0 {
            percent as u32
        } else {
            0
        }
    }
}

/// Start of `date` in `tz`
///
/// A midnight skipped by a DST transition resolves to the first local time
/// that exists that day.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Utc>> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=GAP_SCAN_MINUTES)
        .find_map(|minutes| {
            let local = midnight.checked_add_signed(Duration::minutes(minutes))?;
            tz.from_local_datetime(&local).earliest()
        })
        .map(|start| start.with_timezone(&Utc))
}

fn utc_day_fallback(now_millis: i64) -> DayRange {
    let start_millis = now_millis - now_millis.rem_euclid(DAY_MILLIS);
    let start = DateTime::from_timestamp_millis(start_millis).unwrap_or(DateTime::UNIX_EPOCH);
    let end =
        DateTime::from_timestamp_millis(start_millis + DAY_MILLIS).unwrap_or(DateTime::UNIX_EPOCH);
    DayRange { start, end }
}
