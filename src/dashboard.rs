// ABOUTME: Dashboard snapshot combining every derived metric over one immutable data set
// ABOUTME: Recovery heat-map, training volume, nutrient totals, history, deficiencies and goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dashboard Snapshot
//!
//! Screens never hold incremental state. Whenever the store reports a change
//! the whole snapshot is recomputed from the current records, so every figure
//! on screen comes from the same inputs and the same `now`.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use metriq_core::errors::AppResult;
use metriq_core::models::{LoggedFood, MealType, NutrientTotals, UserGoals, UserProfile, WorkoutLog};
use metriq_intelligence::{
    DailyVolume, DayRange, ExerciseCatalog, GoalBreakdown, GoalCalculator, IntelligenceConfig,
    MacroSplit, MuscleRecovery, NutrientReport, NutritionAggregator, RecoveryCalculator,
    VolumeAggregator, WeeklyVolume,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::storage::{FoodStore, PreferenceStore, WorkoutStore};

/// Raw user data a snapshot is computed from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardInputs {
    /// Stored profile
    #[serde(default)]
    pub profile: UserProfile,
    /// Stored daily goals; defaults apply when none were saved
    #[serde(default)]
    pub goals: Option<UserGoals>,
    /// Completed workouts
    #[serde(default)]
    pub logs: Vec<WorkoutLog>,
    /// Food diary
    #[serde(default)]
    pub foods: Vec<LoggedFood>,
    /// Diary day to show, in days before today
    #[serde(default)]
    pub day_offset: i64,
}

impl DashboardInputs {
    /// Read the current records from the stores
    ///
    /// # Errors
    ///
    /// Returns the first store error encountered
    pub async fn from_stores<S>(store: &S) -> AppResult<Self>
    where
        S: WorkoutStore + FoodStore + PreferenceStore,
    {
        Ok(Self {
            profile: store.load_profile().await?,
            goals: Some(store.load_goals().await?),
            logs: store.list_logs().await?,
            foods: store.list_foods().await?,
            day_offset: 0,
        })
    }
}

/// Progress toward each macro goal, each in `[0, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Energy
    pub calories: f64,
    /// Protein
    pub protein: f64,
    /// Carbohydrate
    pub carbs: f64,
    /// Fat
    pub fats: f64,
}

/// Nutrient totals for one past day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutrition {
    /// Local calendar date
    pub date: NaiveDate,
    /// Field-wise totals for the day
    pub totals: NutrientTotals,
}

/// Every derived metric for one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Instant the snapshot was computed for
    pub generated_at: DateTime<Utc>,
    /// Per-region fatigue
    pub recovery: MuscleRecovery,
    /// Volume per Monday-based week, oldest first
    pub weekly_volume: Vec<WeeklyVolume>,
    /// Volume per training day, oldest first
    pub daily_volume: Vec<DailyVolume>,
    /// Diary day shown
    pub day: DayRange,
    /// Foods eaten on that day, by meal
    pub meals: BTreeMap<MealType, Vec<LoggedFood>>,
    /// Totals for that day
    pub day_totals: NutrientTotals,
    /// Macro shares for that day
    pub macro_split: MacroSplit,
    /// Recent daily totals, most recent first
    pub history: Vec<DailyNutrition>,
    /// Micronutrient shortfalls for that day
    pub deficiencies: NutrientReport,
    /// Goals in effect
    pub goals: UserGoals,
    /// Goals recalculated from the current profile
    pub calculated_goals: GoalBreakdown,
    /// Progress toward the goals in effect
    pub progress: GoalProgress,
}

impl DashboardSnapshot {
    /// Compute every metric for `inputs` as seen at `now`
    ///
    /// Local dates are taken in the time zone of `now`.
    #[must_use]
    pub fn compute<Tz: TimeZone>(
        inputs: &DashboardInputs,
        catalog: &ExerciseCatalog,
        config: &IntelligenceConfig,
        now: &DateTime<Tz>,
    ) -> Self {
        let now_utc = now.with_timezone(&Utc);
        let tz = now.timezone();

        let recovery =
            RecoveryCalculator::compute_recovery(&inputs.logs, catalog, now_utc, &config.recovery);
        let weekly_volume = VolumeAggregator::weekly_volume(&inputs.logs, now, config.volume.weeks);
        let daily_volume = VolumeAggregator::total_volume_by_day(&inputs.logs, &tz);

        let offset =
            NutritionAggregator::clamp_day_offset(inputs.day_offset, config.nutrition.max_day_offset);
        let day = NutritionAggregator::day_range(offset, now);
        let day_foods = NutritionAggregator::foods_in_range(&inputs.foods, &day);
        let day_totals = NutritionAggregator::daily_totals(&day_foods);

        let history = NutritionAggregator::historical_daily_totals(
            &inputs.foods,
            now,
            config.nutrition.history_window_days,
        )
        .into_iter()
        .map(|(date, totals)| DailyNutrition { date, totals })
        .collect();

        let deficiencies = NutritionAggregator::deficiency_report(
            &day_foods,
            &config.nutrition.daily_goals,
            &config.nutrition,
        );

        let goals = inputs.goals.unwrap_or_default();
        let progress = GoalProgress {
            calories: NutritionAggregator::goal_progress(
                day_totals.calories,
                f64::from(goals.calorie_goal),
            ),
            protein: NutritionAggregator::goal_progress(
                day_totals.protein,
                f64::from(goals.protein_goal),
            ),
            carbs: NutritionAggregator::goal_progress(day_totals.carbs, f64::from(goals.carbs_goal)),
            fats: NutritionAggregator::goal_progress(day_totals.fats, f64::from(goals.fats_goal)),
        };

        debug!(
            logs = inputs.logs.len(),
            foods = inputs.foods.len(),
            day_offset = offset,
            "Dashboard snapshot computed"
        );

        Self {
            generated_at: now_utc,
            recovery,
            weekly_volume,
            daily_volume,
            day,
            meals: NutritionAggregator::group_by_meal_type(&day_foods),
            macro_split: NutritionAggregator::macro_split(&day_totals),
            day_totals,
            history,
            deficiencies,
            goals,
            calculated_goals: GoalCalculator::calculate(&inputs.profile, &config.goals),
            progress,
        }
    }
}
