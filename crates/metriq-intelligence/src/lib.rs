// ABOUTME: Derived-metrics algorithms for the Metriq fitness and nutrition tracker
// ABOUTME: Goals, muscle recovery, training volume and nutrient aggregation over immutable snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Metriq Intelligence
//!
//! Pure, synchronous calculators. Every function takes an immutable snapshot
//! of user data plus an explicit `now`, and returns the same output for the
//! same inputs. Malformed user data degrades to zero or empty results rather
//! than errors.
//!
//! ## Modules
//!
//! - **config**: Coefficients and thresholds with env overrides
//! - **muscle_mapper**: Free-text muscle names to body-map regions
//! - **exercise_catalog**: Exercise feed with memoized region lookups
//! - **recovery_calculator**: Per-muscle fatigue decay
//! - **volume_aggregator**: Daily and weekly training volume
//! - **nutrition_aggregator**: Nutrient totals, history and deficiencies
//! - **goal_calculator**: BMR, TDEE and macro goals

/// Intelligence configuration
pub mod config;
/// Exercise catalog
pub mod exercise_catalog;
/// Daily goal calculation
pub mod goal_calculator;
/// Muscle name resolution
pub mod muscle_mapper;
/// Nutrient aggregation
pub mod nutrition_aggregator;
/// Muscle recovery scoring
pub mod recovery_calculator;
/// Training volume aggregation
pub mod volume_aggregator;

pub use config::{ConfigError, IntelligenceConfig};
pub use exercise_catalog::ExerciseCatalog;
pub use goal_calculator::{GoalBreakdown, GoalCalculator};
pub use muscle_mapper::{MuscleTargetMapper, MuscleTargets};
pub use nutrition_aggregator::{
    DayRange, Deficiency, MacroSplit, NutrientGoals, NutrientReport, NutritionAggregator,
};
pub use recovery_calculator::{MuscleRecovery, RecoveryCalculator, RecoveryStatus};
pub use volume_aggregator::{
    DailyMaxWeight, DailyVolume, VolumeAggregator, WeeklyVolume, DEFAULT_WEEKS,
};
