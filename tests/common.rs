// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, a small exercise catalog and workout/food builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `metriq`

use chrono::{DateTime, TimeZone, Utc};
use metriq_core::models::{
    ExerciseRecord, ExerciseSet, LoggedFood, MealType, NutrientTotals, RoutineExercise,
    WorkoutLog, WorkoutRoutine,
};
use metriq_intelligence::ExerciseCatalog;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary helper may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Exercise feed in the public catalog format
pub const CATALOG_JSON: &str = r#"[
    {
        "id": "Barbell_Squat",
        "name": "Barbell Squat",
        "force": "push",
        "level": "beginner",
        "mechanic": "compound",
        "equipment": "barbell",
        "primaryMuscles": ["quadriceps"],
        "secondaryMuscles": ["glutes", "hamstrings", "lower back"],
        "instructions": ["Stand tall.", "Squat down."],
        "category": "strength",
        "images": ["Barbell_Squat/0.jpg"]
    },
    {
        "name": "Bench Press",
        "primaryMuscles": ["chest"],
        "secondaryMuscles": ["triceps", "shoulders"]
    },
    {
        "name": "Barbell Curl",
        "primaryMuscles": ["biceps"],
        "secondaryMuscles": ["forearms"]
    },
    {
        "name": "Adductor Machine",
        "primaryMuscles": ["adductors"],
        "secondaryMuscles": null
    },
    {
        "name": "Plank"
    }
]"#;

/// Catalog built from [`CATALOG_JSON`]
pub fn test_catalog() -> ExerciseCatalog {
    ExerciseCatalog::from_json_str(CATALOG_JSON).unwrap()
}

/// Catalog built from explicit records
pub fn catalog_of(records: &[(&str, &[&str], &[&str])]) -> ExerciseCatalog {
    ExerciseCatalog::from_records(
        records
            .iter()
            .map(|(name, primary, secondary)| ExerciseRecord::new(*name, primary, secondary))
            .collect(),
    )
}

/// UTC instant from calendar fields
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// One exercise with `(reps, weight)` sets
pub fn exercise(name: &str, sets: &[(&str, &str)]) -> RoutineExercise {
    RoutineExercise::with_sets(
        name,
        sets.iter()
            .map(|(reps, weight)| ExerciseSet::new(*reps, *weight))
            .collect(),
    )
}

/// Routine with the given exercises
pub fn routine(name: &str, exercises: Vec<RoutineExercise>) -> WorkoutRoutine {
    WorkoutRoutine {
        id: 0,
        name: name.to_owned(),
        exercises,
    }
}

/// Workout log stamped at `timestamp`
pub fn workout_log(timestamp: DateTime<Utc>, exercises: Vec<RoutineExercise>) -> WorkoutLog {
    WorkoutLog::from_routine(&routine("Session", exercises), timestamp, 3600)
}

/// Logged food with the given totals
pub fn food(
    name: &str,
    nutrients: NutrientTotals,
    meal: MealType,
    timestamp: DateTime<Utc>,
) -> LoggedFood {
    LoggedFood::new(name, nutrients, meal, 100.0, timestamp)
}

/// Approximate float comparison
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-6
}
