// ABOUTME: Workout routine templates and immutable completed workout logs
// ABOUTME: ExerciseSet, RoutineExercise, WorkoutRoutine and WorkoutLog definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parsing::lenient_f64;

/// One set of an exercise as entered by the user
///
/// Reps and weight are kept as the raw text the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Repetitions, free text
    #[serde(default)]
    pub reps: String,
    /// Weight lifted, free text
    #[serde(default)]
    pub weight: String,
    /// Whether the set was ticked off
    #[serde(default)]
    pub completed: bool,
}

impl ExerciseSet {
    /// Create a set from raw text values
    pub fn new(reps: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            reps: reps.into(),
            weight: weight.into(),
            completed: false,
        }
    }

    /// Repetitions as a number, `0.0` when blank or malformed
    #[must_use]
    pub fn reps_value(&self) -> f64 {
        lenient_f64(&self.reps)
    }

    /// Weight as a number, `0.0` when blank or malformed
    #[must_use]
    pub fn weight_value(&self) -> f64 {
        lenient_f64(&self.weight)
    }
}

/// An exercise inside a routine or a logged workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineExercise {
    /// Exercise name, a soft reference into the exercise catalog
    pub name: String,
    /// Ordered sets
    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
}

impl RoutineExercise {
    /// Add an exercise to a routine; it starts with a single blank set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: vec![ExerciseSet::default()],
        }
    }

    /// Create an exercise with explicit sets
    pub fn with_sets(name: impl Into<String>, sets: Vec<ExerciseSet>) -> Self {
        Self {
            name: name.into(),
            sets,
        }
    }
}

/// A reusable workout template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRoutine {
    /// Store-assigned identifier, `0` before the first insert
    #[serde(default)]
    pub id: i64,
    /// Routine name
    pub name: String,
    /// Ordered exercises
    #[serde(default)]
    pub exercises: Vec<RoutineExercise>,
}

/// A completed workout
///
/// Logs are snapshots: once stored they are never edited, only deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Store-assigned identifier, `0` before the first insert
    #[serde(default)]
    pub id: i64,
    /// Name of the routine the workout was started from
    pub name: String,
    /// When the workout was saved
    pub timestamp: DateTime<Utc>,
    /// Session duration in seconds
    #[serde(default)]
    pub duration_secs: u64,
    /// Exercises as performed
    #[serde(default)]
    pub exercises: Vec<RoutineExercise>,
}

impl WorkoutLog {
    /// Snapshot a routine into a log stamped at `timestamp`
    #[must_use]
    pub fn from_routine(routine: &WorkoutRoutine, timestamp: DateTime<Utc>, duration_secs: u64) -> Self {
        Self {
            id: 0,
            name: routine.name.clone(),
            timestamp,
            duration_secs,
            exercises: routine.exercises.clone(),
        }
    }
}
