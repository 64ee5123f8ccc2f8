// ABOUTME: Core data models for workouts, logged foods, the user profile and muscle groups
// ABOUTME: Re-exports every model type consumed by the computation crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data shared by storage collaborators and calculators. Models keep
//! user-entered text as-is (reps, weights, profile measurements); numeric
//! interpretation happens through the lenient parsers in [`crate::parsing`].
//!
//! ## Core Models
//!
//! - `ExerciseRecord`: static catalog entry with free-text muscle names
//! - `WorkoutRoutine` / `WorkoutLog`: templates and immutable completed workouts
//! - `LoggedFood`: a diary entry with absolute nutrient amounts
//! - `UserProfile` / `UserGoals`: body profile and persisted daily targets
//! - `FrontMuscleGroup` / `RearMuscleGroup`: body-map regions

mod exercise;
mod muscle;
mod nutrition;
mod profile;
mod workout;

// Exercise catalog
pub use exercise::ExerciseRecord;

// Anatomy
pub use muscle::{FrontMuscleGroup, RearMuscleGroup};

// Nutrition domain
pub use nutrition::{LoggedFood, MealType, Nutrient, NutrientTotals};

// Profile domain
pub use profile::{ActivityLevel, FitnessGoal, UserGoals, UserProfile};

// Workout domain
pub use workout::{ExerciseSet, RoutineExercise, WorkoutLog, WorkoutRoutine};
