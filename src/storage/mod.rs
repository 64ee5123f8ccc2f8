// ABOUTME: Persistence collaborator traits for workouts, logged foods and user preferences
// ABOUTME: Async single-writer store interfaces with typed profile and goal helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage Collaborators
//!
//! The computation core never owns persistence. These traits describe what it
//! needs from a local store; [`memory::InMemoryStore`] implements all three.
//!
//! Preferences are flat string key/value pairs. Profile and goal helpers map
//! typed models onto those keys and fall back to defaults for missing values.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use metriq_core::errors::AppResult;
use metriq_core::models::{LoggedFood, UserGoals, UserProfile, WorkoutLog, WorkoutRoutine};

/// Preference keys for the user profile
pub mod keys {
    /// Age in years
    pub const AGE: &str = "age";
    /// Gender
    pub const GENDER: &str = "gender";
    /// Height in centimeters
    pub const HEIGHT: &str = "height";
    /// Weight in kilograms
    pub const WEIGHT: &str = "weight";
    /// Activity tier label
    pub const ACTIVITY_LEVEL: &str = "activity_level";
    /// Fitness goal label
    pub const FITNESS_GOAL: &str = "fitness_goal";
    /// Daily calorie goal
    pub const CALORIE_GOAL: &str = "calorie_goal";
    /// Daily protein goal
    pub const PROTEIN: &str = "protein";
    /// Daily carbohydrate goal
    pub const CARBS: &str = "carbs";
    /// Daily fat goal
    pub const FATS: &str = "fats";
    /// Basal metabolic rate
    pub const BMR: &str = "bmr";
    /// Total daily energy expenditure
    pub const TDEE: &str = "tee";
}

/// Routine templates and completed workout logs
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Insert a routine and return its new id
    async fn insert_routine(&self, routine: WorkoutRoutine) -> AppResult<i64>;

    /// Replace an existing routine
    async fn update_routine(&self, routine: WorkoutRoutine) -> AppResult<()>;

    /// Delete a routine; returns whether it existed
    async fn delete_routine(&self, id: i64) -> AppResult<bool>;

    /// All routines in insertion order
    async fn list_routines(&self) -> AppResult<Vec<WorkoutRoutine>>;

    /// Insert a completed workout and return its new id
    async fn insert_log(&self, log: WorkoutLog) -> AppResult<i64>;

    /// Delete a workout log; returns whether it existed
    async fn delete_log(&self, id: i64) -> AppResult<bool>;

    /// All workout logs, most recent first
    async fn list_logs(&self) -> AppResult<Vec<WorkoutLog>>;
}

/// Logged food diary
#[async_trait]
pub trait FoodStore: Send + Sync {
    /// Insert a food entry and return its new id
    async fn insert_food(&self, food: LoggedFood) -> AppResult<i64>;

    /// Delete a food entry; returns whether it existed
    async fn delete_food(&self, id: i64) -> AppResult<bool>;

    /// All food entries, most recent first
    async fn list_foods(&self) -> AppResult<Vec<LoggedFood>>;

    /// Food entries with `start <= timestamp < end`, most recent first
    async fn list_foods_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<LoggedFood>>;
}

/// String preferences with typed profile and goal helpers
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read one preference
    async fn get_preference(&self, key: &str) -> AppResult<Option<String>>;

    /// Write one preference
    async fn set_preference(&self, key: &str, value: String) -> AppResult<()>;

    /// Load the profile; missing fields take their default values
    async fn load_profile(&self) -> AppResult<UserProfile> {
        let defaults = UserProfile::default();
        Ok(UserProfile {
            age: self.get_preference(keys::AGE).await?.unwrap_or(defaults.age),
            gender: self
                .get_preference(keys::GENDER)
                .await?
                .unwrap_or(defaults.gender),
            height_cm: self
                .get_preference(keys::HEIGHT)
                .await?
                .unwrap_or(defaults.height_cm),
            weight_kg: self
                .get_preference(keys::WEIGHT)
                .await?
                .unwrap_or(defaults.weight_kg),
            activity_level: self
                .get_preference(keys::ACTIVITY_LEVEL)
                .await?
                .unwrap_or(defaults.activity_level),
            fitness_goal: self
                .get_preference(keys::FITNESS_GOAL)
                .await?
                .unwrap_or(defaults.fitness_goal),
        })
    }

    /// Persist every profile field
    async fn save_profile(&self, profile: &UserProfile) -> AppResult<()> {
        self.set_preference(keys::AGE, profile.age.clone()).await?;
        self.set_preference(keys::GENDER, profile.gender.clone())
            .await?;
        self.set_preference(keys::HEIGHT, profile.height_cm.clone())
            .await?;
        self.set_preference(keys::WEIGHT, profile.weight_kg.clone())
            .await?;
        self.set_preference(keys::ACTIVITY_LEVEL, profile.activity_level.clone())
            .await?;
        self.set_preference(keys::FITNESS_GOAL, profile.fitness_goal.clone())
            .await
    }

    /// Load goals; missing or malformed values take their default values
    async fn load_goals(&self) -> AppResult<UserGoals> {
        let defaults = UserGoals::default();
        Ok(UserGoals {
            calorie_goal: self
                .stored_whole(keys::CALORIE_GOAL)
                .await?
                .unwrap_or(defaults.calorie_goal),
            protein_goal: self
                .stored_whole(keys::PROTEIN)
                .await?
                .unwrap_or(defaults.protein_goal),
            carbs_goal: self
                .stored_whole(keys::CARBS)
                .await?
                .unwrap_or(defaults.carbs_goal),
            fats_goal: self
                .stored_whole(keys::FATS)
                .await?
                .unwrap_or(defaults.fats_goal),
            bmr: self.stored_whole(keys::BMR).await?.unwrap_or(defaults.bmr),
            tdee: self.stored_whole(keys::TDEE).await?.unwrap_or(defaults.tdee),
        })
    }

    /// Persist every goal as whole-number text
    async fn save_goals(&self, goals: &UserGoals) -> AppResult<()> {
        let entries = [
            (keys::CALORIE_GOAL, goals.calorie_goal),
            (keys::PROTEIN, goals.protein_goal),
            (keys::CARBS, goals.carbs_goal),
            (keys::FATS, goals.fats_goal),
            (keys::BMR, goals.bmr),
            (keys::TDEE, goals.tdee),
        ];
        for (key, value) in entries {
            self.set_preference(key, value.to_string()).await?;
        }
        Ok(())
    }

    /// Read a whole-number preference, `None` when missing or malformed
    async fn stored_whole(&self, key: &str) -> AppResult<Option<u32>> {
        Ok(self
            .get_preference(key)
            .await?
            .and_then(|raw| raw.trim().parse().ok()))
    }
}
