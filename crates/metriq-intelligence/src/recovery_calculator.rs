// ABOUTME: Per-muscle fatigue scoring from elapsed time since each muscle was trained
// ABOUTME: Step-function decay over workout logs, keeping the highest score per muscle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recovery Calculator Module
//!
//! Every workout log is scored by the whole hours elapsed since it was saved:
//!
//! | Hours since workout | Score |
//! |---------------------|-------|
//! | `< 24`              | 1.0   |
//! | `< 48`              | 0.6   |
//! | `< 72`              | 0.3   |
//! | otherwise           | 0.0   |
//!
//! Each exercise in a log spreads that score to the body-map regions it works.
//! A region keeps the maximum score over all logs; regions that no recent log
//! touched are absent from the result. Logs dated after `now` count as fresh.

use chrono::{DateTime, Utc};
use metriq_core::models::{FrontMuscleGroup, RearMuscleGroup, WorkoutLog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::RecoveryConfig;
use crate::exercise_catalog::ExerciseCatalog;

/// Heat-map classification of a fatigue score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Not trained recently
    Fresh,
    /// Score up to 0.3
    Recovered,
    /// Score up to 0.6
    Fatigued,
    /// Score above 0.6
    Strained,
}

impl RecoveryStatus {
    /// Classify a fatigue score
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score <= 0.0 {
            Self::Fresh
        } else if score <= 0.3 {
            Self::Recovered
        } else if score <= 0.6 {
            Self::Fatigued
        } else {
            Self::Strained
        }
    }

    /// Legend label for the heat map
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fresh => "Fresh",
            Self::Recovered => "Recovered",
            Self::Fatigued => "Fatigued",
            Self::Strained => "Strained",
        }
    }
}

/// Fatigue score per body-map region, in `(0, 1]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuscleRecovery {
    /// Front regions with a non-zero score
    pub front: BTreeMap<FrontMuscleGroup, f32>,
    /// Rear regions with a non-zero score
    pub rear: BTreeMap<RearMuscleGroup, f32>,
}

impl MuscleRecovery {
    /// Status of a front region, `Fresh` when absent
    #[must_use]
    pub fn status_front(&self, muscle: FrontMuscleGroup) -> RecoveryStatus {
        self.front
            .get(&muscle)
            .map_or(RecoveryStatus::Fresh, |&score| RecoveryStatus::from_score(score))
    }

    /// Status of a rear region, `Fresh` when absent
    #[must_use]
    pub fn status_rear(&self, muscle: RearMuscleGroup) -> RecoveryStatus {
        self.rear
            .get(&muscle)
            .map_or(RecoveryStatus::Fresh, |&score| RecoveryStatus::from_score(score))
    }

    /// True when no region carries fatigue
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.rear.is_empty()
    }
}

/// Muscle recovery scoring
pub struct RecoveryCalculator;

impl RecoveryCalculator {
    /// Score for a whole number of elapsed hours; negative hours count as fresh
    #[must_use]
    pub fn score_for_hours(hours: i64, config: &RecoveryConfig) -> f32 {
        if hours < config.acute_hours {
            config.acute_score
        } else if hours < config.moderate_hours {
            config.moderate_score
        } else if hours < config.residual_hours {
            config.residual_score
        } else {
            0.0
        }
    }

    /// Score of a single log at `now`
    #[must_use]
    pub fn log_score(log: &WorkoutLog, now: DateTime<Utc>, config: &RecoveryConfig) -> f32 {
        let hours_since = now.signed_duration_since(log.timestamp).num_hours();
        Self::score_for_hours(hours_since, config)
    }

    /// Compute fatigue per region over all logs
    #[must_use]
    pub fn compute_recovery(
        logs: &[WorkoutLog],
        catalog: &ExerciseCatalog,
        now: DateTime<Utc>,
        config: &RecoveryConfig,
    ) -> MuscleRecovery {
        let mut recovery = MuscleRecovery::default();

        for log in logs {
            let score = Self::log_score(log, now, config);
            if score <= 0.0 {
                continue;
            }
            for exercise in &log.exercises {
                for &muscle in catalog.front_targets(&exercise.name) {
                    let entry = recovery.front.entry(muscle).or_insert(score);
                    *entry = entry.max(score);
                }
                for &muscle in catalog.rear_targets(&exercise.name) {
                    let entry = recovery.rear.entry(muscle).or_insert(score);
                    *entry = entry.max(score);
                }
            }
        }

        recovery
    }
}
