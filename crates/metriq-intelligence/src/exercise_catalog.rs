// ABOUTME: Immutable exercise catalog with memoized exercise-to-region lookups
// ABOUTME: Built once from the static feed; unknown exercises resolve to no regions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise Catalog
//!
//! Each exercise's primary and secondary muscle names are resolved through
//! [`MuscleTargetMapper`] at construction time. Only non-empty region sets
//! are memoized, so lookups for unknown or unresolvable exercises simply miss.

use metriq_core::errors::AppResult;
use metriq_core::models::{ExerciseRecord, FrontMuscleGroup, RearMuscleGroup};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

use crate::muscle_mapper::MuscleTargetMapper;

static NO_FRONT: BTreeSet<FrontMuscleGroup> = BTreeSet::new();
static NO_REAR: BTreeSet<RearMuscleGroup> = BTreeSet::new();

/// Exercise definitions plus their resolved body-map regions
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    records: Vec<ExerciseRecord>,
    by_name: HashMap<String, usize>,
    front: HashMap<String, BTreeSet<FrontMuscleGroup>>,
    rear: HashMap<String, BTreeSet<RearMuscleGroup>>,
}

impl ExerciseCatalog {
    /// Build a catalog; the first record wins when names repeat
    #[must_use]
    pub fn from_records(records: Vec<ExerciseRecord>) -> Self {
        let mut catalog = Self::default();
        for record in records {
            if catalog.by_name.contains_key(&record.name) {
                warn!(exercise = %record.name, "Duplicate exercise in catalog feed, keeping first");
                continue;
            }
            let targets = MuscleTargetMapper::map_all(record.all_muscles());
            if !targets.front.is_empty() {
                catalog.front.insert(record.name.clone(), targets.front);
            }
            if !targets.rear.is_empty() {
                catalog.rear.insert(record.name.clone(), targets.rear);
            }
            catalog
                .by_name
                .insert(record.name.clone(), catalog.records.len());
            catalog.records.push(record);
        }
        debug!(
            exercises = catalog.records.len(),
            mapped_front = catalog.front.len(),
            mapped_rear = catalog.rear.len(),
            "Exercise catalog built"
        );
        catalog
    }

    /// Parse the JSON feed (an array of exercise records)
    ///
    /// # Errors
    ///
    /// Returns a serialization error when the feed is not a valid record array
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let records: Vec<ExerciseRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Front regions worked by an exercise, empty when unknown
    #[must_use]
    pub fn front_targets(&self, exercise_name: &str) -> &BTreeSet<FrontMuscleGroup> {
        self.front.get(exercise_name).unwrap_or(&NO_FRONT)
    }

    /// Rear regions worked by an exercise, empty when unknown
    #[must_use]
    pub fn rear_targets(&self, exercise_name: &str) -> &BTreeSet<RearMuscleGroup> {
        self.rear.get(exercise_name).unwrap_or(&NO_REAR)
    }

    /// All records in feed order
    #[must_use]
    pub fn records(&self) -> &[ExerciseRecord] {
        &self.records
    }

    /// Look up a record by exact name
    #[must_use]
    pub fn get(&self, exercise_name: &str) -> Option<&ExerciseRecord> {
        self.by_name
            .get(exercise_name)
            .and_then(|&index| self.records.get(index))
    }

    /// Exercise names in feed order
    pub fn exercise_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }

    /// Records whose name contains `query`, ignoring case; a blank query matches all
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&ExerciseRecord> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|record| needle.is_empty() || record.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog has no exercises
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_names_keep_first_record() {
        let catalog = ExerciseCatalog::from_records(vec![
            ExerciseRecord::new("Squat", &["quadriceps"], &[]),
            ExerciseRecord::new("Squat", &["biceps"], &[]),
        ]);
        assert_eq!(catalog.len(), 1);
        assert!(catalog
            .front_targets("Squat")
            .contains(&FrontMuscleGroup::LeftQuads));
        assert!(!catalog
            .front_targets("Squat")
            .contains(&FrontMuscleGroup::LeftBicep));
    }

    #[test]
    fn test_unresolvable_exercise_is_not_memoized() {
        let catalog =
            ExerciseCatalog::from_records(vec![ExerciseRecord::new("Side Lunge", &["adductors"], &[])]);
        assert!(catalog.get("Side Lunge").is_some());
        assert!(catalog.front_targets("Side Lunge").is_empty());
        assert!(catalog.rear_targets("Side Lunge").is_empty());
    }
}
