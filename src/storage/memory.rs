// ABOUTME: In-memory implementation of the workout, food and preference stores
// ABOUTME: Single-writer state behind a tokio RwLock with watch-based change feeds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use metriq_core::errors::{AppError, AppResult};
use metriq_core::models::{LoggedFood, WorkoutLog, WorkoutRoutine};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tracing::debug;

use super::{FoodStore, PreferenceStore, WorkoutStore};

#[derive(Debug, Default)]
struct StoreState {
    routines: BTreeMap<i64, WorkoutRoutine>,
    logs: BTreeMap<i64, WorkoutLog>,
    foods: BTreeMap<i64, LoggedFood>,
    preferences: HashMap<String, String>,
    last_id: i64,
}

impl StoreState {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Process-local store for tests, demos and the report binary
///
/// Every mutation bumps a version counter on the matching change feed, so
/// observers can recompute derived metrics from a fresh snapshot.
#[derive(Clone)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
    workouts_version: Arc<watch::Sender<u64>>,
    foods_version: Arc<watch::Sender<u64>>,
    preferences_version: Arc<watch::Sender<u64>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
            workouts_version: Arc::new(watch::channel(0).0),
            foods_version: Arc::new(watch::channel(0).0),
            preferences_version: Arc::new(watch::channel(0).0),
        }
    }

    /// Change feed for routines and workout logs
    #[must_use]
    pub fn subscribe_workouts(&self) -> watch::Receiver<u64> {
        self.workouts_version.subscribe()
    }

    /// Change feed for logged foods
    #[must_use]
    pub fn subscribe_foods(&self) -> watch::Receiver<u64> {
        self.foods_version.subscribe()
    }

    /// Change feed for preferences
    #[must_use]
    pub fn subscribe_preferences(&self) -> watch::Receiver<u64> {
        self.preferences_version.subscribe()
    }

    fn bump(feed: &watch::Sender<u64>) {
        feed.send_modify(|version| *version += 1);
    }
}

#[async_trait]
impl WorkoutStore for InMemoryStore {
    async fn insert_routine(&self, mut routine: WorkoutRoutine) -> AppResult<i64> {
        let id = {
            let mut state = self.state.write().await;
            let id = state.next_id();
            routine.id = id;
            state.routines.insert(id, routine);
            id
        };
        Self::bump(&self.workouts_version);
        debug!(routine_id = id, "Routine inserted");
        Ok(id)
    }

    async fn update_routine(&self, routine: WorkoutRoutine) -> AppResult<()> {
        {
            let mut state = self.state.write().await;
            let slot = state
                .routines
                .get_mut(&routine.id)
                .ok_or_else(|| AppError::not_found(format!("Routine {}", routine.id)))?;
            *slot = routine;
        }
        Self::bump(&self.workouts_version);
        Ok(())
    }

    async fn delete_routine(&self, id: i64) -> AppResult<bool> {
        let removed = self.state.write().await.routines.remove(&id).is_some();
        if removed {
            Self::bump(&self.workouts_version);
        }
        Ok(removed)
    }

    async fn list_routines(&self) -> AppResult<Vec<WorkoutRoutine>> {
        Ok(self.state.read().await.routines.values().cloned().collect())
    }

    async fn insert_log(&self, mut log: WorkoutLog) -> AppResult<i64> {
        let id = {
            let mut state = self.state.write().await;
            let id = state.next_id();
            log.id = id;
            state.logs.insert(id, log);
            id
        };
        Self::bump(&self.workouts_version);
        debug!(log_id = id, "Workout log inserted");
        Ok(id)
    }

    async fn delete_log(&self, id: i64) -> AppResult<bool> {
        let removed = self.state.write().await.logs.remove(&id).is_some();
        if removed {
            Self::bump(&self.workouts_version);
        }
        Ok(removed)
    }

    async fn list_logs(&self) -> AppResult<Vec<WorkoutLog>> {
        let mut logs: Vec<WorkoutLog> = self.state.read().await.logs.values().cloned().collect();
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(logs)
    }
}

#[async_trait]
impl FoodStore for InMemoryStore {
    async fn insert_food(&self, mut food: LoggedFood) -> AppResult<i64> {
        let id = {
            let mut state = self.state.write().await;
            let id = state.next_id();
            food.id = id;
            state.foods.insert(id, food);
            id
        };
        Self::bump(&self.foods_version);
        debug!(food_id = id, "Food inserted");
        Ok(id)
    }

    async fn delete_food(&self, id: i64) -> AppResult<bool> {
        let removed = self.state.write().await.foods.remove(&id).is_some();
        if removed {
            Self::bump(&self.foods_version);
        }
        Ok(removed)
    }

    async fn list_foods(&self) -> AppResult<Vec<LoggedFood>> {
        let mut foods: Vec<LoggedFood> =
            self.state.read().await.foods.values().cloned().collect();
        foods.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(foods)
    }

    async fn list_foods_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<LoggedFood>> {
        let mut foods: Vec<LoggedFood> = self
            .state
            .read()
            .await
            .foods
            .values()
            .filter(|food| food.timestamp >= start && food.timestamp < end)
            .cloned()
            .collect();
        foods.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(foods)
    }
}

#[async_trait]
impl PreferenceStore for InMemoryStore {
    async fn get_preference(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.state.read().await.preferences.get(key).cloned())
    }

    async fn set_preference(&self, key: &str, value: String) -> AppResult<()> {
        self.state
            .write()
            .await
            .preferences
            .insert(key.to_owned(), value);
        Self::bump(&self.preferences_version);
        Ok(())
    }
}
