// ABOUTME: Integration tests for the in-memory store and preference helpers
// ABOUTME: Covers id assignment, ordering, range queries, deletes, change feeds and profile round trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use metriq::storage::keys;
use metriq::storage::memory::InMemoryStore;
use metriq::storage::{FoodStore, PreferenceStore, WorkoutStore};
use metriq_core::errors::ErrorCode;
use metriq_core::models::{
    ActivityLevel, FitnessGoal, MealType, NutrientTotals, RoutineExercise, UserGoals, UserProfile,
};

#[tokio::test]
async fn test_routines_crud() {
    let store = InMemoryStore::new();
    let mut routine = common::routine("Push", vec![RoutineExercise::new("Bench Press")]);
    let id = store.insert_routine(routine.clone()).await.unwrap();
    assert_eq!(id, 1);

    routine.id = id;
    routine.exercises.push(RoutineExercise::new("Dips"));
    store.update_routine(routine.clone()).await.unwrap();

    let routines = store.list_routines().await.unwrap();
    assert_eq!(routines, vec![routine.clone()]);
    assert_eq!(routines[0].exercises[1].sets.len(), 1);

    routine.id = 99;
    let error = store.update_routine(routine).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    assert!(store.delete_routine(id).await.unwrap());
    assert!(!store.delete_routine(id).await.unwrap());
    assert!(store.list_routines().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_logs_listed_most_recent_first() {
    let store = InMemoryStore::new();
    let older = common::workout_log(common::utc(2024, 3, 8, 9, 0), vec![]);
    let newer = common::workout_log(common::utc(2024, 3, 9, 9, 0), vec![]);

    let newer_id = store.insert_log(newer).await.unwrap();
    let older_id = store.insert_log(older).await.unwrap();
    assert_ne!(newer_id, older_id);

    let ids: Vec<i64> = store
        .list_logs()
        .await
        .unwrap()
        .iter()
        .map(|log| log.id)
        .collect();
    assert_eq!(ids, vec![newer_id, older_id]);

    assert!(store.delete_log(older_id).await.unwrap());
    assert_eq!(store.list_logs().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_food_range_is_half_open() {
    let store = InMemoryStore::new();
    let start = common::utc(2024, 3, 10, 0, 0);
    let end = common::utc(2024, 3, 11, 0, 0);
    for (name, timestamp) in [
        ("before", common::utc(2024, 3, 9, 23, 59)),
        ("start", start),
        ("evening", common::utc(2024, 3, 10, 20, 0)),
        ("end", end),
    ] {
        store
            .insert_food(common::food(
                name,
                NutrientTotals::default(),
                MealType::Snack,
                timestamp,
            ))
            .await
            .unwrap();
    }

    let names: Vec<String> = store
        .list_foods_in_range(start, end)
        .await
        .unwrap()
        .into_iter()
        .map(|food| food.name)
        .collect();
    assert_eq!(names, vec!["evening", "start"]);
    assert_eq!(store.list_foods().await.unwrap().len(), 4);
    assert_eq!(store.list_foods().await.unwrap()[0].name, "end");
}

#[tokio::test]
async fn test_change_feeds_bump_on_mutation() {
    let store = InMemoryStore::new();
    let mut workouts = store.subscribe_workouts();
    let mut foods = store.subscribe_foods();
    let mut preferences = store.subscribe_preferences();

    let id = store
        .insert_food(common::food(
            "Apple",
            NutrientTotals::default(),
            MealType::Snack,
            common::utc(2024, 3, 10, 9, 0),
        ))
        .await
        .unwrap();
    assert!(foods.has_changed().unwrap());
    assert!(!workouts.has_changed().unwrap());
    assert_eq!(*foods.borrow_and_update(), 1);

    // Deleting a missing record changes nothing
    assert!(!store.delete_food(id + 1).await.unwrap());
    assert!(!foods.has_changed().unwrap());

    store.delete_food(id).await.unwrap();
    assert_eq!(*foods.borrow_and_update(), 2);

    store
        .insert_log(common::workout_log(common::utc(2024, 3, 10, 9, 0), vec![]))
        .await
        .unwrap();
    assert!(workouts.has_changed().unwrap());

    store.set_preference(keys::AGE, "41".to_owned()).await.unwrap();
    assert_eq!(*preferences.borrow_and_update(), 1);
}

#[tokio::test]
async fn test_profile_defaults_and_round_trip() {
    let store = InMemoryStore::new();
    assert_eq!(store.load_profile().await.unwrap(), UserProfile::default());

    store.set_preference(keys::WEIGHT, "82.5".to_owned()).await.unwrap();
    let partial = store.load_profile().await.unwrap();
    assert_eq!(partial.weight_kg, "82.5");
    assert_eq!(partial.age, "30");

    let profile = UserProfile {
        age: "41".to_owned(),
        gender: "Female".to_owned(),
        height_cm: "168".to_owned(),
        weight_kg: "64".to_owned(),
        activity_level: ActivityLevel::VeryActive.label().to_owned(),
        fitness_goal: FitnessGoal::GainMuscle.label().to_owned(),
    };
    store.save_profile(&profile).await.unwrap();
    assert_eq!(store.load_profile().await.unwrap(), profile);
    assert_eq!(
        store.get_preference(keys::ACTIVITY_LEVEL).await.unwrap().as_deref(),
        Some("Very Active")
    );
}

#[tokio::test]
async fn test_goals_defaults_and_round_trip() {
    let store = InMemoryStore::new();
    assert_eq!(store.load_goals().await.unwrap(), UserGoals::default());

    let goals = UserGoals {
        calorie_goal: 2038,
        protein_goal: 150,
        carbs_goal: 207,
        fats_goal: 67,
        bmr: 1698,
        tdee: 2038,
    };
    store.save_goals(&goals).await.unwrap();
    assert_eq!(store.load_goals().await.unwrap(), goals);
    assert_eq!(
        store.get_preference(keys::TDEE).await.unwrap().as_deref(),
        Some("2038")
    );

    store.set_preference(keys::PROTEIN, "lots".to_owned()).await.unwrap();
    assert_eq!(store.load_goals().await.unwrap().protein_goal, 150);
}
