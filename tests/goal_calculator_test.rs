// ABOUTME: Integration tests for BMR, TDEE and macro goal calculation
// ABOUTME: Covers the default profile, goal adjustments, calorie floor, macro caps and bad input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::approx_eq;
use metriq_core::models::{ActivityLevel, FitnessGoal, UserGoals, UserProfile};
use metriq_intelligence::config::GoalConfig;
use metriq_intelligence::GoalCalculator;

fn profile(
    age: &str,
    gender: &str,
    height: &str,
    weight: &str,
    activity: ActivityLevel,
    goal: FitnessGoal,
) -> UserProfile {
    UserProfile {
        age: age.to_owned(),
        gender: gender.to_owned(),
        height_cm: height.to_owned(),
        weight_kg: weight.to_owned(),
        activity_level: activity.label().to_owned(),
        fitness_goal: goal.label().to_owned(),
    }
}

#[test]
fn test_default_profile_goals() {
    let goals = GoalCalculator::calculate(&UserProfile::default(), &GoalConfig::default());

    assert!(approx_eq(goals.bmr, 1698.75));
    assert!(approx_eq(goals.tdee, 2038.5));
    assert!(approx_eq(goals.calorie_goal, 2038.5));
    assert!(approx_eq(goals.protein_goal, 150.0));
    assert!(approx_eq(goals.fats_goal, 67.5));
    assert!(approx_eq(goals.carbs_goal, 207.75));

    assert_eq!(
        goals.to_user_goals(),
        UserGoals {
            calorie_goal: 2038,
            protein_goal: 150,
            carbs_goal: 207,
            fats_goal: 67,
            bmr: 1698,
            tdee: 2038,
        }
    );
    assert!(approx_eq(goals.rounded().carbs_goal, 207.0));
}

#[test]
fn test_female_lose_fat() {
    let input = profile(
        "25",
        "Female",
        "165",
        "60",
        ActivityLevel::LightlyActive,
        FitnessGoal::LoseFat,
    );
    let goals = GoalCalculator::calculate(&input, &GoalConfig::default());

    assert!(approx_eq(goals.bmr, 1345.25));
    assert!(approx_eq(goals.tdee, 1849.718_75));
    assert!(approx_eq(goals.calorie_goal, 1349.718_75));
    assert!(approx_eq(goals.protein_goal, 120.0));
    assert!(approx_eq(goals.fats_goal, 54.0));
    assert!(approx_eq(goals.carbs_goal, 95.929_687_5));
}

#[test]
fn test_gain_muscle_adds_surplus() {
    let input = profile(
        "30",
        "male",
        "175",
        "75",
        ActivityLevel::ModeratelyActive,
        FitnessGoal::GainMuscle,
    );
    let goals = GoalCalculator::calculate(&input, &GoalConfig::default());
    assert!(approx_eq(goals.tdee, 1698.75 * 1.55));
    assert!(approx_eq(goals.calorie_goal, 1698.75 * 1.55 + 300.0));
}

#[test]
fn test_calorie_floor() {
    let input = profile(
        "80",
        "female",
        "150",
        "40",
        ActivityLevel::Sedentary,
        FitnessGoal::LoseFat,
    );
    let goals = GoalCalculator::calculate(&input, &GoalConfig::default());
    assert!(approx_eq(goals.calorie_goal, 1200.0));
    assert!(approx_eq(goals.carbs_goal, 139.0));
}

#[test]
fn test_macro_caps() {
    let input = profile(
        "35",
        "Male",
        "190",
        "150",
        ActivityLevel::ExtraActive,
        FitnessGoal::MaintainWeight,
    );
    let goals = GoalCalculator::calculate(&input, &GoalConfig::default());
    assert!(approx_eq(goals.protein_goal, 250.0));
    assert!(approx_eq(goals.fats_goal, 100.0));
}

#[test]
fn test_carbs_never_negative() {
    let mut config = GoalConfig::default();
    config.macros.protein_g_per_kg = 10.0;
    config.macros.protein_cap_g = 1000.0;
    let goals = GoalCalculator::calculate(&UserProfile::default(), &config);
    assert!(approx_eq(goals.carbs_goal, 0.0));
}

#[test]
fn test_gender_match_ignores_case_and_whitespace() {
    let config = GoalConfig::default();
    let male = GoalCalculator::calculate(
        &profile("30", " MALE ", "175", "75", ActivityLevel::Sedentary, FitnessGoal::MaintainWeight),
        &config,
    );
    let other = GoalCalculator::calculate(
        &profile("30", "other", "175", "75", ActivityLevel::Sedentary, FitnessGoal::MaintainWeight),
        &config,
    );
    assert!(approx_eq(male.bmr - other.bmr, 166.0));
}

#[test]
fn test_malformed_profile_degrades_to_zero_inputs() {
    let input = UserProfile {
        age: "thirty".to_owned(),
        gender: String::new(),
        height_cm: String::new(),
        weight_kg: "heavy".to_owned(),
        activity_level: "Couch Potato".to_owned(),
        fitness_goal: "World Domination".to_owned(),
    };
    let goals = GoalCalculator::calculate(&input, &GoalConfig::default());

    assert!(approx_eq(goals.bmr, -161.0));
    assert!(approx_eq(goals.tdee, -161.0 * 1.2));
    assert!(approx_eq(goals.calorie_goal, 1200.0));
    assert!(approx_eq(goals.protein_goal, 0.0));
    assert!(approx_eq(goals.fats_goal, 0.0));
    assert!(approx_eq(goals.carbs_goal, 300.0));
}
