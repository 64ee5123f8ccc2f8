// ABOUTME: Integration tests for nutrient aggregation and deficiency analysis
// ABOUTME: Covers totals, meal grouping, history windows, deficiencies and day ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{
    Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};
use common::approx_eq;
use metriq_core::models::{MealType, Nutrient, NutrientTotals};
use metriq_intelligence::config::NutritionConfig;
use metriq_intelligence::{NutrientGoals, NutritionAggregator};

fn totals(entries: &[(Nutrient, f64)]) -> NutrientTotals {
    entries
        .iter()
        .fold(NutrientTotals::default(), |acc, &(nutrient, amount)| {
            acc.with(nutrient, amount)
        })
}

#[test]
fn test_daily_totals_sum_every_field() {
    let now = common::utc(2024, 3, 10, 12, 0);
    let foods = vec![
        common::food(
            "Oats",
            totals(&[(Nutrient::Calories, 380.0), (Nutrient::Iron, 4.0)]),
            MealType::Breakfast,
            now,
        ),
        common::food(
            "Milk",
            totals(&[(Nutrient::Calories, 120.0), (Nutrient::Calcium, 300.0)]),
            MealType::Breakfast,
            now,
        ),
    ];

    let sum = NutritionAggregator::daily_totals(&foods);
    assert!(approx_eq(sum.calories, 500.0));
    assert!(approx_eq(sum.get(Nutrient::Iron), 4.0));
    assert!(approx_eq(sum.get(Nutrient::Calcium), 300.0));
    assert!(approx_eq(sum.zinc, 0.0));

    assert_eq!(NutritionAggregator::daily_totals(&[]), NutrientTotals::default());
}

#[test]
fn test_single_food_totals_equal_its_own_fields() {
    let full = Nutrient::ALL
        .iter()
        .zip(1_u32..)
        .fold(NutrientTotals::default(), |acc, (&nutrient, step)| {
            acc.with(nutrient, f64::from(step) * 1.37)
        });
    let food = common::food(
        "Everything Bowl",
        full,
        MealType::Lunch,
        common::utc(2024, 3, 10, 12, 0),
    );

    assert_eq!(NutritionAggregator::daily_totals(&[food]), full);
}

#[test]
fn test_group_by_meal_skips_unknown_tags() {
    common::init_test_logging();
    let now = common::utc(2024, 3, 10, 12, 0);
    let mut corrupt = common::food("Mystery", NutrientTotals::default(), MealType::Lunch, now);
    corrupt.meal_type = "BRUNCH".to_owned();

    let foods = vec![
        common::food("Eggs", NutrientTotals::default(), MealType::Breakfast, now),
        corrupt,
        common::food("Apple", NutrientTotals::default(), MealType::Snack, now),
        common::food("Toast", NutrientTotals::default(), MealType::Breakfast, now),
    ];

    let groups = NutritionAggregator::group_by_meal_type(&foods);
    assert_eq!(groups.len(), 2);
    let breakfast: Vec<&str> = groups[&MealType::Breakfast]
        .iter()
        .map(|food| food.name.as_str())
        .collect();
    assert_eq!(breakfast, vec!["Eggs", "Toast"]);
    assert_eq!(groups[&MealType::Snack].len(), 1);
    assert!(!groups.contains_key(&MealType::Lunch));
}

#[test]
fn test_history_keeps_recent_days_newest_first() {
    let now = common::utc(2024, 3, 10, 12, 0);
    let protein = |amount| totals(&[(Nutrient::Protein, amount)]);
    let foods = vec![
        common::food("a", protein(10.0), MealType::Lunch, common::utc(2024, 3, 3, 23, 0)),
        common::food("b", protein(20.0), MealType::Lunch, common::utc(2024, 3, 4, 8, 0)),
        common::food("c", protein(30.0), MealType::Lunch, common::utc(2024, 3, 4, 19, 0)),
        common::food("d", protein(40.0), MealType::Lunch, common::utc(2024, 3, 10, 7, 0)),
    ];

    let history = NutritionAggregator::historical_daily_totals(&foods, &now, 7);
    let days: Vec<NaiveDate> = history.iter().map(|(date, _)| *date).collect();
    assert_eq!(
        days,
        vec![
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        ]
    );
    assert!(approx_eq(history[1].1.protein, 50.0));
}

#[test]
fn test_deficiencies_rank_by_ratio_with_stable_contributors() {
    let now = common::utc(2024, 3, 10, 12, 0);
    let foods = vec![
        common::food(
            "A",
            totals(&[(Nutrient::Iron, 2.0), (Nutrient::VitaminC, 30.0), (Nutrient::Zinc, 10.0)]),
            MealType::Breakfast,
            now,
        ),
        common::food("B", totals(&[(Nutrient::Iron, 5.0)]), MealType::Lunch, now),
        common::food("C", totals(&[(Nutrient::Iron, 5.0)]), MealType::Dinner, now),
        common::food("D", NutrientTotals::default(), MealType::Snack, now),
    ];

    let mut goals = NutrientGoals::default();
    goals.set(Nutrient::Iron, 18.0);
    goals.set(Nutrient::VitaminC, 90.0);
    goals.set(Nutrient::Zinc, 11.0);
    goals.set(Nutrient::Calcium, 0.0);

    let report = NutritionAggregator::deficiency_report(&foods, &goals, &NutritionConfig::default());
    let nutrients: Vec<Nutrient> = report.deficiencies.iter().map(|d| d.nutrient).collect();
    assert_eq!(nutrients, vec![Nutrient::VitaminC, Nutrient::Iron]);

    let iron = &report.deficiencies[1];
    assert!(approx_eq(iron.current_amount, 12.0));
    assert!(approx_eq(iron.goal_amount, 18.0));
    let iron_sources: Vec<&str> = iron.top_contributors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(iron_sources, vec!["B", "C", "A"]);

    let vitamin_c_sources: Vec<&str> = report.deficiencies[0]
        .top_contributors
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(vitamin_c_sources, vec!["A", "B", "C"]);
}

#[test]
fn test_deficiency_threshold_is_exclusive() {
    let now = common::utc(2024, 3, 10, 12, 0);
    let mut goals = NutrientGoals::default();
    goals.set(Nutrient::Iron, 20.0);

    let at_threshold = vec![common::food(
        "Lentils",
        totals(&[(Nutrient::Iron, 15.0)]),
        MealType::Dinner,
        now,
    )];
    let report =
        NutritionAggregator::deficiency_report(&at_threshold, &goals, &NutritionConfig::default());
    assert!(report.deficiencies.is_empty());
}

#[test]
fn test_empty_day_reports_three_worst() {
    let config = NutritionConfig::default();
    let report = NutritionAggregator::deficiency_report(&[], &config.daily_goals, &config);
    assert_eq!(report.deficiencies.len(), 3);
    assert!(report
        .deficiencies
        .iter()
        .all(|d| d.top_contributors.is_empty() && approx_eq(d.current_amount, 0.0)));
}

#[test]
fn test_day_range_uses_local_midnight() {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let now = tz.with_ymd_and_hms(2024, 3, 10, 8, 30, 0).unwrap();

    let today = NutritionAggregator::day_range(0, &now);
    assert_eq!(today.start, common::utc(2024, 3, 9, 22, 0));
    assert_eq!(today.end, common::utc(2024, 3, 10, 22, 0));

    let yesterday = NutritionAggregator::day_range(1, &now);
    assert_eq!(yesterday.start, common::utc(2024, 3, 8, 22, 0));
    assert_eq!(yesterday.end, today.start);
}

/// UTC-4 until 2024-09-08T04:00Z, UTC-3 afterwards
///
/// Clocks jump from 00:00 to 01:00 local on 2024-09-08, the way Chile
/// springs forward, so that day has no local midnight.
#[derive(Debug, Clone, Copy)]
struct SpringForwardZone;

impl SpringForwardZone {
    fn switch_utc() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, 8)
            .unwrap()
            .and_hms_opt(4, 0, 0)
            .unwrap()
    }

    fn winter() -> FixedOffset {
        FixedOffset::west_opt(4 * 3600).unwrap()
    }

    fn summer() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }
}

impl TimeZone for SpringForwardZone {
    type Offset = FixedOffset;

    fn from_offset(_offset: &FixedOffset) -> Self {
        Self
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
        self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        let gap_start = Self::switch_utc() - Duration::hours(4);
        let gap_end = gap_start + Duration::hours(1);
        if *local < gap_start {
            LocalResult::Single(Self::winter())
        } else if *local < gap_end {
            LocalResult::None
        } else {
            LocalResult::Single(Self::summer())
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        if *utc < Self::switch_utc() {
            Self::winter()
        } else {
            Self::summer()
        }
    }
}

#[test]
fn test_day_range_starts_after_skipped_midnight() {
    // 2024-09-08 22:00 local
    let now = SpringForwardZone.from_utc_datetime(&common::utc(2024, 9, 9, 1, 0).naive_utc());

    let today = NutritionAggregator::day_range(0, &now);
    assert_eq!(today.start, common::utc(2024, 9, 8, 4, 0));
    assert_eq!(today.end, common::utc(2024, 9, 9, 3, 0));

    let yesterday = NutritionAggregator::day_range(1, &now);
    assert_eq!(yesterday.start, common::utc(2024, 9, 7, 4, 0));
    assert_eq!(yesterday.end, today.start);

    let tomorrow_view =
        SpringForwardZone.from_utc_datetime(&common::utc(2024, 9, 9, 12, 0).naive_utc());
    let next_day = NutritionAggregator::day_range(0, &tomorrow_view);
    assert_eq!(next_day.start, today.end);
}

#[test]
fn test_day_range_falls_back_to_utc_day() {
    common::init_test_logging();
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let now = tz.with_ymd_and_hms(2024, 3, 10, 8, 30, 0).unwrap();

    let range = NutritionAggregator::day_range(u32::MAX, &now);
    assert_eq!(range.start, common::utc(2024, 3, 10, 0, 0));
    assert_eq!(range.end, common::utc(2024, 3, 11, 0, 0));
}

#[test]
fn test_foods_in_range_is_half_open() {
    let now = common::utc(2024, 3, 10, 12, 0);
    let range = NutritionAggregator::day_range(0, &now);
    let foods = vec![
        common::food("start", NutrientTotals::default(), MealType::Snack, range.start),
        common::food("end", NutrientTotals::default(), MealType::Snack, range.end),
        common::food("noon", NutrientTotals::default(), MealType::Snack, now),
    ];
    let names: Vec<String> = NutritionAggregator::foods_in_range(&foods, &range)
        .into_iter()
        .map(|food| food.name)
        .collect();
    assert_eq!(names, vec!["start", "noon"]);
}

#[test]
fn test_clamp_day_offset() {
    assert_eq!(NutritionAggregator::clamp_day_offset(-3, 30), 0);
    assert_eq!(NutritionAggregator::clamp_day_offset(5, 30), 5);
    assert_eq!(NutritionAggregator::clamp_day_offset(45, 30), 30);
}

#[test]
fn test_progress_split_and_daily_value() {
    assert!(approx_eq(NutritionAggregator::goal_progress(50.0, 100.0), 0.5));
    assert!(approx_eq(NutritionAggregator::goal_progress(150.0, 100.0), 1.0));
    assert!(approx_eq(NutritionAggregator::goal_progress(10.0, 0.0), 0.0));
    assert!(approx_eq(NutritionAggregator::goal_progress(-5.0, 100.0), 0.0));

    let split = NutritionAggregator::macro_split(&totals(&[
        (Nutrient::Protein, 30.0),
        (Nutrient::Carbs, 50.0),
        (Nutrient::Fats, 20.0),
    ]));
    assert!(approx_eq(split.protein, 0.3));
    assert!(approx_eq(split.carbs, 0.5));
    assert!(approx_eq(split.fats, 0.2));
    assert_eq!(
        NutritionAggregator::macro_split(&NutrientTotals::default()),
        metriq_intelligence::MacroSplit::default()
    );

    assert_eq!(NutritionAggregator::percent_daily_value(9.0, 18.0), 50);
    assert_eq!(NutritionAggregator::percent_daily_value(1.0, 3.0), 33);
    assert_eq!(NutritionAggregator::percent_daily_value(5.0, 0.0), 0);
}
