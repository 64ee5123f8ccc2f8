// ABOUTME: Training volume aggregation by local day and by week
// ABOUTME: Volume is weight times reps per set, summed over exercises and logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Volume Aggregator
//!
//! Logs carry UTC timestamps; every grouping here happens on the calendar
//! date in the caller's time zone. Reps and weights are user text and read
//! as zero when they do not parse.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};
use metriq_core::models::{ExerciseSet, WorkoutLog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weekly buckets shown by default
pub const DEFAULT_WEEKS: u32 = 8;

/// Week label format, e.g. `Mar 4`
pub const WEEK_LABEL_FORMAT: &str = "%b %-d";

/// Volume lifted on one local day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyVolume {
    /// Local calendar date
    pub date: NaiveDate,
    /// Sum of weight x reps
    pub volume: f64,
}

/// Volume lifted in one Monday-based week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    /// Monday starting the week
    pub week_start: NaiveDate,
    /// Chart label for `week_start`
    pub label: String,
    /// Sum of weight x reps
    pub volume: f64,
}

/// Heaviest set of an exercise on one local day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyMaxWeight {
    /// Local calendar date
    pub date: NaiveDate,
    /// Heaviest weight entered for the exercise that day
    pub max_weight: f64,
}

/// Training volume aggregation
pub struct VolumeAggregator;

impl VolumeAggregator {
    /// Volume of a single set
    #[must_use]
    pub fn set_volume(set: &ExerciseSet) -> f64 {
        set.weight_value() * set.reps_value()
    }

    /// Volume of a whole workout
    #[must_use]
    pub fn log_volume(log: &WorkoutLog) -> f64 {
        log.exercises
            .iter()
            .flat_map(|exercise| &exercise.sets)
            .map(Self::set_volume)
            .sum()
    }

    /// Volume per local day, oldest first; days without logs are omitted
    #[must_use]
    pub fn total_volume_by_day<Tz: TimeZone>(logs: &[WorkoutLog], tz: &Tz) -> Vec<DailyVolume> {
        let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for log in logs {
            *by_day.entry(local_date(log, tz)).or_insert(0.0) += Self::log_volume(log);
        }
        by_day
            .into_iter()
            .map(|(date, volume)| DailyVolume { date, volume })
            .collect()
    }

    /// Volume for the current week and the `weeks - 1` weeks before it, oldest first
    ///
    /// Only logs dated within `weeks` weeks of today count. Every seeded week
    /// is returned even when empty; a log whose week was not seeded is ignored.
    #[must_use]
    pub fn weekly_volume<Tz: TimeZone>(
        logs: &[WorkoutLog],
        now: &DateTime<Tz>,
        weeks: u32,
    ) -> Vec<WeeklyVolume> {
        let tz = now.timezone();
        let today = now.date_naive();
        let window_start = today
            .checked_sub_days(Days::new(u64::from(weeks) * 7))
            .unwrap_or(NaiveDate::MIN);
        let current_week = week_start(today);

        let mut buckets: BTreeMap<NaiveDate, f64> = (0..u64::from(weeks))
            .filter_map(|offset| current_week.checked_sub_days(Days::new(offset * 7)))
            .map(|monday| (monday, 0.0))
            .collect();

        for log in logs {
            let date = local_date(log, &tz);
            if date < window_start || date > today {
                continue;
            }
            if let Some(volume) = buckets.get_mut(&week_start(date)) {
                *volume += Self::log_volume(log);
            }
        }

        buckets
            .into_iter()
            .map(|(week_start, volume)| WeeklyVolume {
                week_start,
                label: week_start.format(WEEK_LABEL_FORMAT).to_string(),
                volume,
            })
            .collect()
    }

    /// Heaviest weight per local day for one exercise, oldest first
    ///
    /// Exercise names match ignoring case. A matching exercise with no sets
    /// records a zero for its day.
    #[must_use]
    pub fn max_weight_progression<Tz: TimeZone>(
        logs: &[WorkoutLog],
        exercise_name: &str,
        tz: &Tz,
    ) -> Vec<DailyMaxWeight> {
        let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for log in logs {
            for exercise in log
                .exercises
                .iter()
                .filter(|exercise| exercise.name.eq_ignore_ascii_case(exercise_name))
            {
                let heaviest = exercise
                    .sets
                    .iter()
                    .map(ExerciseSet::weight_value)
                    .fold(0.0_f64, f64::max);
                let entry = by_day.entry(local_date(log, tz)).or_insert(heaviest);
                *entry = entry.max(heaviest);
            }
        }
        by_day
            .into_iter()
            .map(|(date, max_weight)| DailyMaxWeight { date, max_weight })
            .collect()
    }
}

fn local_date<Tz: TimeZone>(log: &WorkoutLog, tz: &Tz) -> NaiveDate {
    log.timestamp.with_timezone(tz).date_naive()
}

/// Monday on or before `date`
fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(days_from_monday))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_start_is_previous_or_same_monday() {
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(week_start(monday), monday);
        assert_eq!(week_start(sunday), monday);
    }

    #[test]
    fn test_label_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(date.format(WEEK_LABEL_FORMAT).to_string(), "Mar 4");
    }
}
