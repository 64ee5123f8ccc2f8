// ABOUTME: Static exercise catalog record as delivered by the exercise feed
// ABOUTME: Only the name and muscle lists feed the metrics; other fields are carried for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One exercise definition from the static catalog feed
///
/// Muscle names are free text (e.g. `"quadriceps"`, `"lower back"`) and are
/// resolved to body-map regions by the muscle target mapper. Missing lists in
/// the feed deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    /// Unique exercise name, referenced by routine exercises
    pub name: String,
    /// Muscles primarily worked
    #[serde(default, deserialize_with = "null_as_empty")]
    pub primary_muscles: Vec<String>,
    /// Muscles worked as synergists
    #[serde(default, deserialize_with = "null_as_empty")]
    pub secondary_muscles: Vec<String>,
    /// Feed identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Movement category (strength, stretching, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Equipment required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    /// Experience level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl ExerciseRecord {
    /// Create a record with the given muscle lists
    pub fn new(
        name: impl Into<String>,
        primary_muscles: &[&str],
        secondary_muscles: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            primary_muscles: primary_muscles.iter().map(|m| (*m).to_owned()).collect(),
            secondary_muscles: secondary_muscles.iter().map(|m| (*m).to_owned()).collect(),
            ..Self::default()
        }
    }

    /// Primary then secondary muscle names
    pub fn all_muscles(&self) -> impl Iterator<Item = &str> {
        self.primary_muscles
            .iter()
            .chain(&self.secondary_muscles)
            .map(String::as_str)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
