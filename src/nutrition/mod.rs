// ABOUTME: Nutrition services built on the food lookup collaborator
// ABOUTME: Turns looked-up foods into scaled diary entries and stores them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Food search and diary ingestion
pub mod ingestion;

pub use ingestion::{FoodIngestor, UNKNOWN_FOOD_NAME};
