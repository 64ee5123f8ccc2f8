// ABOUTME: External API client modules (USDA FoodData Central)
// ABOUTME: Provides the FoodLookup collaborator, its HTTP client and a fixture mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients

pub mod usda_client;

pub use usda_client::{
    Food, FoodLookup, FoodNutrient, MockFoodLookup, UsdaClient, UsdaClientConfig,
    DEFAULT_DATA_TYPES,
};
