// ABOUTME: USDA FoodData Central API client for nutritional data retrieval
// ABOUTME: Implements the FoodLookup collaborator with caching, rate limiting and a fixture mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! USDA `FoodData` Central API Client
//!
//! # Features
//! - Food search filtered by data type
//! - Detailed food information retrieval
//! - Response caching with a configurable TTL
//! - Rate limiting per minute
//! - Fixture-backed mock for tests
//!
//! # API Reference
//! USDA `FoodData` Central API: <https://fdc.nal.usda.gov/api-guide.html>

use async_trait::async_trait;
use metriq_core::errors::{AppError, AppResult, ErrorCode};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Data types searched by default
pub const DEFAULT_DATA_TYPES: [&str; 3] = ["Foundation", "SR Legacy", "Survey (FNDDS)"];

const SERVICE: &str = "USDA API";

/// USDA API client configuration
#[derive(Debug, Clone)]
pub struct UsdaClientConfig {
    /// USDA API key (free from <https://fdc.nal.usda.gov/api-key-signup.html>)
    pub api_key: String,
    /// Base URL for USDA API (default: <https://api.nal.usda.gov/fdc/v1>)
    pub base_url: String,
    /// Cache TTL in seconds (default: 86400 = 24 hours)
    pub cache_ttl_secs: u64,
    /// Rate limit per minute (default: 30)
    pub rate_limit_per_minute: u32,
}

impl Default for UsdaClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.nal.usda.gov/fdc/v1".to_owned(),
            cache_ttl_secs: 86400,
            rate_limit_per_minute: 30,
        }
    }
}

/// Nutrient amount per 100 g of food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodNutrient {
    /// Nutrient name (e.g. "Protein", "Energy")
    pub nutrient_name: String,
    /// Upper-case unit (e.g. "G", "KCAL", "MG")
    #[serde(default)]
    pub unit_name: String,
    /// Amount per 100 g
    #[serde(default, rename = "value")]
    pub amount: f64,
}

impl FoodNutrient {
    /// Create a nutrient entry
    pub fn new(name: impl Into<String>, unit: impl Into<String>, amount: f64) -> Self {
        Self {
            nutrient_name: name.into(),
            unit_name: unit.into(),
            amount,
        }
    }
}

/// A food as returned by search (summary) or details lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// `FoodData` Central ID
    pub fdc_id: u64,
    /// Food description
    #[serde(default)]
    pub description: String,
    /// Data type (e.g. "Foundation", "SR Legacy")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    /// Brand name for branded foods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    /// Nutrients per 100 g
    #[serde(default)]
    pub food_nutrients: Vec<FoodNutrient>,
}

/// Remote nutrition database
#[async_trait]
pub trait FoodLookup: Send + Sync {
    /// Search foods restricted to `data_types`; a blank query returns nothing
    async fn search_foods(&self, query: &str, data_types: &[&str]) -> AppResult<Vec<Food>>;

    /// Full nutrient profile of one food
    async fn get_food_details(&self, fdc_id: u64) -> AppResult<Food>;
}

/// USDA API search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<Food>,
}

/// USDA API food details response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodDetailsResponse {
    fdc_id: u64,
    #[serde(default)]
    description: String,
    data_type: Option<String>,
    brand_name: Option<String>,
    #[serde(default)]
    food_nutrients: Vec<FoodNutrientResponse>,
}

#[derive(Debug, Deserialize)]
struct FoodNutrientResponse {
    nutrient: Option<NutrientInfo>,
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NutrientInfo {
    name: String,
    #[serde(rename = "unitName", default)]
    unit_name: String,
}

impl From<FoodDetailsResponse> for Food {
    fn from(details: FoodDetailsResponse) -> Self {
        let food_nutrients = details
            .food_nutrients
            .into_iter()
            .filter_map(|n| {
                let nutrient = n.nutrient?;
                Some(FoodNutrient {
                    nutrient_name: nutrient.name,
                    unit_name: nutrient.unit_name.to_ascii_uppercase(),
                    amount: n.amount.unwrap_or(0.0),
                })
            })
            .collect();
        Self {
            fdc_id: details.fdc_id,
            description: details.description,
            data_type: details.data_type,
            brand_name: details.brand_name,
            food_nutrients,
        }
    }
}

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T: Clone> CacheEntry<T> {
    fn fresh(&self, now: Instant) -> Option<T> {
        (now < self.expires_at).then(|| self.data.clone())
    }
}

/// Error for a non-success USDA response
fn status_error(status: StatusCode, body: &str) -> AppError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return AppError::rate_limited(SERVICE);
    }
    AppError::external_service(SERVICE, format!("HTTP {status}: {body}"))
}

/// Sliding-window rate limiter for API requests
#[derive(Debug)]
struct RateLimiter {
    requests: Vec<Instant>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    const fn new(limit: u32, window: Duration) -> Self {
        Self {
            requests: Vec::new(),
            limit,
            window,
        }
    }

    /// Check if a request can be made, removing expired entries
    fn can_request(&mut self) -> bool {
        let now = Instant::now();
        self.requests
            .retain(|&t| now.duration_since(t) < self.window);
        self.requests.len() < self.limit as usize
    }

    fn record_request(&mut self) {
        self.requests.push(Instant::now());
    }

    /// Wait until a request can be made
    async fn wait_if_needed(&mut self) {
        while !self.can_request() {
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }
}

/// USDA `FoodData` Central API Client
pub struct UsdaClient {
    config: UsdaClientConfig,
    http_client: reqwest::Client,
    search_cache: Arc<RwLock<HashMap<String, CacheEntry<Vec<Food>>>>>,
    details_cache: Arc<RwLock<HashMap<u64, CacheEntry<Food>>>>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl UsdaClient {
    /// Create a new USDA API client
    #[must_use]
    pub fn new(config: UsdaClientConfig) -> Self {
        let rate_limiter =
            RateLimiter::new(config.rate_limit_per_minute.max(1), Duration::from_secs(60));

        Self {
            config,
            http_client: reqwest::Client::new(),
            search_cache: Arc::new(RwLock::new(HashMap::new())),
            details_cache: Arc::new(RwLock::new(HashMap::new())),
            rate_limiter: Arc::new(RwLock::new(rate_limiter)),
        }
    }

    fn cache_expiry(&self) -> Instant {
        Instant::now() + Duration::from_secs(self.config.cache_ttl_secs)
    }

    async fn acquire_rate_slot(&self) {
        let mut limiter = self.rate_limiter.write().await;
        limiter.wait_if_needed().await;
        limiter.record_request();
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE, e.to_string()).with_source(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }
        Ok(response)
    }

    /// Clear all caches
    pub async fn clear_caches(&self) {
        self.search_cache.write().await.clear();
        self.details_cache.write().await.clear();
    }

    /// Number of cached search results and food details
    pub async fn cache_stats(&self) -> (usize, usize) {
        let search_count = self.search_cache.read().await.len();
        let details_count = self.details_cache.read().await.len();
        (search_count, details_count)
    }
}

#[async_trait]
impl FoodLookup for UsdaClient {
    async fn search_foods(&self, query: &str, data_types: &[&str]) -> AppResult<Vec<Food>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let cache_key = format!("{query}|{}", data_types.join(","));
        let cached = self
            .search_cache
            .read()
            .await
            .get(&cache_key)
            .and_then(|entry| entry.fresh(Instant::now()));
        if let Some(foods) = cached {
            return Ok(foods);
        }

        self.acquire_rate_slot().await;

        let url = format!("{}/foods/search", self.config.base_url);
        let mut request = self
            .http_client
            .get(&url)
            .query(&[("query", query), ("api_key", self.config.api_key.as_str())]);
        for data_type in data_types {
            request = request.query(&[("dataType", data_type)]);
        }

        let search_response: SearchResponse = self.send(request).await?.json().await.map_err(|e| {
            AppError::external_service(SERVICE, format!("JSON parse error: {e}"))
        })?;
        debug!(query, results = search_response.foods.len(), "USDA search completed");

        self.search_cache.write().await.insert(
            cache_key,
            CacheEntry {
                data: search_response.foods.clone(),
                expires_at: self.cache_expiry(),
            },
        );

        Ok(search_response.foods)
    }

    async fn get_food_details(&self, fdc_id: u64) -> AppResult<Food> {
        let cached = self
            .details_cache
            .read()
            .await
            .get(&fdc_id)
            .and_then(|entry| entry.fresh(Instant::now()));
        if let Some(food) = cached {
            return Ok(food);
        }

        self.acquire_rate_slot().await;

        let url = format!("{}/food/{fdc_id}", self.config.base_url);
        let request = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())]);

        let details_response: FoodDetailsResponse =
            self.send(request).await?.json().await.map_err(|e| {
                AppError::external_service(SERVICE, format!("JSON parse error: {e}"))
            })?;
        let food = Food::from(details_response);

        self.details_cache.write().await.insert(
            fdc_id,
            CacheEntry {
                data: food.clone(),
                expires_at: self.cache_expiry(),
            },
        );

        Ok(food)
    }
}

/// Fixture-backed lookup for tests (no API calls)
pub struct MockFoodLookup {
    foods: HashMap<u64, Food>,
    fail_details: bool,
}

impl MockFoodLookup {
    /// Create a mock with the chicken breast and apple fixtures
    #[must_use]
    pub fn new() -> Self {
        let fixtures = [
            Food {
                fdc_id: 171_477,
                description: "Chicken, breast, meat only, cooked, roasted".to_owned(),
                data_type: Some("SR Legacy".to_owned()),
                brand_name: None,
                food_nutrients: vec![
                    FoodNutrient::new("Energy", "KCAL", 165.0),
                    FoodNutrient::new("Energy", "kJ", 690.0),
                    FoodNutrient::new("Protein", "G", 31.02),
                    FoodNutrient::new("Total lipid (fat)", "G", 3.57),
                    FoodNutrient::new("Carbohydrate, by difference", "G", 0.0),
                    FoodNutrient::new("Iron, Fe", "MG", 1.04),
                    FoodNutrient::new("Zinc, Zn", "MG", 1.0),
                    FoodNutrient::new("Vitamin B-12", "UG", 0.34),
                ],
            },
            Food {
                fdc_id: 171_688,
                description: "Apples, raw, with skin".to_owned(),
                data_type: Some("SR Legacy".to_owned()),
                brand_name: None,
                food_nutrients: vec![
                    FoodNutrient::new("Energy", "KCAL", 52.0),
                    FoodNutrient::new("Protein", "G", 0.26),
                    FoodNutrient::new("Total lipid (fat)", "G", 0.17),
                    FoodNutrient::new("Carbohydrate, by difference", "G", 13.81),
                    FoodNutrient::new("Fiber, total dietary", "G", 2.4),
                    FoodNutrient::new("Vitamin C, total ascorbic acid", "MG", 4.6),
                ],
            },
        ];

        Self {
            foods: fixtures.into_iter().map(|food| (food.fdc_id, food)).collect(),
            fail_details: false,
        }
    }

    /// Add or replace a fixture
    #[must_use]
    pub fn with_food(mut self, food: Food) -> Self {
        self.foods.insert(food.fdc_id, food);
        self
    }

    /// Make every details lookup fail as if the service were down
    #[must_use]
    pub const fn with_failing_details(mut self) -> Self {
        self.fail_details = true;
        self
    }
}

impl Default for MockFoodLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FoodLookup for MockFoodLookup {
    async fn search_foods(&self, query: &str, data_types: &[&str]) -> AppResult<Vec<Food>> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Ok(Vec::new());
        }

        let mut results: Vec<Food> = self
            .foods
            .values()
            .filter(|food| food.description.to_lowercase().contains(&query_lower))
            .filter(|food| {
                data_types.is_empty()
                    || food
                        .data_type
                        .as_deref()
                        .is_some_and(|kind| data_types.contains(&kind))
            })
            .cloned()
            .collect();
        results.sort_by_key(|food| food.fdc_id);
        Ok(results)
    }

    async fn get_food_details(&self, fdc_id: u64) -> AppResult<Food> {
        if self.fail_details {
            return Err(AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                format!("{SERVICE}: details unavailable for {fdc_id}"),
            ));
        }
        self.foods
            .get(&fdc_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Food with FDC ID {fdc_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_response_flattens_nutrients() {
        let response: FoodDetailsResponse = serde_json::from_str(
            r#"{"fdcId": 42, "description": "Oats", "dataType": "Foundation",
                "foodNutrients": [
                    {"nutrient": {"id": 1003, "name": "Protein", "unitName": "g"}, "amount": 13.5},
                    {"amount": 1.0}
                ]}"#,
        )
        .unwrap();
        let food = Food::from(response);
        assert_eq!(food.food_nutrients.len(), 1);
        assert_eq!(food.food_nutrients[0].nutrient_name, "Protein");
        assert_eq!(food.food_nutrients[0].unit_name, "G");
    }

    #[test]
    fn test_details_units_are_upper_cased() {
        let response: FoodDetailsResponse = serde_json::from_str(
            r#"{"fdcId": 9, "description": "Milk",
                "foodNutrients": [
                    {"nutrient": {"name": "Energy", "unitName": "kcal"}, "amount": 61.0},
                    {"nutrient": {"name": "Energy", "unitName": "kJ"}, "amount": 255.0}
                ]}"#,
        )
        .unwrap();
        let units: Vec<String> = Food::from(response)
            .food_nutrients
            .into_iter()
            .map(|n| n.unit_name)
            .collect();
        assert_eq!(units, ["KCAL", "KJ"]);
    }

    #[test]
    fn test_status_error_maps_429_to_rate_limited() {
        let limited = status_error(StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert_eq!(limited.code, ErrorCode::ExternalRateLimited);

        let failed = status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(failed.code, ErrorCode::ExternalServiceError);
        assert!(failed.message.contains("boom"));
    }

    #[test]
    fn test_rate_limiter_blocks_at_limit_and_expires_window() {
        let mut limiter = RateLimiter::new(2, Duration::from_secs(60));
        assert!(limiter.can_request());
        limiter.record_request();
        limiter.record_request();
        assert!(!limiter.can_request());

        let mut short = RateLimiter::new(1, Duration::ZERO);
        short.record_request();
        assert!(short.can_request());
    }

    #[test]
    fn test_cache_entry_expires() {
        let now = Instant::now();
        let entry = CacheEntry {
            data: 5_u32,
            expires_at: now + Duration::from_secs(10),
        };
        assert_eq!(entry.fresh(now), Some(5));
        assert_eq!(entry.fresh(now + Duration::from_secs(10)), None);
    }

    #[tokio::test]
    async fn test_cached_search_skips_network() {
        let client = UsdaClient::new(UsdaClientConfig {
            api_key: "key".to_owned(),
            base_url: "http://127.0.0.1:9".to_owned(),
            ..UsdaClientConfig::default()
        });
        let rice: Food = serde_json::from_str(r#"{"fdcId": 7, "description": "Rice"}"#).unwrap();
        client.search_cache.write().await.insert(
            "rice|Foundation".to_owned(),
            CacheEntry {
                data: vec![rice.clone()],
                expires_at: client.cache_expiry(),
            },
        );

        let foods = client.search_foods("  rice ", &["Foundation"]).await.unwrap();
        assert_eq!(foods, vec![rice]);
        assert_eq!(client.cache_stats().await, (1, 0));

        client.clear_caches().await;
        assert_eq!(client.cache_stats().await, (0, 0));
    }

    #[test]
    fn test_search_food_reads_value_field() {
        let food: Food = serde_json::from_str(
            r#"{"fdcId": 7, "description": "Rice",
                "foodNutrients": [{"nutrientName": "Energy", "unitName": "KCAL", "value": 130.0}]}"#,
        )
        .unwrap();
        assert!((food.food_nutrients[0].amount - 130.0).abs() < f64::EPSILON);
    }
}
