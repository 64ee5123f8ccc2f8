// ABOUTME: Main library entry point for the Metriq fitness and nutrition tracker services
// ABOUTME: Wires configuration, logging, catalog loading, food ingestion, sessions and storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Metriq
//!
//! Application services around the derived-metrics calculators in
//! `metriq-intelligence`.
//!
//! ## Architecture
//!
//! - **Config**: Environment-driven application settings
//! - **Logging**: Structured `tracing` output
//! - **Catalog**: One-time exercise catalog loading
//! - **External**: Nutrition database lookup (USDA `FoodData` Central)
//! - **Nutrition**: Logging looked-up foods into the diary
//! - **Session**: Workout timer and single-flight save
//! - **Storage**: Persistence collaborator traits and an in-memory store
//! - **Dashboard**: Every metric recomputed over one snapshot
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use metriq::catalog::{CatalogLoader, CatalogSource};
//! use metriq::config::IntelligenceConfig;
//! use metriq::dashboard::{DashboardInputs, DashboardSnapshot};
//!
//! let loader = CatalogLoader::new(CatalogSource::Path("exercises.json".into()));
//! let catalog = loader.get_or_load();
//! let snapshot = DashboardSnapshot::compute(
//!     &DashboardInputs::default(),
//!     &catalog,
//!     IntelligenceConfig::global(),
//!     &Utc::now(),
//! );
//! println!("{} weeks of volume", snapshot.weekly_volume.len());
//! ```

/// Exercise catalog loading
pub mod catalog;

/// Application configuration
pub mod config;

/// Dashboard snapshot
pub mod dashboard;

/// External API clients
pub mod external;

/// Structured logging setup
pub mod logging;

/// Nutrition services
pub mod nutrition;

/// Workout session timer and save guard
pub mod session;

/// Persistence collaborators
pub mod storage;

pub use metriq_core::errors::{AppError, AppResult, ErrorCode};
