// ABOUTME: Core types for the Metriq fitness and nutrition metrics workspace
// ABOUTME: Foundation crate with error handling, data models, and lenient numeric parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Metriq Core
//!
//! Foundation crate providing shared types for the Metriq derived-metrics
//! workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Workouts, logged foods, user profile and anatomical muscle groups
//! - **parsing**: Lenient text-to-number parsing used by user-entered fields

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (workouts, foods, profile, muscle groups)
pub mod models;

/// Lenient numeric parsing for user-entered text fields
pub mod parsing;
