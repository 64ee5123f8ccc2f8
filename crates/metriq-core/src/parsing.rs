// ABOUTME: Lenient text-to-number parsing for user-entered workout and profile fields
// ABOUTME: Blank or malformed text reads as zero instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reps, weights and profile measurements are captured as free text. A
//! dashboard must never fail because of a stray character, so every numeric
//! read goes through these helpers.

/// Parse a decimal value, treating blank or invalid text as `0.0`
///
/// Non-finite results (`"NaN"`, `"inf"`) also read as `0.0`.
#[must_use]
pub fn lenient_f64(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parse a whole number, treating blank or invalid text as `0`
#[must_use]
pub fn lenient_u32(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}
