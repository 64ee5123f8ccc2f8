// ABOUTME: Training volume aggregation configuration
// ABOUTME: Number of weekly buckets shown by the volume chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Weekly volume chart settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// Weekly buckets shown, current week included (8)
    pub weeks: u32,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            weeks: crate::volume_aggregator::DEFAULT_WEEKS,
        }
    }
}

impl VolumeConfig {
    /// Validate volume settings
    ///
    /// # Errors
    ///
    /// Returns an error when no weeks are requested
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.weeks == 0 {
            return Err(ConfigError::ValueOutOfRange("volume weeks must be > 0"));
        }
        Ok(())
    }
}
