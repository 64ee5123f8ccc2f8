// ABOUTME: Anatomical muscle-group vocabularies for the front and rear body maps
// ABOUTME: Closed enumerations consumed by recovery scoring and heat-map rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Muscle regions drawn on the front body map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrontMuscleGroup {
    /// Right quadriceps
    RightQuads,
    /// Left quadriceps
    LeftQuads,
    /// Pectorals
    Pecs,
    /// Abdominals
    Abs,
    /// Right oblique
    RightOblique,
    /// Left oblique
    LeftOblique,
    /// Right biceps
    RightBicep,
    /// Left biceps
    LeftBicep,
    /// Right forearm, front view
    RightForearmFront,
    /// Left forearm, front view
    LeftForearmFront,
    /// Right anterior deltoid
    RightDeltsFront,
    /// Left anterior deltoid
    LeftDeltsFront,
    /// Neck
    Neck,
    /// Right serratus anterior
    RightSerratusAnterior,
    /// Left serratus anterior
    LeftSerratusAnterior,
    /// Right tibialis / lower leg, front view
    RightCalfFront,
    /// Left tibialis / lower leg, front view
    LeftCalfFront,
    /// Trapezius as seen from the front
    TrapsFront,
    /// Right triceps as seen from the front
    RightTricepsFront,
    /// Left triceps as seen from the front
    LeftTricepsFront,
}

impl FrontMuscleGroup {
    /// Every front region, in body-map drawing order
    pub const ALL: [Self; 20] = [
        Self::RightQuads,
        Self::LeftQuads,
        Self::Pecs,
        Self::Abs,
        Self::RightOblique,
        Self::LeftOblique,
        Self::RightBicep,
        Self::LeftBicep,
        Self::RightForearmFront,
        Self::LeftForearmFront,
        Self::RightDeltsFront,
        Self::LeftDeltsFront,
        Self::Neck,
        Self::RightSerratusAnterior,
        Self::LeftSerratusAnterior,
        Self::RightCalfFront,
        Self::LeftCalfFront,
        Self::TrapsFront,
        Self::RightTricepsFront,
        Self::LeftTricepsFront,
    ];

    /// Stable identifier used by the body-map assets
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RightQuads => "RIGHT_QUADS",
            Self::LeftQuads => "LEFT_QUADS",
            Self::Pecs => "PECS",
            Self::Abs => "ABS",
            Self::RightOblique => "RIGHT_OBLIQUE",
            Self::LeftOblique => "LEFT_OBLIQUE",
            Self::RightBicep => "RIGHT_BICEP",
            Self::LeftBicep => "LEFT_BICEP",
            Self::RightForearmFront => "RIGHT_FOREARM_FRONT",
            Self::LeftForearmFront => "LEFT_FOREARM_FRONT",
            Self::RightDeltsFront => "RIGHT_DELTS_FRONT",
            Self::LeftDeltsFront => "LEFT_DELTS_FRONT",
            Self::Neck => "NECK",
            Self::RightSerratusAnterior => "RIGHT_SERRATUS_ANTERIOR",
            Self::LeftSerratusAnterior => "LEFT_SERRATUS_ANTERIOR",
            Self::RightCalfFront => "RIGHT_CALF_FRONT",
            Self::LeftCalfFront => "LEFT_CALF_FRONT",
            Self::TrapsFront => "TRAPS_FRONT",
            Self::RightTricepsFront => "RIGHT_TRICEPS_FRONT",
            Self::LeftTricepsFront => "LEFT_TRICEPS_FRONT",
        }
    }
}

impl fmt::Display for FrontMuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Muscle regions drawn on the rear body map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RearMuscleGroup {
    /// Latissimus dorsi and general back
    Back,
    /// Trapezius as seen from the rear
    TrapsRear,
    /// Gluteus maximus
    Glutes,
    /// Right hamstring
    RightHamstring,
    /// Left hamstring
    LeftHamstring,
    /// Right calf, rear view
    RightCalfRear,
    /// Left calf, rear view
    LeftCalfRear,
    /// Right triceps, rear view
    RightTricepsRear,
    /// Left triceps, rear view
    LeftTricepsRear,
    /// Right posterior deltoid
    RightDeltsRear,
    /// Left posterior deltoid
    LeftDeltsRear,
    /// Right forearm, rear view
    RightForearmRear,
    /// Left forearm, rear view
    LeftForearmRear,
}

impl RearMuscleGroup {
    /// Every rear region, in body-map drawing order
    pub const ALL: [Self; 13] = [
        Self::Back,
        Self::TrapsRear,
        Self::Glutes,
        Self::RightHamstring,
        Self::LeftHamstring,
        Self::RightCalfRear,
        Self::LeftCalfRear,
        Self::RightTricepsRear,
        Self::LeftTricepsRear,
        Self::RightDeltsRear,
        Self::LeftDeltsRear,
        Self::RightForearmRear,
        Self::LeftForearmRear,
    ];

    /// Stable identifier used by the body-map assets
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Back => "BACK",
            Self::TrapsRear => "TRAPS_REAR",
            Self::Glutes => "GLUTES",
            Self::RightHamstring => "RIGHT_HAMSTRING",
            Self::LeftHamstring => "LEFT_HAMSTRING",
            Self::RightCalfRear => "RIGHT_CALF_REAR",
            Self::LeftCalfRear => "LEFT_CALF_REAR",
            Self::RightTricepsRear => "RIGHT_TRICEPS_REAR",
            Self::LeftTricepsRear => "LEFT_TRICEPS_REAR",
            Self::RightDeltsRear => "RIGHT_DELTS_REAR",
            Self::LeftDeltsRear => "LEFT_DELTS_REAR",
            Self::RightForearmRear => "RIGHT_FOREARM_REAR",
            Self::LeftForearmRear => "LEFT_FOREARM_REAR",
        }
    }
}

impl fmt::Display for RearMuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
