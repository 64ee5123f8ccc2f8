// ABOUTME: Maps free-text catalog muscle names onto front and rear body-map regions
// ABOUTME: Fixed lookup table; unknown names resolve to no regions rather than an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use metriq_core::models::{FrontMuscleGroup, RearMuscleGroup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use FrontMuscleGroup as F;
use RearMuscleGroup as R;

/// Body-map regions targeted by one or more muscle names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleTargets {
    /// Regions on the front body map
    pub front: BTreeSet<FrontMuscleGroup>,
    /// Regions on the rear body map
    pub rear: BTreeSet<RearMuscleGroup>,
}

impl MuscleTargets {
    /// True when neither map has a region
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.rear.is_empty()
    }

    /// Union `other` into `self`
    pub fn merge(&mut self, other: Self) {
        self.front.extend(other.front);
        self.rear.extend(other.rear);
    }
}

/// Resolves catalog muscle names
pub struct MuscleTargetMapper;

impl MuscleTargetMapper {
    /// Map one muscle name, matching case-insensitively after trimming
    ///
    /// `"adductors"` and `"lower back"` have no body-map region and resolve to
    /// nothing, like any name missing from the table.
    #[must_use]
    pub fn map_muscle_name(raw: &str) -> MuscleTargets {
        let (front, rear): (&[F], &[R]) = match raw.trim().to_lowercase().as_str() {
            "quads" | "quadriceps" => (&[F::RightQuads, F::LeftQuads], &[]),
            "chest" | "pectorals" => (&[F::Pecs], &[]),
            "abs" | "abdominals" => (&[F::Abs], &[]),
            "obliques" => (&[F::RightOblique, F::LeftOblique], &[]),
            "biceps" => (&[F::RightBicep, F::LeftBicep], &[]),
            "forearms" => (
                &[F::RightForearmFront, F::LeftForearmFront],
                &[R::RightForearmRear, R::LeftForearmRear],
            ),
            "front delts" | "shoulders" => (&[F::RightDeltsFront, F::LeftDeltsFront], &[]),
            "neck" => (&[F::Neck], &[]),
            "serratus anterior" => (&[F::RightSerratusAnterior, F::LeftSerratusAnterior], &[]),
            "tibialis" => (&[F::RightCalfFront, F::LeftCalfFront], &[]),
            "back" | "lats" | "latissimus dorsi" => (&[], &[R::Back]),
            "traps" | "trapezius" => (&[F::TrapsFront], &[R::TrapsRear]),
            "glutes" | "gluteus maximus" => (&[], &[R::Glutes]),
            "hamstrings" => (&[], &[R::RightHamstring, R::LeftHamstring]),
            "calves" | "gastrocnemius" | "soleus" => (&[], &[R::RightCalfRear, R::LeftCalfRear]),
            "triceps" => (
                &[F::RightTricepsFront, F::LeftTricepsFront],
                &[R::RightTricepsRear, R::LeftTricepsRear],
            ),
            "rear delts" => (&[], &[R::RightDeltsRear, R::LeftDeltsRear]),
            _ => (&[], &[]),
        };
        MuscleTargets {
            front: front.iter().copied().collect(),
            rear: rear.iter().copied().collect(),
        }
    }

    /// Union of the mappings of several muscle names
    pub fn map_all<'a>(names: impl IntoIterator<Item = &'a str>) -> MuscleTargets {
        names
            .into_iter()
            .map(Self::map_muscle_name)
            .fold(MuscleTargets::default(), |mut acc, targets| {
                acc.merge(targets);
                acc
            })
    }
}
