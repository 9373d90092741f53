// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! The five-dimensional needs/mood state

use serde::{Deserialize, Serialize};

/// Clamp a value to the [0, 1] range. NaN collapses to 0.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Pet needs and mood, every field normalized to [0, 1]
///
/// - `hunger`: 0 = full, 1 = starving
/// - `energy`: 0 = exhausted, 1 = fully rested
/// - `affection_need`: 0 = satisfied, 1 = desperate for attention
/// - `trust`: 0 = distrust, 1 = full trust
/// - `stress`: 0 = calm, 1 = very stressed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    pub hunger: f32,
    pub energy: f32,
    pub affection_need: f32,
    pub trust: f32,
    pub stress: f32,
}

impl PetState {
    pub fn new(hunger: f32, energy: f32, affection_need: f32, trust: f32, stress: f32) -> Self {
        Self {
            hunger,
            energy,
            affection_need,
            trust,
            stress,
        }
        .clamped()
    }

    /// Copy with every field forced into [0, 1]
    pub fn clamped(self) -> Self {
        Self {
            hunger: clamp01(self.hunger),
            energy: clamp01(self.energy),
            affection_need: clamp01(self.affection_need),
            trust: clamp01(self.trust),
            stress: clamp01(self.stress),
        }
    }

    pub fn is_in_range(&self) -> bool {
        self.as_array().iter().all(|v| (0.0..=1.0).contains(v))
    }

    pub fn as_array(&self) -> [f32; 5] {
        [
            self.hunger,
            self.energy,
            self.affection_need,
            self.trust,
            self.stress,
        ]
    }
}

impl Default for PetState {
    fn default() -> Self {
        Self {
            hunger: 0.3,         // slightly hungry
            energy: 0.7,         // fairly rested
            affection_need: 0.4, // moderate need
            trust: 0.5,          // neutral
            stress: 0.2,         // fairly calm
        }
    }
}
