// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Feature encoding
//!
//! Pure projection of (PetState, InteractionStats, time) into the 12-float
//! network input. Holds no state between calls.

use core::f32::consts::TAU;

use neuropet_structures::{clamp01, Features, InteractionStats, PetState};

/// Normalization horizons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureEncoder {
    /// Time-since-interaction horizon in seconds
    pub idle_horizon_s: f32,
    /// Assumed max interactions per 5-minute window
    pub max_count_5m: f32,
    /// Ignore-duration horizon in seconds
    pub ignore_horizon_s: f32,
}

impl Default for FeatureEncoder {
    fn default() -> Self {
        Self {
            idle_horizon_s: 600.0,
            max_count_5m: 10.0,
            ignore_horizon_s: 300.0,
        }
    }
}

impl FeatureEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode features.
    ///
    /// `day_fraction` is the position in the day in [0, 1), 0 = midnight.
    pub fn encode(
        &self,
        state: &PetState,
        stats: &InteractionStats,
        now_ms: u64,
        day_fraction: f32,
    ) -> Features {
        let since_interaction_s = stats.since_interaction_ms(now_ms) as f32 / 1000.0;

        let ignore_time_norm = match stats.ignore_start_ms {
            Some(start) => {
                let ignored_s = now_ms.saturating_sub(start) as f32 / 1000.0;
                clamp01(ignored_s / self.ignore_horizon_s)
            }
            None => 0.0,
        };

        let angle = day_fraction.rem_euclid(1.0) * TAU;

        Features {
            hunger: clamp01(state.hunger),
            energy: clamp01(state.energy),
            affection_need: clamp01(state.affection_need),
            trust: clamp01(state.trust),
            stress: clamp01(state.stress),
            dt_seconds_norm: clamp01(since_interaction_s / self.idle_horizon_s),
            feed_count_5m_norm: clamp01(stats.feed_count_5m as f32 / self.max_count_5m),
            pet_count_5m_norm: clamp01(stats.pet_count_5m as f32 / self.max_count_5m),
            ignore_time_norm,
            time_of_day_sin: angle.sin().clamp(-1.0, 1.0),
            time_of_day_cos: angle.cos().clamp(-1.0, 1.0),
            spam_score_norm: clamp01(stats.spam_score),
        }
    }
}

/// Encode with the default horizons
pub fn encode_features(
    state: &PetState,
    stats: &InteractionStats,
    now_ms: u64,
    day_fraction: f32,
) -> Features {
    FeatureEncoder::default().encode(state, stats, now_ms, day_fraction)
}
