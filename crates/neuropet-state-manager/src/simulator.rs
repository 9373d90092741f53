// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Needs/Mood Simulation
//!
//! ## Time-driven update (per second, dt = elapsed_ms / 1000)
//!
//! ```text
//! hunger         += hunger_rate · dt
//! energy         += energy_regen_rate · dt      (while sleeping)
//!                -= energy_decay_rate · dt      (otherwise)
//! affection_need += affection_decay_rate · dt
//! stress         += −stress_decay_rate · dt
//!                   + 0.0005 · dt · (hunger − 0.7) / 0.3   if hunger > 0.7
//!                   + 0.0003 · dt · (0.2 − energy) / 0.2   if energy < 0.2
//!                   + 0.0002 · dt                          if affection_need > 0.8
//! trust          −= trust_decay_rate · dt
//! ```
//!
//! Each field is clamped to [0, 1] once, after its terms are combined.
//!
//! ## Interaction effects
//!
//! `effectiveness = 1 − spam_score · spam_penalty`; the relevant need drops by
//! `reduction · effectiveness`. Interactions that met a real need (> 0.5) with
//! effectiveness > 0.5 earn trust; unnecessary ones cost a little stress.

use neuropet_structures::{clamp01, Action, InteractionStats, PetState};
use serde::{Deserialize, Serialize};

/// Hunger above this raises stress
const HUNGER_STRESS_THRESHOLD: f32 = 0.7;
/// Energy below this raises stress
const ENERGY_STRESS_THRESHOLD: f32 = 0.2;
/// Affection need above this raises stress
const AFFECTION_STRESS_THRESHOLD: f32 = 0.8;

const HUNGER_STRESS_RATE: f32 = 0.0005;
const ENERGY_STRESS_RATE: f32 = 0.0003;
const AFFECTION_STRESS_RATE: f32 = 0.0002;

/// A need above this is "real"; meeting it can earn trust
const NEED_MET_THRESHOLD: f32 = 0.5;
/// Minimum effectiveness for an interaction to earn trust
const TRUST_EFFECTIVENESS_THRESHOLD: f32 = 0.5;

/// Rates and interaction effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateConfig {
    /// hunger increase per second
    pub hunger_rate: f32,
    /// energy decrease per second when awake
    pub energy_decay_rate: f32,
    /// energy increase per second when sleeping
    pub energy_regen_rate: f32,
    /// affection need increase per second
    pub affection_decay_rate: f32,
    /// natural stress decrease per second
    pub stress_decay_rate: f32,
    /// natural trust decrease per second
    pub trust_decay_rate: f32,

    pub feed_hunger_reduction: f32,
    pub feed_stress_reduction: f32,
    pub feed_trust_bonus: f32,
    /// hunger below this makes a feed unnecessary
    pub feed_unneeded_threshold: f32,
    pub feed_unneeded_stress: f32,

    pub pet_affection_reduction: f32,
    pub pet_stress_reduction: f32,
    pub pet_trust_bonus: f32,
    /// affection need below this makes petting unnecessary
    pub pet_unneeded_threshold: f32,
    pub pet_unneeded_stress: f32,

    /// effect reduction at full spam score
    pub spam_penalty: f32,
    /// spam score added by every interaction
    pub spam_increment: f32,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            hunger_rate: 0.001,          // ~16 min from 0 to 1
            energy_decay_rate: 0.0008,   // ~20 min awake
            energy_regen_rate: 0.002,    // ~8 min asleep
            affection_decay_rate: 0.0005, // ~33 min
            stress_decay_rate: 0.0003,
            trust_decay_rate: 0.00001,

            feed_hunger_reduction: 0.4,
            feed_stress_reduction: 0.05,
            feed_trust_bonus: 0.02,
            feed_unneeded_threshold: 0.2,
            feed_unneeded_stress: 0.03,

            pet_affection_reduction: 0.35,
            pet_stress_reduction: 0.1,
            pet_trust_bonus: 0.015,
            pet_unneeded_threshold: 0.15,
            pet_unneeded_stress: 0.02,

            spam_penalty: 0.7,
            spam_increment: 0.15,
        }
    }
}

/// What an interaction did, for logging and callers that care
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionEffect {
    pub effectiveness: f32,
    pub need_before: f32,
    pub need_after: f32,
    pub trust_gained: bool,
    pub unnecessary: bool,
}

#[derive(Debug, Clone, Default)]
pub struct StateSimulator {
    config: StateConfig,
}

impl StateSimulator {
    pub fn new(config: StateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    /// Advance the state by `elapsed_ms` while the pet performs `current_action`
    pub fn tick(&self, state: &mut PetState, elapsed_ms: u64, current_action: Action) {
        let c = &self.config;
        let dt = elapsed_ms as f32 / 1000.0;

        state.hunger = clamp01(state.hunger + c.hunger_rate * dt);

        state.energy = if current_action == Action::Sleep {
            clamp01(state.energy + c.energy_regen_rate * dt)
        } else {
            clamp01(state.energy - c.energy_decay_rate * dt)
        };

        state.affection_need = clamp01(state.affection_need + c.affection_decay_rate * dt);

        let mut stress_change = -c.stress_decay_rate * dt;
        if state.hunger > HUNGER_STRESS_THRESHOLD {
            stress_change += HUNGER_STRESS_RATE * dt * (state.hunger - HUNGER_STRESS_THRESHOLD)
                / (1.0 - HUNGER_STRESS_THRESHOLD);
        }
        if state.energy < ENERGY_STRESS_THRESHOLD {
            stress_change += ENERGY_STRESS_RATE * dt * (ENERGY_STRESS_THRESHOLD - state.energy)
                / ENERGY_STRESS_THRESHOLD;
        }
        if state.affection_need > AFFECTION_STRESS_THRESHOLD {
            stress_change += AFFECTION_STRESS_RATE * dt;
        }
        state.stress = clamp01(state.stress + stress_change);

        state.trust = clamp01(state.trust - c.trust_decay_rate * dt);
    }

    fn effectiveness(&self, stats: &InteractionStats) -> f32 {
        1.0 - clamp01(stats.spam_score) * self.config.spam_penalty
    }

    fn bump_spam(&self, stats: &mut InteractionStats) {
        stats.spam_score = clamp01(stats.spam_score + self.config.spam_increment);
    }

    /// Apply one feed
    pub fn apply_feed(&self, state: &mut PetState, stats: &mut InteractionStats) -> InteractionEffect {
        let c = &self.config;
        let effectiveness = self.effectiveness(stats);
        let need_before = state.hunger;

        state.hunger = clamp01(state.hunger - c.feed_hunger_reduction * effectiveness);
        state.stress = clamp01(state.stress - c.feed_stress_reduction * effectiveness);

        let trust_gained =
            need_before > NEED_MET_THRESHOLD && effectiveness > TRUST_EFFECTIVENESS_THRESHOLD;
        if trust_gained {
            state.trust = clamp01(state.trust + c.feed_trust_bonus);
        }

        let unnecessary = need_before < c.feed_unneeded_threshold;
        if unnecessary {
            state.stress = clamp01(state.stress + c.feed_unneeded_stress);
        }

        self.bump_spam(stats);

        tracing::debug!(
            target: "neuropet-state-manager",
            effectiveness, need_before, need_after = state.hunger, trust_gained, unnecessary,
            "feed applied"
        );

        InteractionEffect {
            effectiveness,
            need_before,
            need_after: state.hunger,
            trust_gained,
            unnecessary,
        }
    }

    /// Apply one pet
    pub fn apply_pet(&self, state: &mut PetState, stats: &mut InteractionStats) -> InteractionEffect {
        let c = &self.config;
        let effectiveness = self.effectiveness(stats);
        let need_before = state.affection_need;

        state.affection_need =
            clamp01(state.affection_need - c.pet_affection_reduction * effectiveness);
        state.stress = clamp01(state.stress - c.pet_stress_reduction * effectiveness);

        let trust_gained =
            need_before > NEED_MET_THRESHOLD && effectiveness > TRUST_EFFECTIVENESS_THRESHOLD;
        if trust_gained {
            state.trust = clamp01(state.trust + c.pet_trust_bonus);
        }

        let unnecessary = need_before < c.pet_unneeded_threshold;
        if unnecessary {
            state.stress = clamp01(state.stress + c.pet_unneeded_stress);
        }

        self.bump_spam(stats);

        tracing::debug!(
            target: "neuropet-state-manager",
            effectiveness, need_before, need_after = state.affection_need, trust_gained, unnecessary,
            "pet applied"
        );

        InteractionEffect {
            effectiveness,
            need_before,
            need_after: state.affection_need,
            trust_gained,
            unnecessary,
        }
    }

    /// Signed trust adjustment for a response to the pet's needs.
    ///
    /// | requested | timely | delta  |
    /// |-----------|--------|--------|
    /// | yes       | yes    | +0.03  |
    /// | no        | yes    | +0.01  |
    /// | yes       | no     | −0.01  |
    /// | no        | no     |  0     |
    ///
    /// Halved when trust is already above 0.8 and rising, or below 0.2 and falling.
    pub fn trust_delta(state: &PetState, was_requested: bool, was_timely: bool) -> f32 {
        let mut change = match (was_requested, was_timely) {
            (true, true) => 0.03,
            (false, true) => 0.01,
            (true, false) => -0.01,
            (false, false) => 0.0,
        };

        if state.trust > 0.8 && change > 0.0 {
            change *= 0.5;
        }
        if state.trust < 0.2 && change < 0.0 {
            change *= 0.5;
        }
        change
    }

    /// Apply [`Self::trust_delta`] to the state, clamped
    pub fn apply_trust_delta(state: &mut PetState, was_requested: bool, was_timely: bool) -> f32 {
        let delta = Self::trust_delta(state, was_requested, was_timely);
        state.trust = clamp01(state.trust + delta);
        delta
    }
}
