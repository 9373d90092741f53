// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Engine-level configuration and its conversion from the TOML config
//!
//! Components keep their own config structs; this is the one place that
//! knows how the file sections map onto them.

use neuropet_config::NeuropetConfig;
use neuropet_npu_plasticity::LearnerConfig;
use neuropet_sensorimotor::{ButtonConfig, FeatureEncoder};
use neuropet_state_manager::{StateConfig, TrackerConfig};
use neuropet_structures::DEFAULT_LOG_CAPACITY;

use crate::scheduler::Cadence;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub buttons: ButtonConfig,
    pub state: StateConfig,
    pub tracker: TrackerConfig,
    pub learner: LearnerConfig,
    pub encoder: FeatureEncoder,
    pub event_log_capacity: usize,
    /// Switch to the learned strategy when a model loads
    pub prefer_learned: bool,
    pub cadence: Cadence,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            buttons: ButtonConfig::default(),
            state: StateConfig::default(),
            tracker: TrackerConfig::default(),
            learner: LearnerConfig::default(),
            encoder: FeatureEncoder::default(),
            event_log_capacity: DEFAULT_LOG_CAPACITY,
            prefer_learned: true,
            cadence: Cadence::default(),
        }
    }
}

impl From<&NeuropetConfig> for EngineConfig {
    fn from(config: &NeuropetConfig) -> Self {
        let sim = &config.simulation;
        let cadence = &config.cadence;

        Self {
            buttons: ButtonConfig {
                debounce_ms: config.buttons.debounce_ms,
                long_press_ms: config.buttons.long_press_ms,
                double_press_ms: config.buttons.double_press_ms,
            },
            state: StateConfig {
                hunger_rate: sim.hunger_rate,
                energy_decay_rate: sim.energy_decay_rate,
                energy_regen_rate: sim.energy_regen_rate,
                affection_decay_rate: sim.affection_decay_rate,
                stress_decay_rate: sim.stress_decay_rate,
                trust_decay_rate: sim.trust_decay_rate,
                feed_hunger_reduction: sim.feed_hunger_reduction,
                feed_stress_reduction: sim.feed_stress_reduction,
                feed_trust_bonus: sim.feed_trust_bonus,
                feed_unneeded_threshold: sim.feed_unneeded_threshold,
                feed_unneeded_stress: sim.feed_unneeded_stress,
                pet_affection_reduction: sim.pet_affection_reduction,
                pet_stress_reduction: sim.pet_stress_reduction,
                pet_trust_bonus: sim.pet_trust_bonus,
                pet_unneeded_threshold: sim.pet_unneeded_threshold,
                pet_unneeded_stress: sim.pet_unneeded_stress,
                spam_penalty: sim.spam_penalty,
                spam_increment: config.tracker.spam_increment,
            },
            tracker: TrackerConfig {
                decay_per_ms: config.tracker.spam_decay_per_ms,
                max_gap_ms: config.tracker.max_gap_ms,
                ignore_after_ms: cadence.ignore_after_ms,
            },
            learner: LearnerConfig {
                learning_rate: config.learning.learning_rate,
                decay: config.learning.decay,
                competition: config.learning.competition,
                buffer_capacity: config.learning.buffer_capacity,
                bias_limit: config.learning.bias_limit,
            },
            encoder: FeatureEncoder::default(),
            event_log_capacity: config.event_log.capacity,
            prefer_learned: config.inference.prefer_learned,
            cadence: Cadence {
                poll_ms: cadence.poll_interval_ms,
                tick_ms: cadence.tick_interval_ms,
                save_ms: cadence.save_interval_ms,
            },
        }
    }
}
