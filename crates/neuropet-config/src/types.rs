// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to one section of `neuropet_configuration.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NeuropetConfig {
    pub buttons: ButtonsConfig,
    pub simulation: SimulationConfig,
    pub tracker: TrackerConfig,
    pub learning: LearningConfig,
    pub inference: InferenceConfig,
    pub event_log: EventLogConfig,
    pub cadence: CadenceConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Button timing (milliseconds)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ButtonsConfig {
    pub debounce_ms: u32,
    pub long_press_ms: u32,
    pub double_press_ms: u32,
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 50,
            long_press_ms: 500,
            double_press_ms: 300,
        }
    }
}

/// Needs/mood rates (per second) and interaction effects
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub hunger_rate: f32,
    pub energy_decay_rate: f32,
    pub energy_regen_rate: f32,
    pub affection_decay_rate: f32,
    pub stress_decay_rate: f32,
    pub trust_decay_rate: f32,

    pub feed_hunger_reduction: f32,
    pub feed_stress_reduction: f32,
    pub feed_trust_bonus: f32,
    pub feed_unneeded_threshold: f32,
    pub feed_unneeded_stress: f32,

    pub pet_affection_reduction: f32,
    pub pet_stress_reduction: f32,
    pub pet_trust_bonus: f32,
    pub pet_unneeded_threshold: f32,
    pub pet_unneeded_stress: f32,

    pub spam_penalty: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            hunger_rate: 0.001,
            energy_decay_rate: 0.0008,
            energy_regen_rate: 0.002,
            affection_decay_rate: 0.0005,
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
        }
    }
}

/// Spam-score dynamics
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Added to the spam score by every feed/pet
    pub spam_increment: f32,
    pub spam_decay_per_ms: f32,
    /// Gaps longer than this skip decay
    pub max_gap_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            spam_increment: 0.15,
            spam_decay_per_ms: 0.0005,
            max_gap_ms: 60_000,
        }
    }
}

/// Online reward learning
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LearningConfig {
    pub learning_rate: f32,
    pub decay: f32,
    pub competition: f32,
    pub buffer_capacity: usize,
    pub bias_limit: f32,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            decay: 0.99,
            competition: 0.1,
            buffer_capacity: 16,
            bias_limit: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Use the learned network once a model loads (otherwise stay on rules)
    pub prefer_learned: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            prefer_learned: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EventLogConfig {
    pub capacity: usize,
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

/// Control loop cadences (milliseconds)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CadenceConfig {
    pub poll_interval_ms: u64,
    pub tick_interval_ms: u64,
    pub save_interval_ms: u64,
    /// Silence after which the pet counts as ignored
    pub ignore_after_ms: u64,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 10,
            tick_interval_ms: 2_000,
            save_interval_ms: 60_000,
            ignore_after_ms: 300_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./neuropet_data"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for every target (trace, debug, info, warn, error)
    pub level: String,
    /// Also write JSON logs under `log_dir`
    pub file_logging: bool,
    pub log_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_logging: false,
            log_dir: PathBuf::from("./logs"),
        }
    }
}
