// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Checks that rates are non-negative, fractions stay inside [0, 1], timing
//! thresholds are ordered and capacities are non-zero.

use crate::{ConfigError, ConfigResult, NeuropetConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    Negative { field: String, value: f32 },
    OutOfRange { field: String, value: f32, min: f32, max: f32 },
    Zero { field: String },
    Ordering { lower: String, upper: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative { field, value } => {
                write!(f, "{} = {} must be a finite, non-negative number", field, value)
            }
            Self::OutOfRange { field, value, min, max } => {
                write!(f, "{} = {} is outside [{}, {}]", field, value, min, max)
            }
            Self::Zero { field } => write!(f, "{} must be greater than zero", field),
            Self::Ordering { lower, upper } => {
                write!(f, "{} must be less than {}", lower, upper)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &NeuropetConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_buttons(config, &mut errors);
    validate_simulation(config, &mut errors);
    validate_tracker(config, &mut errors);
    validate_learning(config, &mut errors);
    validate_cadence(config, &mut errors);
    validate_misc(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn non_negative(field: &str, value: f32, errors: &mut Vec<ConfigValidationError>) {
    if !value.is_finite() || value < 0.0 {
        errors.push(ConfigValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }
}

fn in_range(field: &str, value: f32, min: f32, max: f32, errors: &mut Vec<ConfigValidationError>) {
    if !(min..=max).contains(&value) {
        errors.push(ConfigValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
}

fn validate_buttons(config: &NeuropetConfig, errors: &mut Vec<ConfigValidationError>) {
    let b = &config.buttons;
    if b.debounce_ms >= b.long_press_ms {
        errors.push(ConfigValidationError::Ordering {
            lower: "buttons.debounce_ms".to_string(),
            upper: "buttons.long_press_ms".to_string(),
        });
    }
    if b.double_press_ms == 0 {
        errors.push(ConfigValidationError::Zero {
            field: "buttons.double_press_ms".to_string(),
        });
    }
}

fn validate_simulation(config: &NeuropetConfig, errors: &mut Vec<ConfigValidationError>) {
    let s = &config.simulation;
    for (field, value) in [
        ("simulation.hunger_rate", s.hunger_rate),
        ("simulation.energy_decay_rate", s.energy_decay_rate),
        ("simulation.energy_regen_rate", s.energy_regen_rate),
        ("simulation.affection_decay_rate", s.affection_decay_rate),
        ("simulation.stress_decay_rate", s.stress_decay_rate),
        ("simulation.trust_decay_rate", s.trust_decay_rate),
    ] {
        non_negative(field, value, errors);
    }

    for (field, value) in [
        ("simulation.feed_hunger_reduction", s.feed_hunger_reduction),
        ("simulation.feed_stress_reduction", s.feed_stress_reduction),
        ("simulation.feed_trust_bonus", s.feed_trust_bonus),
        ("simulation.feed_unneeded_threshold", s.feed_unneeded_threshold),
        ("simulation.feed_unneeded_stress", s.feed_unneeded_stress),
        ("simulation.pet_affection_reduction", s.pet_affection_reduction),
        ("simulation.pet_stress_reduction", s.pet_stress_reduction),
        ("simulation.pet_trust_bonus", s.pet_trust_bonus),
        ("simulation.pet_unneeded_threshold", s.pet_unneeded_threshold),
        ("simulation.pet_unneeded_stress", s.pet_unneeded_stress),
        ("simulation.spam_penalty", s.spam_penalty),
    ] {
        in_range(field, value, 0.0, 1.0, errors);
    }
}

fn validate_tracker(config: &NeuropetConfig, errors: &mut Vec<ConfigValidationError>) {
    let t = &config.tracker;
    in_range("tracker.spam_increment", t.spam_increment, 0.0, 1.0, errors);
    non_negative("tracker.spam_decay_per_ms", t.spam_decay_per_ms, errors);
    if t.max_gap_ms == 0 {
        errors.push(ConfigValidationError::Zero {
            field: "tracker.max_gap_ms".to_string(),
        });
    }
}

fn validate_learning(config: &NeuropetConfig, errors: &mut Vec<ConfigValidationError>) {
    let l = &config.learning;
    non_negative("learning.learning_rate", l.learning_rate, errors);
    in_range("learning.competition", l.competition, 0.0, 1.0, errors);
    if !(l.decay > 0.0 && l.decay <= 1.0) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "learning.decay".to_string(),
            reason: format!("{} must be in (0, 1]", l.decay),
        });
    }
    if !(l.bias_limit > 0.0 && l.bias_limit <= 2.0) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "learning.bias_limit".to_string(),
            reason: format!("{} must be in (0, 2]", l.bias_limit),
        });
    }
    if l.buffer_capacity == 0 {
        errors.push(ConfigValidationError::Zero {
            field: "learning.buffer_capacity".to_string(),
        });
    }
}

fn validate_cadence(config: &NeuropetConfig, errors: &mut Vec<ConfigValidationError>) {
    let c = &config.cadence;
    if c.poll_interval_ms == 0 {
        errors.push(ConfigValidationError::Zero {
            field: "cadence.poll_interval_ms".to_string(),
        });
    }
    if c.poll_interval_ms >= c.tick_interval_ms {
        errors.push(ConfigValidationError::Ordering {
            lower: "cadence.poll_interval_ms".to_string(),
            upper: "cadence.tick_interval_ms".to_string(),
        });
    }
    if c.tick_interval_ms > c.save_interval_ms {
        errors.push(ConfigValidationError::Ordering {
            lower: "cadence.tick_interval_ms".to_string(),
            upper: "cadence.save_interval_ms".to_string(),
        });
    }
    if c.ignore_after_ms == 0 {
        errors.push(ConfigValidationError::Zero {
            field: "cadence.ignore_after_ms".to_string(),
        });
    }
}

fn validate_misc(config: &NeuropetConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.event_log.capacity == 0 {
        errors.push(ConfigValidationError::Zero {
            field: "event_log.capacity".to_string(),
        });
    }
    if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("'{}' is not one of {:?}", config.logging.level, LOG_LEVELS),
        });
    }
}
