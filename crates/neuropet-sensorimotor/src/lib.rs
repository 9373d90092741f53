// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuropet Sensorimotor
//!
//! Everything between the raw world and the brain's input vector:
//! - [`GestureDetector`]: debounces button levels and classifies Short/Long/Double presses
//! - [`FeatureEncoder`]: projects state, interaction stats and time of day into [`Features`]
//! - [`TimeOfDay`]: wall-clock estimate from a device-relative clock plus an owner-set offset
//!
//! [`Features`]: neuropet_structures::Features

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod feature_encoder;
pub mod gesture_detector;
pub mod time_of_day;

pub use feature_encoder::{encode_features, FeatureEncoder};
pub use gesture_detector::{ButtonConfig, ButtonDetector, GestureDetector, PressPhase};
pub use time_of_day::{TimeOfDay, TimeOffset, MS_PER_DAY};

/// Sensing error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SensorError {
    #[error("Invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u8, minute: u8 },
}

pub type Result<T> = core::result::Result<T, SensorError>;
