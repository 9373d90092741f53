// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Neuropet Plasticity
//!
//! Online reinforcement without touching the network weights: the owner's
//! feeds and pets reward the action the pet was showing, and the learner
//! turns batches of rewards into per-action biases added to the network's
//! action logits.
//!
//! ## Architecture
//! - `reward()` is cheap and bounded: a fixed-capacity experience buffer,
//!   overflow dropped
//! - `apply()` runs on the slow cadence: decay, reinforce, compete, clamp

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod reward_learner;

pub use reward_learner::{Experience, LearnerConfig, RewardLearner};
