// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Neuropet Inference
//!
//! Turns a 12-float feature vector into an [`Output`](neuropet_structures::Output):
//! - **Learned**: two dense layers, 12 → 16 (ReLU) → 10
//!   (8 action logits, valence via tanh, arousal via sigmoid)
//! - **Fallback**: a fixed priority chain over the needs, available without weights
//!
//! Weights are replaced wholesale from a little-endian blob:
//! `[u32 version][f32 W1 12x16][f32 b1 16][f32 W2 16x10][f32 b2 10]`.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod activation;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod weights;

pub use activation::{relu, sigmoid, softmax};
pub use engine::{InferenceEngine, Strategy};
pub use error::{InferenceError, Result};
pub use fallback::fallback;
pub use weights::{
    WeightSet, BLOB_LEN, HIDDEN_SIZE, INPUT_SIZE, OUTPUT_SIZE, PARAM_COUNT, VERSION_TAG_LEN,
};
