// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Inference Engine
//!
//! ```text
//! x (12) ──W1,b1──▶ ReLU (16) ──W2,b2──▶ raw (10)
//!                                         ├─ raw[0..8] + bias ─▶ softmax ─▶ argmax ─▶ Action
//!                                         ├─ tanh(raw[8])    ─▶ valence
//!                                         └─ sigmoid(raw[9]) ─▶ arousal
//! ```
//!
//! The active [`WeightSet`] is only ever swapped as a whole; a rejected blob
//! leaves the previous weights, version and strategy untouched.

use ndarray::{s, Array1};
use neuropet_structures::{Action, ActionBias, Features, Output, ACTION_COUNT};
use serde::{Deserialize, Serialize};

use crate::activation::{relu, sigmoid, softmax};
use crate::error::Result;
use crate::fallback::fallback;
use crate::weights::WeightSet;

const VALENCE_INDEX: usize = ACTION_COUNT;
const AROUSAL_INDEX: usize = ACTION_COUNT + 1;

/// Decision path used by [`InferenceEngine::infer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Learned,
    #[default]
    Fallback,
}

#[derive(Debug, Clone)]
pub struct InferenceEngine {
    weights: WeightSet,
    strategy: Strategy,
    custom_model: bool,
    model_version: u32,
}

impl InferenceEngine {
    /// Built-in weights, rule-based strategy
    pub fn new() -> Self {
        Self {
            weights: WeightSet::default_weights(),
            strategy: Strategy::Fallback,
            custom_model: false,
            model_version: 0,
        }
    }

    /// Replace the active weights from a versioned blob and switch to the
    /// learned strategy. Returns the blob's version tag.
    pub fn load_weights(&mut self, bytes: &[u8]) -> Result<u32> {
        let (version, weights) = match WeightSet::from_bytes(bytes) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(target: "neuropet-inference", "Rejected weight blob: {}", e);
                return Err(e);
            }
        };

        self.weights = weights;
        self.model_version = version;
        self.custom_model = true;
        self.strategy = Strategy::Learned;
        tracing::info!(
            target: "neuropet-inference",
            "Loaded model v{} ({} bytes)",
            version,
            bytes.len()
        );
        Ok(version)
    }

    /// Back to built-in weights and the rule-based strategy
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::info!(target: "neuropet-inference", "Inference engine reset to built-in weights");
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        if self.strategy != strategy {
            tracing::debug!(target: "neuropet-inference", ?strategy, "strategy changed");
        }
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn has_custom_model(&self) -> bool {
        self.custom_model
    }

    /// Version tag of the loaded model (0 = built-in)
    pub fn model_version(&self) -> u32 {
        self.model_version
    }

    pub fn weights(&self) -> &WeightSet {
        &self.weights
    }

    /// Decide with the active strategy. Bias only affects the learned path.
    pub fn infer(&self, features: &Features, bias: &ActionBias) -> Output {
        match self.strategy {
            Strategy::Learned => self.infer_learned(features, bias),
            Strategy::Fallback => fallback(features),
        }
    }

    /// Rule-based decision, regardless of the active strategy
    pub fn fallback(&self, features: &Features) -> Output {
        fallback(features)
    }

    /// Raw 10-wide network output before any activation
    pub fn forward(&self, features: &Features) -> Array1<f32> {
        let x = Array1::from_vec(features.as_array().to_vec());
        let hidden = (x.dot(&self.weights.w1) + &self.weights.b1).mapv(relu);
        hidden.dot(&self.weights.w2) + &self.weights.b2
    }

    fn biased_logits(&self, raw: &Array1<f32>, bias: &ActionBias) -> Array1<f32> {
        let mut logits = raw.slice(s![..ACTION_COUNT]).to_owned();
        for (logit, b) in logits.iter_mut().zip(bias.values().iter()) {
            *logit += *b;
        }
        logits
    }

    /// Softmax over the biased action logits, indexed by action id
    pub fn action_probabilities(&self, features: &Features, bias: &ActionBias) -> [f32; ACTION_COUNT] {
        let raw = self.forward(features);
        let probs = softmax(self.biased_logits(&raw, bias).view());
        let mut out = [0.0; ACTION_COUNT];
        for (slot, p) in out.iter_mut().zip(probs.iter()) {
            *slot = *p;
        }
        out
    }

    fn infer_learned(&self, features: &Features, bias: &ActionBias) -> Output {
        let raw = self.forward(features);
        let probs = softmax(self.biased_logits(&raw, bias).view());

        // strict > keeps the lowest index on ties
        let mut best = 0;
        for (i, &p) in probs.iter().enumerate().skip(1) {
            if p > probs[best] {
                best = i;
            }
        }
        let action = Action::from_index(best).unwrap_or(Action::Idle);

        let valence = raw[VALENCE_INDEX].tanh();
        let arousal = sigmoid(raw[AROUSAL_INDEX]);
        Output::new(action, valence, arousal)
    }
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new()
    }
}
