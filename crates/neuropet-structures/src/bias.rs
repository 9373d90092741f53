// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Learned per-action offsets added to raw inference scores

use core::ops::Index;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ACTION_COUNT};

/// Biases are kept inside [-BIAS_LIMIT, BIAS_LIMIT]
pub const BIAS_LIMIT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionBias {
    values: [f32; ACTION_COUNT],
}

impl ActionBias {
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Build from raw values, clamping each into range
    pub fn from_values(values: [f32; ACTION_COUNT]) -> Self {
        let mut bias = Self { values };
        bias.clamp_all();
        bias
    }

    pub fn values(&self) -> &[f32; ACTION_COUNT] {
        &self.values
    }

    pub fn get(&self, action: Action) -> f32 {
        self.values[action.index()]
    }

    /// Add `delta` to one action without clamping
    pub fn add(&mut self, action_index: usize, delta: f32) {
        if let Some(v) = self.values.get_mut(action_index) {
            *v += delta;
        }
    }

    pub fn scale(&mut self, factor: f32) {
        for v in &mut self.values {
            *v *= factor;
        }
    }

    pub fn clamp_all(&mut self) {
        self.clamp_to(BIAS_LIMIT);
    }

    /// Clamp into [-limit, limit]; `limit` is capped at [`BIAS_LIMIT`]
    pub fn clamp_to(&mut self, limit: f32) {
        let limit = if limit.is_nan() { BIAS_LIMIT } else { limit.clamp(0.0, BIAS_LIMIT) };
        for v in &mut self.values {
            *v = if v.is_nan() { 0.0 } else { v.clamp(-limit, limit) };
        }
    }
}

impl Index<usize> for ActionBias {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_clamps() {
        let bias = ActionBias::from_values([5.0, -5.0, 0.5, 0.0, 0.0, 0.0, 0.0, f32::NAN]);
        assert_eq!(bias[0], BIAS_LIMIT);
        assert_eq!(bias[1], -BIAS_LIMIT);
        assert_eq!(bias.get(Action::Play), 0.5);
        assert_eq!(bias[7], 0.0);
    }
}
