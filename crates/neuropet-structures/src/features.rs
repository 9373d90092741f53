// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Fixed-length feature vector fed to the brain

use serde::{Deserialize, Serialize};

use crate::error::{Result, StructureError};

/// Number of input features
pub const FEATURE_COUNT: usize = 12;

/// Normalized feature snapshot. Field order is the network input order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Features {
    pub hunger: f32,
    pub energy: f32,
    pub affection_need: f32,
    pub trust: f32,
    pub stress: f32,
    /// Time since last interaction over a 600 s horizon
    pub dt_seconds_norm: f32,
    pub feed_count_5m_norm: f32,
    pub pet_count_5m_norm: f32,
    /// Ongoing silence over a 300 s horizon
    pub ignore_time_norm: f32,
    pub time_of_day_sin: f32,
    pub time_of_day_cos: f32,
    pub spam_score_norm: f32,
}

impl Features {
    pub fn as_array(&self) -> [f32; FEATURE_COUNT] {
        [
            self.hunger,
            self.energy,
            self.affection_need,
            self.trust,
            self.stress,
            self.dt_seconds_norm,
            self.feed_count_5m_norm,
            self.pet_count_5m_norm,
            self.ignore_time_norm,
            self.time_of_day_sin,
            self.time_of_day_cos,
            self.spam_score_norm,
        ]
    }

    pub fn from_array(values: [f32; FEATURE_COUNT]) -> Self {
        Self {
            hunger: values[0],
            energy: values[1],
            affection_need: values[2],
            trust: values[3],
            stress: values[4],
            dt_seconds_norm: values[5],
            feed_count_5m_norm: values[6],
            pet_count_5m_norm: values[7],
            ignore_time_norm: values[8],
            time_of_day_sin: values[9],
            time_of_day_cos: values[10],
            spam_score_norm: values[11],
        }
    }

    pub fn from_slice(values: &[f32]) -> Result<Self> {
        let array: [f32; FEATURE_COUNT] =
            values
                .try_into()
                .map_err(|_| StructureError::ArraySizeMismatch {
                    expected: FEATURE_COUNT,
                    actual: values.len(),
                })?;
        Ok(Self::from_array(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_order() {
        let values: [f32; FEATURE_COUNT] = core::array::from_fn(|i| i as f32);
        let features = Features::from_array(values);
        assert_eq!(features.hunger, 0.0);
        assert_eq!(features.ignore_time_norm, 8.0);
        assert_eq!(features.spam_score_norm, 11.0);
        assert_eq!(features.as_array(), values);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let err = Features::from_slice(&[0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            StructureError::ArraySizeMismatch {
                expected: FEATURE_COUNT,
                actual: 5
            }
        );
    }
}
