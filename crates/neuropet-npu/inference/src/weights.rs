// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Network parameters and their blob encoding

use byteorder::{ByteOrder, LittleEndian};
use ndarray::{Array1, Array2};

use crate::error::{InferenceError, Result};

pub const INPUT_SIZE: usize = 12;
pub const HIDDEN_SIZE: usize = 16;
/// 8 action logits + valence + arousal
pub const OUTPUT_SIZE: usize = 10;

pub const PARAM_COUNT: usize =
    INPUT_SIZE * HIDDEN_SIZE + HIDDEN_SIZE + HIDDEN_SIZE * OUTPUT_SIZE + OUTPUT_SIZE;
pub const VERSION_TAG_LEN: usize = 4;
/// Minimum accepted blob length
pub const BLOB_LEN: usize = VERSION_TAG_LEN + PARAM_COUNT * 4;

/// Dense layer parameters.
///
/// `w1[[i, j]]` connects input `i` to hidden unit `j`; `w2[[i, j]]` connects
/// hidden unit `i` to output `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightSet {
    pub w1: Array2<f32>,
    pub b1: Array1<f32>,
    pub w2: Array2<f32>,
    pub b2: Array1<f32>,
}

impl WeightSet {
    pub fn zeros() -> Self {
        Self {
            w1: Array2::zeros((INPUT_SIZE, HIDDEN_SIZE)),
            b1: Array1::zeros(HIDDEN_SIZE),
            w2: Array2::zeros((HIDDEN_SIZE, OUTPUT_SIZE)),
            b2: Array1::zeros(OUTPUT_SIZE),
        }
    }

    /// Deterministic built-in personality used until a trained model loads.
    ///
    /// Index-hashed values in [-1, 1) scaled by 1/sqrt(fan_in); output biases
    /// favour Idle and a low arousal.
    pub fn default_weights() -> Self {
        let scale1 = 1.0 / (INPUT_SIZE as f32).sqrt();
        let w1 = Array2::from_shape_fn((INPUT_SIZE, HIDDEN_SIZE), |(i, j)| {
            (((i * 17 + j * 31) % 100) as f32 / 50.0 - 1.0) * scale1
        });

        let scale2 = 1.0 / (HIDDEN_SIZE as f32).sqrt();
        let w2 = Array2::from_shape_fn((HIDDEN_SIZE, OUTPUT_SIZE), |(i, j)| {
            (((i * 23 + j * 41) % 100) as f32 / 50.0 - 1.0) * scale2
        });

        let mut b2 = Array1::zeros(OUTPUT_SIZE);
        b2[1] = 0.5; // Idle
        b2[9] = -0.5; // arousal

        Self {
            w1,
            b1: Array1::zeros(HIDDEN_SIZE),
            w2,
            b2,
        }
    }

    /// Parse a versioned blob. Trailing bytes past [`BLOB_LEN`] are ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<(u32, WeightSet)> {
        if bytes.len() < BLOB_LEN {
            return Err(InferenceError::BlobTooShort {
                expected: BLOB_LEN,
                actual: bytes.len(),
            });
        }

        let version = LittleEndian::read_u32(&bytes[..VERSION_TAG_LEN]);
        let mut params = vec![0.0f32; PARAM_COUNT];
        LittleEndian::read_f32_into(&bytes[VERSION_TAG_LEN..BLOB_LEN], &mut params);

        let mut rest = params.as_slice();
        let mut take = |n: usize| {
            let (head, tail) = rest.split_at(n);
            rest = tail;
            head.to_vec()
        };

        let w1 = Array2::from_shape_vec((INPUT_SIZE, HIDDEN_SIZE), take(INPUT_SIZE * HIDDEN_SIZE))
            .map_err(|e| InferenceError::Shape(e.to_string()))?;
        let b1 = Array1::from_vec(take(HIDDEN_SIZE));
        let w2 = Array2::from_shape_vec((HIDDEN_SIZE, OUTPUT_SIZE), take(HIDDEN_SIZE * OUTPUT_SIZE))
            .map_err(|e| InferenceError::Shape(e.to_string()))?;
        let b2 = Array1::from_vec(take(OUTPUT_SIZE));

        Ok((version, WeightSet { w1, b1, w2, b2 }))
    }

    /// Encode as a blob of exactly [`BLOB_LEN`] bytes
    pub fn to_bytes(&self, version: u32) -> Vec<u8> {
        let params: Vec<f32> = self
            .w1
            .iter()
            .chain(self.b1.iter())
            .chain(self.w2.iter())
            .chain(self.b2.iter())
            .copied()
            .collect();

        let mut bytes = vec![0u8; VERSION_TAG_LEN + params.len() * 4];
        LittleEndian::write_u32(&mut bytes[..VERSION_TAG_LEN], version);
        LittleEndian::write_f32_into(&params, &mut bytes[VERSION_TAG_LEN..]);
        bytes
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        Self::default_weights()
    }
}
