// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("CRC mismatch: expected {expected:#010x}, computed {actual:#010x}")]
    CrcMismatch { expected: u32, actual: u32 },

    #[error("Model size mismatch: metadata says {expected} bytes, blob has {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Unsupported features version {0} (expected {1})")]
    FeaturesVersion(u32, u32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SerializationError>;
