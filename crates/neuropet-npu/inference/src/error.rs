// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InferenceError {
    #[error("Weight blob too short: expected at least {expected} bytes, got {actual}")]
    BlobTooShort { expected: usize, actual: usize },

    #[error("Shape error: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, InferenceError>;
