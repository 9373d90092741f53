// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for structure conversions

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("Invalid action id: {0} (expected 0..8)")]
    InvalidAction(u8),

    #[error("Invalid input event code: {0} (expected 0..8)")]
    InvalidInputEvent(u8),

    #[error("Invalid button id: {0}")]
    InvalidButton(u8),

    #[error("Array size mismatch: expected {expected}, got {actual}")]
    ArraySizeMismatch { expected: usize, actual: usize },

    #[error("Event log capacity must be greater than zero")]
    ZeroCapacity,
}

pub type Result<T> = core::result::Result<T, StructureError>;
