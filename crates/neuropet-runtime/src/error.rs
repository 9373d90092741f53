// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for the runtime

use neuropet_npu_inference::InferenceError;
use neuropet_sensorimotor::SensorError;
use neuropet_serialization::SerializationError;
use neuropet_structures::StructureError;
use thiserror::Error;

/// Persistence collaborator failures
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Nothing was saved yet (first run)
    #[error("No saved {0}")]
    NotFound(&'static str),

    #[error("Corrupt {what}: {reason}")]
    Corrupt { what: &'static str, reason: String },

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Model integrity check failed: {0}")]
    Integrity(#[from] SerializationError),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Model rejected: {0}")]
    Model(#[from] InferenceError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error("Invalid engine configuration: {0}")]
    Structure(#[from] StructureError),

    #[error(transparent)]
    Time(#[from] SensorError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
