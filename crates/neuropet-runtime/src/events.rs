// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Outgoing notifications, queued by the engine and drained by the caller
//! once per loop iteration

use neuropet_structures::{InputEvent, Output};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Started { boot_count: u32, model_version: u32 },
    Interaction { input: InputEvent, timestamp_ms: u64 },
    /// Nobody has interacted for the ignore threshold
    Ignored { since_ms: u64 },
    Decision { output: Output, timestamp_ms: u64 },
    ModelLoaded { version: u32 },
    ModelRejected { reason: String },
    Saved { timestamp_ms: u64 },
}

impl EngineEvent {
    /// Short name suitable for telemetry channels
    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::Started { .. } => "started",
            EngineEvent::Interaction { input, .. } => input.name(),
            EngineEvent::Ignored { .. } => "ignore",
            EngineEvent::Decision { .. } => "decision",
            EngineEvent::ModelLoaded { .. } => "model_loaded",
            EngineEvent::ModelRejected { .. } => "model_rejected",
            EngineEvent::Saved { .. } => "saved",
        }
    }
}
