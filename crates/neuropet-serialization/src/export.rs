// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Event log export
//!
//! One JSON object per retained entry, oldest first:
//!
//! ```json
//! {"ts": 12, "event": 1,
//!  "features": {"hunger": .., "energy": .., "affection": .., "trust": .., "stress": ..,
//!               "dt": .., "feed_5m": .., "pet_5m": .., "ignore": ..,
//!               "tod_sin": .., "tod_cos": .., "spam": ..},
//!  "brain": {"action": 3, "valence": .., "arousal": ..},
//!  "state": {"hunger": .., "energy": .., "affection": .., "trust": .., "stress": ..}}
//! ```
//!
//! `ts` is in seconds, `event` is the input event code and `action` the action id.

use neuropet_structures::{EventLog, Features, LogEntry, Output, PetState};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportFeatures {
    pub hunger: f32,
    pub energy: f32,
    pub affection: f32,
    pub trust: f32,
    pub stress: f32,
    pub dt: f32,
    pub feed_5m: f32,
    pub pet_5m: f32,
    pub ignore: f32,
    pub tod_sin: f32,
    pub tod_cos: f32,
    pub spam: f32,
}

impl From<&Features> for ExportFeatures {
    fn from(f: &Features) -> Self {
        Self {
            hunger: f.hunger,
            energy: f.energy,
            affection: f.affection_need,
            trust: f.trust,
            stress: f.stress,
            dt: f.dt_seconds_norm,
            feed_5m: f.feed_count_5m_norm,
            pet_5m: f.pet_count_5m_norm,
            ignore: f.ignore_time_norm,
            tod_sin: f.time_of_day_sin,
            tod_cos: f.time_of_day_cos,
            spam: f.spam_score_norm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportBrain {
    pub action: u8,
    pub valence: f32,
    pub arousal: f32,
}

impl From<&Output> for ExportBrain {
    fn from(o: &Output) -> Self {
        Self {
            action: o.action as u8,
            valence: o.valence,
            arousal: o.arousal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportState {
    pub hunger: f32,
    pub energy: f32,
    pub affection: f32,
    pub trust: f32,
    pub stress: f32,
}

impl From<&PetState> for ExportState {
    fn from(s: &PetState) -> Self {
        Self {
            hunger: s.hunger,
            energy: s.energy,
            affection: s.affection_need,
            trust: s.trust,
            stress: s.stress,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Seconds
    pub ts: u64,
    pub event: u8,
    pub features: ExportFeatures,
    pub brain: ExportBrain,
    pub state: ExportState,
}

impl From<&LogEntry> for ExportRecord {
    fn from(entry: &LogEntry) -> Self {
        Self {
            ts: entry.timestamp_ms / 1000,
            event: entry.input_event.code(),
            features: ExportFeatures::from(&entry.features),
            brain: ExportBrain::from(&entry.output),
            state: ExportState::from(&entry.state_after),
        }
    }
}

/// Export up to `count` entries starting at oldest-first index `start`.
///
/// Out-of-range windows are truncated; a `start` past the end yields `[]`.
/// The log is only read.
pub fn export_json(log: &EventLog, start: usize, count: usize) -> Result<String> {
    let records: Vec<ExportRecord> = log
        .iter()
        .skip(start)
        .take(count)
        .map(ExportRecord::from)
        .collect();
    tracing::debug!(
        target: "neuropet-serialization",
        "Exporting {} of {} log entries from {}",
        records.len(),
        log.count(),
        start
    );
    Ok(serde_json::to_string(&records)?)
}
