// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Latest-value publication for readers outside the control loop
//!
//! The writer replaces the whole [`Snapshot`] under a write lock, so a
//! reader never sees a state from one tick paired with an output from another.

use std::sync::Arc;

use neuropet_npu_inference::Strategy;
use neuropet_structures::{Output, PetState};
use parking_lot::RwLock;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Snapshot {
    pub timestamp_ms: u64,
    pub state: PetState,
    pub output: Output,
    pub model_version: u32,
    pub strategy: Strategy,
}

/// Cheap-to-clone shared handle
#[derive(Debug, Clone, Default)]
pub struct SnapshotHandle {
    inner: Arc<RwLock<Snapshot>>,
}

impl SnapshotHandle {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
        }
    }

    pub fn publish(&self, snapshot: Snapshot) {
        *self.inner.write() = snapshot;
    }

    /// Copy of the latest snapshot
    pub fn read(&self) -> Snapshot {
        *self.inner.read()
    }
}
