// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Lifetime statistics, persisted across boots

use neuropet_structures::PetState;
use serde::{Deserialize, Serialize};

/// Hunger at or above this counts as starving
const STARVING_THRESHOLD: f32 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PetStats {
    pub total_feeds: u32,
    pub total_pets: u32,
    /// Highest trust seen, in thousandths
    pub max_trust_reached: u32,
    /// Number of separate starvation episodes
    pub times_starved: u32,
    pub boot_count: u32,
    pub last_save_timestamp_ms: u64,
    #[serde(skip)]
    starving: bool,
}

impl PetStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_boot(&mut self) {
        self.boot_count = self.boot_count.saturating_add(1);
    }

    pub fn record_feeds(&mut self, count: u32) {
        self.total_feeds = self.total_feeds.saturating_add(count);
    }

    pub fn record_pets(&mut self, count: u32) {
        self.total_pets = self.total_pets.saturating_add(count);
    }

    /// Track max trust and count entries into starvation
    pub fn observe(&mut self, state: &PetState) {
        let trust_permille = (state.trust.clamp(0.0, 1.0) * 1000.0) as u32;
        self.max_trust_reached = self.max_trust_reached.max(trust_permille);

        let starving = state.hunger >= STARVING_THRESHOLD;
        if starving && !self.starving {
            self.times_starved = self.times_starved.saturating_add(1);
            tracing::info!(target: "neuropet-state-manager", hunger = state.hunger, "pet is starving");
        }
        self.starving = starving;
    }

    pub fn mark_saved(&mut self, now_ms: u64) {
        self.last_save_timestamp_ms = now_ms;
    }
}
