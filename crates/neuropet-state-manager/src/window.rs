// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Sliding 1-minute / 5-minute interaction counters

use std::collections::VecDeque;

use neuropet_structures::InteractionStats;
use serde::{Deserialize, Serialize};

const WINDOW_1M_MS: u64 = 60_000;
const WINDOW_5M_MS: u64 = 300_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    Feed,
    Pet,
}

/// Timestamps of recent interactions, oldest first
#[derive(Debug, Clone, Default)]
pub struct InteractionWindow {
    entries: VecDeque<(u64, InteractionKind)>,
}

impl InteractionWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: InteractionKind, now_ms: u64) {
        self.entries.push_back((now_ms, kind));
    }

    /// Drop entries older than five minutes and write the counts into `stats`
    pub fn refresh(&mut self, stats: &mut InteractionStats, now_ms: u64) {
        while let Some(&(ts, _)) = self.entries.front() {
            if now_ms.saturating_sub(ts) > WINDOW_5M_MS {
                self.entries.pop_front();
            } else {
                break;
            }
        }

        let (mut feed_1m, mut feed_5m, mut pet_1m, mut pet_5m) = (0u16, 0u16, 0u16, 0u16);
        for &(ts, kind) in &self.entries {
            let recent = now_ms.saturating_sub(ts) <= WINDOW_1M_MS;
            match kind {
                InteractionKind::Feed => {
                    feed_5m = feed_5m.saturating_add(1);
                    if recent {
                        feed_1m = feed_1m.saturating_add(1);
                    }
                }
                InteractionKind::Pet => {
                    pet_5m = pet_5m.saturating_add(1);
                    if recent {
                        pet_1m = pet_1m.saturating_add(1);
                    }
                }
            }
        }

        stats.feed_count_1m = feed_1m;
        stats.feed_count_5m = feed_5m;
        stats.pet_count_1m = pet_1m;
        stats.pet_count_5m = pet_5m;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_window() {
        let mut window = InteractionWindow::new();
        window.record(InteractionKind::Feed, 0);
        window.record(InteractionKind::Feed, 200_000);
        window.record(InteractionKind::Pet, 250_000);

        let mut stats = InteractionStats::default();
        window.refresh(&mut stats, 260_000);
        assert_eq!((stats.feed_count_1m, stats.feed_count_5m), (0, 2));
        assert_eq!((stats.pet_count_1m, stats.pet_count_5m), (1, 1));
    }

    #[test]
    fn test_old_entries_pruned() {
        let mut window = InteractionWindow::new();
        window.record(InteractionKind::Pet, 0);
        window.record(InteractionKind::Pet, 10_000);

        let mut stats = InteractionStats::default();
        window.refresh(&mut stats, 305_000);
        assert_eq!(window.len(), 1);
        assert_eq!(stats.pet_count_5m, 1);
        assert_eq!(stats.pet_count_1m, 0);
    }
}
