// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Spam-score decay and ignore detection

use neuropet_structures::{clamp01, InteractionStats};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Spam-score decay per millisecond
    pub decay_per_ms: f32,
    /// Gaps longer than this are treated as clock jumps and skip decay
    pub max_gap_ms: u64,
    /// Time without interaction before the pet counts as ignored
    pub ignore_after_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            decay_per_ms: 0.0005,
            max_gap_ms: 60_000,
            ignore_after_ms: 300_000,
        }
    }
}

/// Decays `spam_score` between updates.
///
/// Elapsed time is measured from the tracker's own previous update, not from
/// the last interaction, so a long quiet period decays in steps rather than
/// in one jump.
#[derive(Debug, Clone, Default)]
pub struct InteractionTracker {
    config: TrackerConfig,
    last_update_ms: Option<u64>,
}

impl InteractionTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            last_update_ms: None,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn update(&mut self, stats: &mut InteractionStats, now_ms: u64) {
        if let Some(last) = self.last_update_ms {
            let dt = now_ms.saturating_sub(last);
            if dt > self.config.max_gap_ms {
                tracing::debug!(
                    target: "neuropet-state-manager",
                    dt, "skipping spam decay across implausible gap"
                );
            } else if dt > 0 {
                stats.spam_score = clamp01(stats.spam_score - self.config.decay_per_ms * dt as f32);
            }
        }
        self.last_update_ms = Some(now_ms);
    }

    /// Start the ignore timer once nobody has interacted for `ignore_after_ms`.
    /// Returns true on the update where the pet becomes ignored. A pet nobody
    /// has touched since boot is never ignored.
    pub fn check_ignored(&self, stats: &mut InteractionStats, now_ms: u64) -> bool {
        if stats.is_ignored() {
            return false;
        }
        let Some(last) = stats.last_interaction_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) > self.config.ignore_after_ms {
            stats.ignore_start_ms = Some(now_ms);
            tracing::debug!(target: "neuropet-state-manager", now_ms, "pet is being ignored");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_by_elapsed_time() {
        let mut tracker = InteractionTracker::default();
        let mut stats = InteractionStats {
            spam_score: 0.8,
            ..Default::default()
        };
        tracker.update(&mut stats, 1_000);
        assert_eq!(stats.spam_score, 0.8);

        tracker.update(&mut stats, 1_400);
        assert!((stats.spam_score - 0.6).abs() < 1e-6);

        tracker.update(&mut stats, 10_000);
        assert_eq!(stats.spam_score, 0.0);
    }

    #[test]
    fn test_large_gap_skips_decay() {
        let mut tracker = InteractionTracker::default();
        let mut stats = InteractionStats {
            spam_score: 0.5,
            ..Default::default()
        };
        tracker.update(&mut stats, 0);
        tracker.update(&mut stats, 120_000);
        assert_eq!(stats.spam_score, 0.5);

        // resynchronized: next step decays normally
        tracker.update(&mut stats, 120_200);
        assert!((stats.spam_score - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_time_going_backwards_is_harmless() {
        let mut tracker = InteractionTracker::default();
        let mut stats = InteractionStats {
            spam_score: 0.5,
            ..Default::default()
        };
        tracker.update(&mut stats, 5_000);
        tracker.update(&mut stats, 4_000);
        assert_eq!(stats.spam_score, 0.5);
    }

    #[test]
    fn test_ignore_detection() {
        let tracker = InteractionTracker::default();
        let mut stats = InteractionStats::default();
        stats.mark_interaction(0);

        assert!(!tracker.check_ignored(&mut stats, 300_000));
        assert!(tracker.check_ignored(&mut stats, 300_001));
        assert_eq!(stats.ignore_start_ms, Some(300_001));
        // already ignored, start time kept
        assert!(!tracker.check_ignored(&mut stats, 400_000));
        assert_eq!(stats.ignore_start_ms, Some(300_001));

        stats.mark_interaction(410_000);
        assert!(!stats.is_ignored());
    }

    #[test]
    fn test_never_ignored_without_interaction() {
        let tracker = InteractionTracker::default();
        let mut stats = InteractionStats::default();
        assert!(!tracker.check_ignored(&mut stats, 10_000_000));
        assert!(!stats.is_ignored());
    }
}
