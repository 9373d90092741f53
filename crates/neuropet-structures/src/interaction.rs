// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Rolling interaction counters used by feature encoding

use serde::{Deserialize, Serialize};

/// Interaction statistics
///
/// Windowed counters are filled in by the caller's windowing logic; the
/// spam score is decayed by the interaction tracker and bumped by every
/// feed/pet effect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionStats {
    /// Timestamp of the last interaction, `None` until the first one since boot
    pub last_interaction_ms: Option<u64>,
    pub feed_count_1m: u16,
    pub feed_count_5m: u16,
    pub pet_count_1m: u16,
    pub pet_count_5m: u16,
    /// Start of the current silence, if the pet is being ignored
    pub ignore_start_ms: Option<u64>,
    /// Rapid-repeat measure in [0, 1]
    pub spam_score: f32,
}

impl InteractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an interaction at `now_ms`, ending any ignore period
    pub fn mark_interaction(&mut self, now_ms: u64) {
        self.last_interaction_ms = Some(now_ms);
        self.ignore_start_ms = None;
    }

    pub fn is_ignored(&self) -> bool {
        self.ignore_start_ms.is_some()
    }

    /// Milliseconds since the last interaction, or since boot if there was none
    pub fn since_interaction_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_interaction_ms.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_interaction_clears_ignore() {
        let mut stats = InteractionStats {
            ignore_start_ms: Some(1_000),
            ..Default::default()
        };
        assert!(stats.is_ignored());
        stats.mark_interaction(5_000);
        assert_eq!(stats.last_interaction_ms, Some(5_000));
        assert!(!stats.is_ignored());
    }

    #[test]
    fn test_interaction_at_boot_is_recorded() {
        let mut stats = InteractionStats::new();
        assert_eq!(stats.last_interaction_ms, None);
        assert_eq!(stats.since_interaction_ms(2_000), 2_000);

        stats.mark_interaction(0);
        assert_eq!(stats.last_interaction_ms, Some(0));
        assert_eq!(stats.since_interaction_ms(2_000), 2_000);
    }
}
