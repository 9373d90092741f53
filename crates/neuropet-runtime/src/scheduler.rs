// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Cadence bookkeeping for the three loop rates

/// Loop intervals in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub poll_ms: u64,
    pub tick_ms: u64,
    pub save_ms: u64,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            poll_ms: 10,
            tick_ms: 2_000,
            save_ms: 60_000,
        }
    }
}

/// Which cadences fired on a given call to [`Scheduler::due`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Due {
    pub poll: bool,
    pub tick: bool,
    pub save: bool,
}

impl Due {
    pub fn any(&self) -> bool {
        self.poll || self.tick || self.save
    }
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    cadence: Cadence,
    last_poll_ms: u64,
    last_tick_ms: u64,
    last_save_ms: u64,
}

impl Scheduler {
    pub fn new(cadence: Cadence, now_ms: u64) -> Self {
        Self {
            cadence,
            last_poll_ms: now_ms,
            last_tick_ms: now_ms,
            last_save_ms: now_ms,
        }
    }

    pub fn cadence(&self) -> &Cadence {
        &self.cadence
    }

    /// Report and consume every cadence whose interval has elapsed
    pub fn due(&mut self, now_ms: u64) -> Due {
        fn fire(last: &mut u64, interval: u64, now_ms: u64) -> bool {
            if now_ms.saturating_sub(*last) >= interval {
                *last = now_ms;
                true
            } else {
                false
            }
        }

        Due {
            poll: fire(&mut self.last_poll_ms, self.cadence.poll_ms, now_ms),
            tick: fire(&mut self.last_tick_ms, self.cadence.tick_ms, now_ms),
            save: fire(&mut self.last_save_ms, self.cadence.save_ms, now_ms),
        }
    }

    /// Earliest time at which something becomes due
    pub fn next_deadline(&self) -> u64 {
        (self.last_poll_ms + self.cadence.poll_ms)
            .min(self.last_tick_ms + self.cadence.tick_ms)
            .min(self.last_save_ms + self.cadence.save_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadences_fire_independently() {
        let mut scheduler = Scheduler::new(Cadence::default(), 0);
        assert_eq!(scheduler.due(5), Due::default());

        let due = scheduler.due(10);
        assert!(due.poll && !due.tick && !due.save);

        let due = scheduler.due(2_000);
        assert!(due.poll && due.tick && !due.save);

        let due = scheduler.due(60_000);
        assert!(due.poll && due.tick && due.save);
        assert!(!scheduler.due(60_001).any());
    }

    #[test]
    fn test_next_deadline() {
        let mut scheduler = Scheduler::new(Cadence::default(), 1_000);
        assert_eq!(scheduler.next_deadline(), 1_010);
        scheduler.due(1_010);
        assert_eq!(scheduler.next_deadline(), 1_020);
    }
}
