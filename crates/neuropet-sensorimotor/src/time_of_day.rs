// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Wall-clock estimate without an RTC
//!
//! The device only knows milliseconds since boot. The owner sets the time
//! once; the difference is kept as an offset (ms since midnight) and
//! persisted so the clock survives restarts approximately.

use serde::{Deserialize, Serialize};

use crate::{Result, SensorError};

pub const MS_PER_DAY: u64 = 86_400_000;

/// Persisted part of the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeOffset {
    pub offset_ms: u64,
    pub is_set: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOfDay {
    boot_ms: u64,
    offset: TimeOffset,
}

impl TimeOfDay {
    pub fn new(boot_ms: u64) -> Self {
        Self {
            boot_ms,
            offset: TimeOffset::default(),
        }
    }

    pub fn with_offset(boot_ms: u64, offset: TimeOffset) -> Self {
        Self {
            boot_ms,
            offset: TimeOffset {
                offset_ms: offset.offset_ms % MS_PER_DAY,
                is_set: offset.is_set,
            },
        }
    }

    /// Set the current wall-clock time
    pub fn set(&mut self, now_ms: u64, hour: u8, minute: u8) -> Result<()> {
        if hour > 23 || minute > 59 {
            return Err(SensorError::InvalidTime { hour, minute });
        }
        let target_ms = hour as u64 * 3_600_000 + minute as u64 * 60_000;
        let device_ms = self.device_ms(now_ms) % MS_PER_DAY;

        self.offset.offset_ms = (target_ms + MS_PER_DAY - device_ms) % MS_PER_DAY;
        self.offset.is_set = true;
        tracing::info!(
            target: "neuropet-sensorimotor",
            "Time set to {:02}:{:02} (offset: {} ms)",
            hour,
            minute,
            self.offset.offset_ms
        );
        Ok(())
    }

    pub fn offset(&self) -> TimeOffset {
        self.offset
    }

    pub fn is_set(&self) -> bool {
        self.offset.is_set
    }

    fn device_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.boot_ms)
    }

    pub fn ms_since_midnight(&self, now_ms: u64) -> u64 {
        (self.device_ms(now_ms) + self.offset.offset_ms) % MS_PER_DAY
    }

    /// (hour 0-23, minute 0-59)
    pub fn hour_minute(&self, now_ms: u64) -> (u8, u8) {
        let total_minutes = self.ms_since_midnight(now_ms) / 60_000;
        ((total_minutes / 60 % 24) as u8, (total_minutes % 60) as u8)
    }

    /// Position in the day in [0, 1), 0 = midnight
    pub fn day_fraction(&self, now_ms: u64) -> f32 {
        self.ms_since_midnight(now_ms) as f32 / MS_PER_DAY as f32
    }

    /// Night is 22:00 - 07:00
    pub fn is_night(&self, now_ms: u64) -> bool {
        let (hour, _) = self.hour_minute(now_ms);
        hour >= 22 || hour < 7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read_back() {
        let mut clock = TimeOfDay::new(1_000);
        clock.set(5_000, 14, 30).unwrap();
        assert_eq!(clock.hour_minute(5_000), (14, 30));
        // an hour later
        assert_eq!(clock.hour_minute(5_000 + 3_600_000), (15, 30));
        assert!(clock.is_set());
    }

    #[test]
    fn test_wraps_midnight() {
        let mut clock = TimeOfDay::new(0);
        clock.set(0, 23, 59).unwrap();
        assert_eq!(clock.hour_minute(2 * 60_000), (0, 1));
        assert!(clock.is_night(2 * 60_000));
    }

    #[test]
    fn test_day_fraction_noon() {
        let mut clock = TimeOfDay::new(0);
        clock.set(0, 12, 0).unwrap();
        assert!((clock.day_fraction(0) - 0.5).abs() < 1e-6);
        assert!(!clock.is_night(0));
    }

    #[test]
    fn test_invalid_time_rejected() {
        let mut clock = TimeOfDay::new(0);
        assert_eq!(
            clock.set(0, 24, 0),
            Err(SensorError::InvalidTime { hour: 24, minute: 0 })
        );
        assert!(!clock.is_set());
    }

    #[test]
    fn test_restored_offset_survives_reboot() {
        let mut clock = TimeOfDay::new(0);
        clock.set(0, 8, 0).unwrap();
        let saved = clock.offset();

        // rebooted device: boot happened at a later device timestamp
        let restored = TimeOfDay::with_offset(50_000, saved);
        assert_eq!(restored.hour_minute(50_000), (8, 0));
    }
}
