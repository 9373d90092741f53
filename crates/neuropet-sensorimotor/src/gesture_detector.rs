// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Button Gesture Detection
//!
//! Each button runs an independent state machine, polled every ~10 ms:
//!
//! ```text
//!   Idle ──rising edge──▶ Pressed(start) ──falling edge──┬─ held ≥ long_press ──▶ emit Long ─▶ Idle
//!                             ▲                           │
//!                             │                           ▼
//!                             └──second rising edge── Released(release)
//!                                                         │ press_count ≥ 2 ──▶ emit Double ─▶ Idle
//!                                                         │ double_press elapsed ──▶ emit Short ─▶ Idle
//! ```
//!
//! A raw level change only becomes the debounced level after it has been
//! stable for `debounce_ms`. Noise shorter than that is absorbed, never
//! reported.

use neuropet_structures::{ButtonEvent, ButtonId, Gesture, BUTTON_COUNT};
use serde::{Deserialize, Serialize};

/// Button timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Stability window for a raw level change (default: 50ms)
    pub debounce_ms: u32,
    /// Threshold for a long press (default: 500ms)
    pub long_press_ms: u32,
    /// Max gap after release to wait for a second press (default: 300ms)
    pub double_press_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 50,
            long_press_ms: 500,
            double_press_ms: 300,
        }
    }
}

/// Where a button is in its press sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    Idle,
    Pressed { start_ms: u64 },
    Released { release_ms: u64 },
}

/// Debounce + gesture state machine for one button
#[derive(Debug, Clone)]
pub struct ButtonDetector {
    debounced: bool,
    last_raw: bool,
    last_change_ms: u64,
    press_count: u8,
    phase: PressPhase,
}

impl ButtonDetector {
    pub fn new() -> Self {
        Self {
            debounced: false,
            last_raw: false,
            last_change_ms: 0,
            press_count: 0,
            phase: PressPhase::Idle,
        }
    }

    /// Feed one raw sample. Returns at most one gesture.
    pub fn update(&mut self, raw: bool, now_ms: u64, config: &ButtonConfig) -> Option<Gesture> {
        if raw != self.last_raw {
            self.last_change_ms = now_ms;
            self.last_raw = raw;
        }

        let was_pressed = self.debounced;
        if now_ms.saturating_sub(self.last_change_ms) >= config.debounce_ms as u64 {
            self.debounced = raw;
        }

        if !was_pressed && self.debounced {
            self.phase = PressPhase::Pressed { start_ms: now_ms };
            self.press_count = self.press_count.saturating_add(1);
        }

        if was_pressed && !self.debounced {
            let start_ms = match self.phase {
                PressPhase::Pressed { start_ms } => start_ms,
                _ => now_ms,
            };
            let duration = now_ms.saturating_sub(start_ms);

            if duration >= config.long_press_ms as u64 {
                self.reset_sequence();
                return Some(Gesture::Long);
            }
            self.phase = PressPhase::Released { release_ms: now_ms };
        }

        if let PressPhase::Released { release_ms } = self.phase {
            if self.press_count >= 2 {
                self.reset_sequence();
                return Some(Gesture::Double);
            }
            if now_ms.saturating_sub(release_ms) >= config.double_press_ms as u64 {
                self.reset_sequence();
                return Some(Gesture::Short);
            }
        }

        None
    }

    fn reset_sequence(&mut self) {
        self.press_count = 0;
        self.phase = PressPhase::Idle;
    }

    /// Current debounced level
    pub fn is_pressed(&self) -> bool {
        self.debounced
    }

    pub fn phase(&self) -> PressPhase {
        self.phase
    }

    pub fn press_count(&self) -> u8 {
        self.press_count
    }
}

impl Default for ButtonDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Gesture detection for all buttons. Buttons share only the timing config.
#[derive(Debug, Clone)]
pub struct GestureDetector {
    config: ButtonConfig,
    buttons: [ButtonDetector; BUTTON_COUNT],
}

impl GestureDetector {
    pub fn new(config: ButtonConfig) -> Self {
        Self {
            config,
            buttons: [ButtonDetector::new(), ButtonDetector::new()],
        }
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Poll a single button
    pub fn update_button(&mut self, button: ButtonId, raw: bool, now_ms: u64) -> Option<ButtonEvent> {
        let gesture = self.buttons[button.index()].update(raw, now_ms, &self.config)?;
        tracing::trace!(target: "neuropet-sensorimotor", ?button, ?gesture, now_ms, "gesture");
        Some(ButtonEvent {
            button,
            gesture,
            timestamp_ms: now_ms,
        })
    }

    /// Poll every button with its raw level (indexed by [`ButtonId`]).
    /// Events come back in button order.
    pub fn update(&mut self, levels: [bool; BUTTON_COUNT], now_ms: u64) -> Vec<ButtonEvent> {
        ButtonId::ALL
            .iter()
            .filter_map(|&button| self.update_button(button, levels[button.index()], now_ms))
            .collect()
    }

    pub fn is_pressed(&self, button: ButtonId) -> bool {
        self.buttons[button.index()].is_pressed()
    }

    pub fn button(&self, button: ButtonId) -> &ButtonDetector {
        &self.buttons[button.index()]
    }
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(ButtonConfig::default())
    }
}
