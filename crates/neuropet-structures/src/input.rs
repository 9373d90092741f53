// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Buttons, gestures and the logged input event kinds

use serde::{Deserialize, Serialize};

use crate::error::{Result, StructureError};

/// Number of physical buttons
pub const BUTTON_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ButtonId {
    Feed = 0,
    Pet = 1,
}

impl ButtonId {
    pub const ALL: [ButtonId; BUTTON_COUNT] = [ButtonId::Feed, ButtonId::Pet];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for ButtonId {
    type Error = StructureError;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(StructureError::InvalidButton(value))
    }
}

/// Classified press pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Press shorter than the long-press threshold, no second press followed
    Short,
    /// Press held at least the long-press threshold
    Long,
    /// Two short presses inside the double-press window
    Double,
}

/// A gesture on a specific button at a specific time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonEvent {
    pub button: ButtonId,
    pub gesture: Gesture,
    pub timestamp_ms: u64,
}

/// Input event kind recorded in the event log. Discriminants are the
/// export codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum InputEvent {
    None = 0,
    FeedShort = 1,
    FeedLong = 2,
    FeedDouble = 3,
    PetShort = 4,
    PetLong = 5,
    PetDouble = 6,
    /// No input for an extended period
    Ignore = 7,
}

impl InputEvent {
    pub fn from_gesture(button: ButtonId, gesture: Gesture) -> Self {
        match (button, gesture) {
            (ButtonId::Feed, Gesture::Short) => InputEvent::FeedShort,
            (ButtonId::Feed, Gesture::Long) => InputEvent::FeedLong,
            (ButtonId::Feed, Gesture::Double) => InputEvent::FeedDouble,
            (ButtonId::Pet, Gesture::Short) => InputEvent::PetShort,
            (ButtonId::Pet, Gesture::Long) => InputEvent::PetLong,
            (ButtonId::Pet, Gesture::Double) => InputEvent::PetDouble,
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            InputEvent::None => "none",
            InputEvent::FeedShort => "feed_short",
            InputEvent::FeedLong => "feed_long",
            InputEvent::FeedDouble => "feed_double",
            InputEvent::PetShort => "pet_short",
            InputEvent::PetLong => "pet_long",
            InputEvent::PetDouble => "pet_double",
            InputEvent::Ignore => "ignore",
        }
    }
}

impl From<ButtonEvent> for InputEvent {
    fn from(event: ButtonEvent) -> Self {
        InputEvent::from_gesture(event.button, event.gesture)
    }
}

impl TryFrom<u8> for InputEvent {
    type Error = StructureError;

    fn try_from(value: u8) -> Result<Self> {
        Ok(match value {
            0 => InputEvent::None,
            1 => InputEvent::FeedShort,
            2 => InputEvent::FeedLong,
            3 => InputEvent::FeedDouble,
            4 => InputEvent::PetShort,
            5 => InputEvent::PetLong,
            6 => InputEvent::PetDouble,
            7 => InputEvent::Ignore,
            other => return Err(StructureError::InvalidInputEvent(other)),
        })
    }
}
