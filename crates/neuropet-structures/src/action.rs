// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Discrete actions and the inference output

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StructureError};

/// Number of discrete actions the brain can choose from
pub const ACTION_COUNT: usize = 8;

/// Actions the brain outputs. Discriminants are the stable wire ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Action {
    Sleep = 0,
    Idle = 1,
    Play = 2,
    AskFood = 3,
    AskPet = 4,
    Happy = 5,
    Annoyed = 6,
    Sad = 7,
}

impl Action {
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::Sleep,
        Action::Idle,
        Action::Play,
        Action::AskFood,
        Action::AskPet,
        Action::Happy,
        Action::Annoyed,
        Action::Sad,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(StructureError::InvalidAction(index.min(u8::MAX as usize) as u8))
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Sleep => "sleep",
            Action::Idle => "idle",
            Action::Play => "play",
            Action::AskFood => "ask_food",
            Action::AskPet => "ask_pet",
            Action::Happy => "happy",
            Action::Annoyed => "annoyed",
            Action::Sad => "sad",
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = StructureError;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_index(value as usize)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Brain output: chosen action plus affect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub action: Action,
    /// -1 (negative) to 1 (positive)
    pub valence: f32,
    /// 0 (calm) to 1 (excited)
    pub arousal: f32,
}

impl Output {
    /// Build an output with valence/arousal forced into range
    pub fn new(action: Action, valence: f32, arousal: f32) -> Self {
        Self {
            action,
            valence: if valence.is_nan() { 0.0 } else { valence.clamp(-1.0, 1.0) },
            arousal: if arousal.is_nan() { 0.0 } else { arousal.clamp(0.0, 1.0) },
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self {
            action: Action::Idle,
            valence: 0.0,
            arousal: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(Action::from_index(i).unwrap(), *action);
        }
        assert!(Action::from_index(ACTION_COUNT).is_err());
        assert_eq!(Action::try_from(8u8), Err(StructureError::InvalidAction(8)));
    }

    #[test]
    fn test_output_clamps() {
        let out = Output::new(Action::Play, 3.0, -1.0);
        assert_eq!(out.valence, 1.0);
        assert_eq!(out.arousal, 0.0);
    }

    #[test]
    fn test_serde_name() {
        let json = serde_json::to_string(&Action::AskFood).unwrap();
        assert_eq!(json, "\"ask_food\"");
    }
}
