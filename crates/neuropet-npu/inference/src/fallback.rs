// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Rule-based decision path.
//!
//! Priority chain, first match wins:
//!
//! | condition                                   | action  | valence | arousal          |
//! |---------------------------------------------|---------|---------|------------------|
//! | energy < 0.2                                | Sleep   | 0.0     | 0.1              |
//! | hunger > 0.7                                | AskFood | −0.3    | 0.5 + hunger·0.3 |
//! | affection_need > 0.6                        | AskPet  | −0.1    | 0.4              |
//! | stress > 0.6                                | Annoyed | −0.5    | 0.6              |
//! | hunger < 0.3, energy > 0.5, affection < 0.3 | Sad if dt_norm > 0.5 (−0.2, 0.2), else Happy (0.7, 0.5) |
//! | energy > 0.6, stress < 0.3                  | Play    | 0.4     | 0.6              |
//! | otherwise                                   | Idle    | 0.0     | 0.3              |
//!
//! Valence is then shifted by `(trust − 0.5) · 0.3`.

use neuropet_structures::{Action, Features, Output};

const TRUST_VALENCE_GAIN: f32 = 0.3;

/// Decide from the needs alone. Pure: same features, same output.
pub fn fallback(features: &Features) -> Output {
    let hunger = features.hunger;
    let energy = features.energy;
    let affection = features.affection_need;
    let stress = features.stress;

    let (action, valence, arousal) = if energy < 0.2 {
        (Action::Sleep, 0.0, 0.1)
    } else if hunger > 0.7 {
        (Action::AskFood, -0.3, 0.5 + hunger * 0.3)
    } else if affection > 0.6 {
        (Action::AskPet, -0.1, 0.4)
    } else if stress > 0.6 {
        (Action::Annoyed, -0.5, 0.6)
    } else if hunger < 0.3 && energy > 0.5 && affection < 0.3 {
        // content, but lonely after a long silence
        if features.dt_seconds_norm > 0.5 {
            (Action::Sad, -0.2, 0.2)
        } else {
            (Action::Happy, 0.7, 0.5)
        }
    } else if energy > 0.6 && stress < 0.3 {
        (Action::Play, 0.4, 0.6)
    } else {
        (Action::Idle, 0.0, 0.3)
    };

    let valence = valence + (features.trust - 0.5) * TRUST_VALENCE_GAIN;
    Output::new(action, valence, arousal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(hunger: f32, energy: f32, affection: f32, trust: f32, stress: f32) -> Features {
        Features {
            hunger,
            energy,
            affection_need: affection,
            trust,
            stress,
            ..Default::default()
        }
    }

    #[test]
    fn test_priority_chain() {
        assert_eq!(fallback(&features(0.9, 0.1, 0.9, 0.5, 0.9)).action, Action::Sleep);
        assert_eq!(fallback(&features(0.9, 0.5, 0.9, 0.5, 0.9)).action, Action::AskFood);
        assert_eq!(fallback(&features(0.5, 0.5, 0.9, 0.5, 0.9)).action, Action::AskPet);
        assert_eq!(fallback(&features(0.5, 0.5, 0.5, 0.5, 0.9)).action, Action::Annoyed);
        assert_eq!(fallback(&features(0.1, 0.9, 0.1, 0.5, 0.1)).action, Action::Happy);
        assert_eq!(fallback(&features(0.5, 0.9, 0.5, 0.5, 0.1)).action, Action::Play);
        assert_eq!(fallback(&features(0.5, 0.4, 0.5, 0.5, 0.5)).action, Action::Idle);
    }

    #[test]
    fn test_lonely_when_content_but_ignored() {
        let mut f = features(0.1, 0.9, 0.1, 0.5, 0.1);
        f.dt_seconds_norm = 0.8;
        let out = fallback(&f);
        assert_eq!(out.action, Action::Sad);
        assert!((out.valence + 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_hungry_scenario() {
        let out = fallback(&features(0.85, 0.9, 0.2, 0.5, 0.1));
        assert_eq!(out.action, Action::AskFood);
        assert!((out.valence + 0.3).abs() < 1e-6);
        assert!((out.arousal - 0.755).abs() < 1e-6);
    }

    #[test]
    fn test_trust_shifts_valence_and_clamps() {
        let trusting = fallback(&features(0.1, 0.9, 0.1, 1.0, 0.1));
        assert!((trusting.valence - 0.85).abs() < 1e-6);

        let wary = fallback(&features(0.5, 0.5, 0.5, 0.0, 0.9));
        assert!((wary.valence + 0.65).abs() < 1e-6);
        assert!((-1.0..=1.0).contains(&wary.valence));
    }
}
