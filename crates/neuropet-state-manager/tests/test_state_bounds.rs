// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Every mutator keeps every state field inside [0, 1], whatever the input

use neuropet_state_manager::{InteractionTracker, StateSimulator};
use neuropet_structures::{Action, InteractionStats, PetState};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Tick(u64, u8),
    Feed,
    Pet,
    Trust(bool, bool),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0u64..3_600_000, 0u8..8).prop_map(|(ms, a)| Step::Tick(ms, a)),
        Just(Step::Feed),
        Just(Step::Pet),
        (any::<bool>(), any::<bool>()).prop_map(|(r, t)| Step::Trust(r, t)),
    ]
}

fn unit() -> impl Strategy<Value = f32> {
    -2.0f32..3.0
}

proptest! {
    #[test]
    fn state_stays_in_unit_range(
        init in (unit(), unit(), unit(), unit(), unit()),
        spam in unit(),
        steps in prop::collection::vec(step(), 1..64),
    ) {
        let sim = StateSimulator::default();
        let mut tracker = InteractionTracker::default();
        let mut state = PetState::new(init.0, init.1, init.2, init.3, init.4);
        let mut stats = InteractionStats { spam_score: spam, ..Default::default() };
        let mut now = 0u64;

        for step in steps {
            match step {
                Step::Tick(ms, action) => {
                    now += ms;
                    let action = Action::from_index(action as usize).unwrap();
                    sim.tick(&mut state, ms, action);
                    tracker.update(&mut stats, now);
                }
                Step::Feed => { sim.apply_feed(&mut state, &mut stats); }
                Step::Pet => { sim.apply_pet(&mut state, &mut stats); }
                Step::Trust(requested, timely) => {
                    StateSimulator::apply_trust_delta(&mut state, requested, timely);
                }
            }
            prop_assert!(state.is_in_range(), "{:?}", state);
            prop_assert!((0.0..=1.0).contains(&stats.spam_score));
        }
    }
}

#[test]
fn test_spam_decays_back_after_burst() {
    let sim = StateSimulator::default();
    let mut tracker = InteractionTracker::default();
    let mut state = PetState::default();
    let mut stats = InteractionStats::default();

    tracker.update(&mut stats, 0);
    for _ in 0..5 {
        sim.apply_pet(&mut state, &mut stats);
    }
    assert!((stats.spam_score - 0.75).abs() < 1e-5);

    // 2 s polls for 30 s
    let mut now = 0;
    while now < 30_000 {
        now += 2_000;
        tracker.update(&mut stats, now);
    }
    assert_eq!(stats.spam_score, 0.0);
}
