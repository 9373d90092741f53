// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Closed-loop tests: simulated button levels in, decisions and log entries out.

These tests validate:
- A hungry pet asks for food, gets fed, and the reward lands on AskFood
- Ignoring the pet is noticed and logged once
- State stays in range over a long unattended run
*/

use neuropet::prelude::*;
use neuropet::runtime::Cadence;

/// Drive the engine with the default cadences, holding `button` during
/// any of `presses` (start, duration) windows.
fn drive(
    engine: &mut NeuropetEngine<MemoryStore>,
    scheduler: &mut Scheduler,
    from_ms: u64,
    to_ms: u64,
    presses: &[(ButtonId, u64, u64)],
) -> Vec<ButtonEvent> {
    let mut detected = Vec::new();
    let mut now = from_ms;
    while now <= to_ms {
        let mut levels = [false, false];
        for &(button, start, held) in presses {
            if now >= start && now < start + held {
                levels[button.index()] = true;
            }
        }
        detected.extend(engine.step(scheduler, now, levels).unwrap());
        now += 10;
    }
    detected
}

#[test]
fn test_hungry_pet_asks_and_learns() {
    let mut store = MemoryStore::new();
    store
        .save_state(&PetState::new(0.85, 0.9, 0.2, 0.5, 0.1))
        .unwrap();

    let mut engine = NeuropetEngine::start(store, EngineConfig::default(), 0).unwrap();
    let mut scheduler = Scheduler::new(Cadence::default(), 0);

    drive(&mut engine, &mut scheduler, 0, 2_000, &[]);
    assert_eq!(engine.output().action, Action::AskFood);

    let hunger_before = engine.state().hunger;
    let detected = drive(
        &mut engine,
        &mut scheduler,
        2_010,
        4_000,
        &[(ButtonId::Feed, 2_500, 120)],
    );
    assert_eq!(detected.len(), 1);
    assert_eq!(detected[0].gesture, Gesture::Short);
    assert!(engine.state().hunger < hunger_before);

    // learning lands on the save cadence
    drive(&mut engine, &mut scheduler, 4_010, 60_000, &[]);
    let bias = engine.learner().bias();
    assert!(bias.get(Action::AskFood) > 0.0);
    assert!(bias.get(Action::Happy) > 0.0);
    assert!(bias.get(Action::Sleep) < 0.0);
    assert_eq!(engine.learner().pending(), 0);

    let logged = engine.event_log().get(0).unwrap();
    assert_eq!(logged.input_event, InputEvent::FeedShort);
    assert_eq!(logged.output.action, Action::AskFood);
}

#[test]
fn test_ignored_pet_is_noticed_once() {
    let mut engine =
        NeuropetEngine::start(MemoryStore::new(), EngineConfig::default(), 0).unwrap();
    let mut scheduler = Scheduler::new(Cadence::default(), 0);

    drive(
        &mut engine,
        &mut scheduler,
        0,
        290_000,
        &[(ButtonId::Pet, 1_000, 100)],
    );
    assert!(!engine.interaction_stats().is_ignored());
    engine.drain_events();

    drive(&mut engine, &mut scheduler, 290_010, 420_000, &[]);

    let kinds: Vec<InputEvent> = engine.event_log().iter().map(|e| e.input_event).collect();
    assert_eq!(kinds, vec![InputEvent::PetShort, InputEvent::Ignore]);
    assert!(engine.features().ignore_time_norm > 0.0);

    let events = engine.drain_events();
    assert!(events.iter().any(|e| matches!(e, EngineEvent::Ignored { .. })));
}

#[test]
fn test_unattended_day_stays_in_range() {
    let mut engine =
        NeuropetEngine::start(MemoryStore::new(), EngineConfig::default(), 0).unwrap();

    // tick-only drive keeps this fast
    let mut now = 0;
    while now < 86_400_000 {
        now += 2_000;
        let output = engine.tick(now);
        assert!(engine.state().is_in_range());
        assert!((-1.0..=1.0).contains(&output.valence));
        assert!((0.0..=1.0).contains(&output.arousal));
    }
    assert_eq!(engine.state().hunger, 1.0);
    assert_eq!(engine.pet_stats().times_starved, 1);
}

#[test]
fn test_snapshot_shared_across_threads() {
    let mut engine =
        NeuropetEngine::start(MemoryStore::new(), EngineConfig::default(), 0).unwrap();
    let handle = engine.snapshot_handle();

    let reader = std::thread::spawn(move || {
        let mut seen = 0;
        for _ in 0..500 {
            let snap = handle.read();
            assert!(snap.state.is_in_range());
            seen = seen.max(snap.timestamp_ms);
        }
        seen
    });

    for i in 1..=500 {
        engine.tick(i * 2_000);
    }
    let seen = reader.join().unwrap();
    assert!(seen <= 1_000_000);
    assert_eq!(engine.snapshot().timestamp_ms, 1_000_000);
}
