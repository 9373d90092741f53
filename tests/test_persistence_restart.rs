// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Restart against a real data directory

use neuropet::prelude::*;
use tempfile::TempDir;

#[test]
fn test_restart_from_disk() {
    let dir = TempDir::new().unwrap();

    let saved_state = {
        let store = FileStore::open(dir.path()).unwrap();
        let mut engine = NeuropetEngine::start(store, EngineConfig::default(), 0).unwrap();
        engine.handle_gesture(ButtonEvent {
            button: ButtonId::Feed,
            gesture: Gesture::Short,
            timestamp_ms: 1_000,
        });
        engine.handle_gesture(ButtonEvent {
            button: ButtonId::Pet,
            gesture: Gesture::Long,
            timestamp_ms: 5_000,
        });
        engine.tick(6_000);
        engine.set_time(6_000, 23, 30).unwrap();
        engine.persist(60_000).unwrap();
        *engine.state()
    };

    let store = FileStore::open(dir.path()).unwrap();
    let engine = NeuropetEngine::start(store, EngineConfig::default(), 0).unwrap();
    assert_eq!(engine.state(), &saved_state);

    let stats = engine.pet_stats();
    assert_eq!(stats.boot_count, 2);
    assert_eq!(stats.total_feeds, 1);
    assert_eq!(stats.total_pets, 2);
    assert_eq!(stats.last_save_timestamp_ms, 60_000);

    // one feed + one pet, each Happy
    assert_eq!(engine.learner().total_rewards(), 2);
    assert!(engine.learner().bias().get(Action::Happy) > 0.0);

    assert!(engine.clock().is_set());
    assert!(engine.clock().is_night(0));
}

#[test]
fn test_first_boot_on_empty_directory() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path().join("fresh")).unwrap();
    let engine = NeuropetEngine::start(store, EngineConfig::default(), 0).unwrap();

    assert_eq!(engine.state(), &PetState::default());
    assert_eq!(engine.pet_stats().boot_count, 1);
    assert_eq!(engine.learner().total_rewards(), 0);
    assert!(!engine.clock().is_set());
    // boot count is written immediately
    assert!(engine.store().load_pet_stats().is_ok());
}
