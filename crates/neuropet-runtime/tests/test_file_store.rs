// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use std::fs;

use neuropet_npu_inference::WeightSet;
use neuropet_runtime::{
    EngineConfig, FileStore, NeuropetEngine, PersistenceError, PetStore, StoredBias,
};
use neuropet_sensorimotor::TimeOffset;
use neuropet_serialization::ModelMeta;
use neuropet_structures::{ActionBias, PetState};
use tempfile::TempDir;

#[test]
fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();

    let state = PetState::new(0.1, 0.2, 0.3, 0.4, 0.5);
    let bias = StoredBias {
        bias: ActionBias::from_values([0.5, -0.5, 0.0, 1.0, -1.0, 2.0, -2.0, 0.25]),
        total_rewards: 42,
    };
    let offset = TimeOffset {
        offset_ms: 3_600_000,
        is_set: true,
    };
    store.save_state(&state).unwrap();
    store.save_bias(&bias).unwrap();
    store.save_time_offset(&offset).unwrap();

    let reopened = FileStore::open(dir.path()).unwrap();
    assert_eq!(reopened.load_state().unwrap(), state);
    assert_eq!(reopened.load_bias().unwrap(), bias);
    assert_eq!(reopened.load_time_offset().unwrap(), offset);
}

#[test]
fn test_missing_and_corrupt_records() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    assert!(matches!(store.load_pet_stats(), Err(PersistenceError::NotFound(_))));

    fs::write(dir.path().join("state.bin"), [1u8, 2]).unwrap();
    assert!(matches!(store.load_state(), Err(PersistenceError::Corrupt { .. })));
}

#[test]
fn test_model_integrity_checked_on_load() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();

    let blob = WeightSet::default_weights().to_bytes(5);
    let meta = ModelMeta::for_blob(&blob, 5, 0);
    store.save_model(&blob, &meta).unwrap();
    assert_eq!(store.load_model().unwrap().1, meta);

    // last byte of the record is the last byte of the blob
    let path = dir.path().join("model.bin");
    let mut record = fs::read(&path).unwrap();
    *record.last_mut().unwrap() ^= 0xFF;
    fs::write(&path, &record).unwrap();
    assert!(matches!(store.load_model(), Err(PersistenceError::Integrity(_))));
}

#[test]
fn test_failed_model_save_keeps_previous_model() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let mut engine = NeuropetEngine::start(store, EngineConfig::default(), 0).unwrap();

    let v1 = WeightSet::default_weights().to_bytes(1);
    let v1_meta = ModelMeta::for_blob(&v1, 1, 0);
    engine.upload_model(&v1, &v1_meta).unwrap();

    // the staging file cannot be written while a directory occupies its path
    fs::create_dir(dir.path().join("model.tmp")).unwrap();
    let v2 = WeightSet::zeros().to_bytes(2);
    let v2_meta = ModelMeta::for_blob(&v2, 2, 0);
    assert!(engine.upload_model(&v2, &v2_meta).is_err());
    assert_eq!(engine.inference().model_version(), 1);

    let reopened = FileStore::open(dir.path()).unwrap();
    let (blob, meta) = reopened.load_model().unwrap();
    assert_eq!(meta, v1_meta);
    assert_eq!(blob, v1);
}

#[test]
fn test_engine_starts_over_corrupt_data() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("state.bin"), b"garbage").unwrap();
    fs::write(dir.path().join("model.bin"), b"garbage").unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    let engine = NeuropetEngine::start(store, EngineConfig::default(), 0).unwrap();
    assert_eq!(engine.state(), &PetState::default());
    assert!(!engine.inference().has_custom_model());
    assert_eq!(engine.pet_stats().boot_count, 1);
}

#[test]
fn test_out_of_range_state_is_clamped() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();
    let raw = PetState {
        hunger: 1.5,
        energy: -0.2,
        ..PetState::default()
    };
    store.save_state(&raw).unwrap();
    let loaded = store.load_state().unwrap();
    assert_eq!(loaded.hunger, 1.0);
    assert_eq!(loaded.energy, 0.0);
}

#[test]
fn test_failed_reset_keeps_active_model() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    let mut engine = NeuropetEngine::start(store, EngineConfig::default(), 0).unwrap();

    let blob = WeightSet::default_weights().to_bytes(4);
    engine.upload_model(&blob, &ModelMeta::for_blob(&blob, 4, 0)).unwrap();

    // a directory in place of the record cannot be removed as a file
    let path = dir.path().join("model.bin");
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    assert!(engine.reset_model().is_err());
    assert_eq!(engine.inference().model_version(), 4);
    assert_eq!(engine.snapshot().model_version, 4);
}
