// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Blob boundary behaviour and strategy guarantees

use neuropet_npu_inference::{InferenceEngine, Strategy, WeightSet, BLOB_LEN, PARAM_COUNT};
use neuropet_structures::{Action, ActionBias, Features};

fn blob_of_len(len: usize, version: u32) -> Vec<u8> {
    let mut bytes = WeightSet::default_weights().to_bytes(version);
    bytes.resize(len, 0);
    bytes
}

#[test]
fn test_one_byte_short_is_rejected() {
    let mut engine = InferenceEngine::new();
    let result = engine.load_weights(&blob_of_len(4 + PARAM_COUNT * 4 - 1, 11));
    assert!(result.is_err());
    assert!(!engine.has_custom_model());
    assert_eq!(engine.model_version(), 0);
    assert_eq!(engine.strategy(), Strategy::Fallback);
}

#[test]
fn test_exact_length_is_accepted() {
    let mut engine = InferenceEngine::new();
    assert_eq!(engine.load_weights(&blob_of_len(BLOB_LEN, 11)), Ok(11));
    assert_eq!(engine.model_version(), 11);
}

#[test]
fn test_trailing_bytes_ignored() {
    let mut engine = InferenceEngine::new();
    assert_eq!(engine.load_weights(&blob_of_len(BLOB_LEN + 32, 12)), Ok(12));
}

#[test]
fn test_error_message_is_readable() {
    let mut engine = InferenceEngine::new();
    let err = engine.load_weights(&[1, 2, 3]).unwrap_err();
    assert!(err.to_string().contains("1516"));
}

#[test]
fn test_fallback_is_pure() {
    let engine = InferenceEngine::new();
    let features = Features {
        hunger: 0.85,
        energy: 0.9,
        affection_need: 0.2,
        trust: 0.5,
        stress: 0.1,
        ..Default::default()
    };
    let a = engine.fallback(&features);
    let b = engine.fallback(&features);
    assert_eq!(a, b);
    assert_eq!(a.action, Action::AskFood);
    assert!((a.valence + 0.3).abs() < 1e-6);
    assert!((a.arousal - 0.755).abs() < 1e-6);
}

#[test]
fn test_fallback_available_with_custom_model() {
    let mut engine = InferenceEngine::new();
    engine.load_weights(&blob_of_len(BLOB_LEN, 2)).unwrap();
    let features = Features {
        energy: 0.1,
        ..Default::default()
    };
    assert_eq!(engine.fallback(&features).action, Action::Sleep);
    // learned path still produces an in-range output
    let out = engine.infer(&features, &ActionBias::zeroed());
    assert!((0.0..=1.0).contains(&out.arousal));
}
