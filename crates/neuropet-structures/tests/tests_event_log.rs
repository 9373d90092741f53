// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use neuropet_structures::*;

fn entry(ts: u64, event: InputEvent) -> LogEntry {
    LogEntry {
        timestamp_ms: ts,
        input_event: event,
        features: Features::default(),
        output: Output::new(Action::Happy, 0.5, 0.5),
        state_after: PetState::default(),
    }
}

#[test]
fn test_count_never_exceeds_capacity() {
    for capacity in [1usize, 2, 7, DEFAULT_LOG_CAPACITY] {
        let mut log = EventLog::with_capacity(capacity).unwrap();
        for ts in 0..(capacity as u64 * 3 + 1) {
            log.append(entry(ts, InputEvent::PetShort));
            assert!(log.count() <= capacity);

            // index 0 always denotes the oldest retained entry
            let expected_oldest = (ts + 1).saturating_sub(capacity as u64);
            assert_eq!(log.get(0).unwrap().timestamp_ms, expected_oldest);
        }
    }
}

#[test]
fn test_capacity_plus_one_evicts_first() {
    let mut log = EventLog::new();
    log.append(entry(100, InputEvent::FeedShort));
    log.append(entry(200, InputEvent::PetLong));
    for ts in 0..(DEFAULT_LOG_CAPACITY as u64 - 1) {
        log.append(entry(1_000 + ts, InputEvent::Ignore));
    }

    assert_eq!(log.count(), DEFAULT_LOG_CAPACITY);
    let oldest = log.get(0).unwrap();
    assert_eq!(oldest.timestamp_ms, 200);
    assert_eq!(oldest.input_event, InputEvent::PetLong);
}

#[test]
fn test_log_entry_json_shape() {
    let value = serde_json::to_value(entry(5, InputEvent::FeedDouble)).unwrap();
    assert_eq!(value["input_event"], "feed_double");
    assert_eq!(value["output"]["action"], "happy");
}
