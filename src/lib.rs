// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuropet
//!
//! Decision-and-learning core of a two-button companion pet. Buttons become
//! gestures, gestures change the pet's needs, a tiny neural network (or a
//! rule table when no model is loaded) picks what the pet does next, and
//! owner feedback slowly biases those choices.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! neuropet = "0.1"  # Default: runtime
//! ```
//!
//! ```rust
//! use neuropet::prelude::*;
//!
//! let mut engine = NeuropetEngine::start(MemoryStore::new(), EngineConfig::default(), 0)?;
//!
//! // a feed press, then a decision tick
//! engine.handle_gesture(ButtonEvent {
//!     button: ButtonId::Feed,
//!     gesture: Gesture::Short,
//!     timestamp_ms: 500,
//! });
//! let output = engine.tick(2_000);
//! assert!((0.0..=1.0).contains(&output.arousal));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Flags
//!
//! - **`runtime`** (default): engine aggregate, persistence stores, scheduler
//! - **`config`**: TOML configuration with environment/CLI overrides
//! - **`observability`**: logging initialisation and per-crate debug flags
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Foundation: neuropet-structures                           │
//! │  (PetState, Features, Action, EventLog, ActionBias)        │
//! └────────────────────────────────────────────────────────────┘
//!                            ↓
//! ┌────────────────────────────────────────────────────────────┐
//! │  Sensing & simulation: sensorimotor, state-manager         │
//! │  (gestures, feature encoding, needs, spam, ignore)         │
//! └────────────────────────────────────────────────────────────┘
//!                            ↓
//! ┌────────────────────────────────────────────────────────────┐
//! │  NPU: npu-inference, npu-plasticity                        │
//! │  (12→16→10 MLP + fallback rules, reward-driven biases)     │
//! └────────────────────────────────────────────────────────────┘
//!                            ↓
//! ┌────────────────────────────────────────────────────────────┐
//! │  I/O & runtime: serialization, runtime                     │
//! │  (blob CRC, JSON export, engine loop, persistence)         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## License
//!
//! Apache-2.0

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export foundation
pub use neuropet_structures as structures;

// Re-export sensing and simulation
pub use neuropet_sensorimotor as sensorimotor;
pub use neuropet_state_manager as state_manager;

// Re-export algorithms
pub use neuropet_npu_inference as inference;
pub use neuropet_npu_plasticity as plasticity;

pub use neuropet_serialization as serialization;

// Re-export infrastructure
#[cfg(feature = "runtime")]
pub use neuropet_runtime as runtime;

#[cfg(feature = "config")]
pub use neuropet_config as config;

#[cfg(feature = "observability")]
pub use neuropet_observability as observability;

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::structures::{
        Action, ActionBias, ButtonEvent, ButtonId, EventLog, Features, Gesture, InputEvent,
        InteractionStats, LogEntry, Output, PetState,
    };

    pub use crate::inference::{InferenceEngine, Strategy, WeightSet};
    pub use crate::plasticity::RewardLearner;
    pub use crate::sensorimotor::{FeatureEncoder, GestureDetector, TimeOfDay};
    pub use crate::serialization::{export_json, ModelMeta};
    pub use crate::state_manager::{InteractionTracker, StateSimulator};

    #[cfg(feature = "runtime")]
    pub use crate::runtime::{
        EngineConfig, EngineEvent, FileStore, MemoryStore, NeuropetEngine, PetStore, Scheduler,
        Snapshot,
    };

    #[cfg(feature = "config")]
    pub use crate::config::{load_config, NeuropetConfig};
}
