// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuropet State Manager
//!
//! Owns the mutation rules for the pet's needs and mood:
//!
//! ```text
//! ┌──────────────────────────┐     ┌──────────────────────────┐
//! │ StateSimulator           │     │ InteractionTracker       │
//! │  tick / feed / pet       │ ◀── │  spam-score decay        │
//! │  trust_delta             │     └──────────────────────────┘
//! └──────────────────────────┘     ┌──────────────────────────┐
//!              │                   │ InteractionWindow        │
//!              ▼                   │  1 m / 5 m counters      │
//!        PetState (clamped)        └──────────────────────────┘
//! ```
//!
//! Every mutator clamps into [0, 1]; out-of-range input is never rejected.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod pet_stats;
pub mod simulator;
pub mod tracker;
pub mod window;

pub use pet_stats::PetStats;
pub use simulator::{InteractionEffect, StateConfig, StateSimulator};
pub use tracker::{InteractionTracker, TrackerConfig};
pub use window::{InteractionKind, InteractionWindow};
