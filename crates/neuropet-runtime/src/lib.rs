// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # Neuropet Runtime
//!
//! Owns every component of the pet in one [`NeuropetEngine`] and runs the
//! single-threaded control loop:
//!
//! ```text
//! poll (~10 ms)   buttons ─▶ gestures ─▶ interaction effects ─▶ log + rewards
//! tick (~2 s)     simulate ─▶ spam decay ─▶ ignore check ─▶ encode ─▶ infer
//! save (~60 s)    apply rewards ─▶ persist state, stats, biases, clock
//! ```
//!
//! Persistence is delegated to a [`PetStore`] collaborator; missing or
//! corrupt data is replaced by defaults at start-up rather than surfaced.
//! Readers on other threads observe whole [`Snapshot`] copies through a
//! [`SnapshotHandle`].

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod scheduler;
pub mod snapshot;
pub mod store;

pub use config::EngineConfig;
pub use engine::NeuropetEngine;
pub use error::{EngineError, PersistenceError, Result};
pub use events::EngineEvent;
pub use scheduler::{Cadence, Due, Scheduler};
pub use snapshot::{Snapshot, SnapshotHandle};
pub use store::{FileStore, MemoryStore, PetStore, StoredBias};
