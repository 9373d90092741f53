// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Persistence collaborator
//!
//! Every `load_*` returns [`PersistenceError::NotFound`] when nothing was
//! saved yet and [`PersistenceError::Corrupt`] when the stored bytes do not
//! decode. The engine treats both as "first run" and substitutes defaults.
//!
//! Model blobs are verified against their [`ModelMeta`] on save and on load;
//! the engine never sees bytes whose checksum does not match.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use neuropet_sensorimotor::TimeOffset;
use neuropet_serialization::ModelMeta;
use neuropet_state_manager::PetStats;
use neuropet_structures::{ActionBias, InteractionStats, PetState};
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;

pub type StoreResult<T> = std::result::Result<T, PersistenceError>;

/// Learned biases plus the lifetime reward count
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StoredBias {
    pub bias: ActionBias,
    pub total_rewards: u32,
}

pub trait PetStore {
    fn load_state(&self) -> StoreResult<PetState>;
    fn save_state(&mut self, state: &PetState) -> StoreResult<()>;

    fn load_interaction_stats(&self) -> StoreResult<InteractionStats>;
    fn save_interaction_stats(&mut self, stats: &InteractionStats) -> StoreResult<()>;

    fn load_pet_stats(&self) -> StoreResult<PetStats>;
    fn save_pet_stats(&mut self, stats: &PetStats) -> StoreResult<()>;

    fn load_bias(&self) -> StoreResult<StoredBias>;
    fn save_bias(&mut self, bias: &StoredBias) -> StoreResult<()>;

    fn load_time_offset(&self) -> StoreResult<TimeOffset>;
    fn save_time_offset(&mut self, offset: &TimeOffset) -> StoreResult<()>;

    /// Verified model blob and its metadata
    fn load_model(&self) -> StoreResult<(Vec<u8>, ModelMeta)>;
    /// Refuses blobs that do not match `meta`
    fn save_model(&mut self, blob: &[u8], meta: &ModelMeta) -> StoreResult<()>;
    fn clear_model(&mut self) -> StoreResult<()>;
}
