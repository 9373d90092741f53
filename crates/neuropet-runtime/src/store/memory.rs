// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! In-memory store for tests and simulation

use neuropet_sensorimotor::TimeOffset;
use neuropet_serialization::ModelMeta;
use neuropet_state_manager::PetStats;
use neuropet_structures::{InteractionStats, PetState};

use super::{PetStore, StoreResult, StoredBias};
use crate::error::PersistenceError;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Option<PetState>,
    interaction_stats: Option<InteractionStats>,
    pet_stats: Option<PetStats>,
    bias: Option<StoredBias>,
    time_offset: Option<TimeOffset>,
    model: Option<(Vec<u8>, ModelMeta)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the first save of any record
    pub fn is_empty(&self) -> bool {
        self.state.is_none()
            && self.interaction_stats.is_none()
            && self.pet_stats.is_none()
            && self.bias.is_none()
            && self.time_offset.is_none()
            && self.model.is_none()
    }
}

fn found<T: Copy>(slot: &Option<T>, what: &'static str) -> StoreResult<T> {
    slot.ok_or(PersistenceError::NotFound(what))
}

impl PetStore for MemoryStore {
    fn load_state(&self) -> StoreResult<PetState> {
        found(&self.state, "state")
    }

    fn save_state(&mut self, state: &PetState) -> StoreResult<()> {
        self.state = Some(*state);
        Ok(())
    }

    fn load_interaction_stats(&self) -> StoreResult<InteractionStats> {
        found(&self.interaction_stats, "interaction stats")
    }

    fn save_interaction_stats(&mut self, stats: &InteractionStats) -> StoreResult<()> {
        self.interaction_stats = Some(*stats);
        Ok(())
    }

    fn load_pet_stats(&self) -> StoreResult<PetStats> {
        found(&self.pet_stats, "pet stats")
    }

    fn save_pet_stats(&mut self, stats: &PetStats) -> StoreResult<()> {
        self.pet_stats = Some(*stats);
        Ok(())
    }

    fn load_bias(&self) -> StoreResult<StoredBias> {
        found(&self.bias, "bias")
    }

    fn save_bias(&mut self, bias: &StoredBias) -> StoreResult<()> {
        self.bias = Some(*bias);
        Ok(())
    }

    fn load_time_offset(&self) -> StoreResult<TimeOffset> {
        found(&self.time_offset, "time offset")
    }

    fn save_time_offset(&mut self, offset: &TimeOffset) -> StoreResult<()> {
        self.time_offset = Some(*offset);
        Ok(())
    }

    fn load_model(&self) -> StoreResult<(Vec<u8>, ModelMeta)> {
        let (blob, meta) = self
            .model
            .as_ref()
            .ok_or(PersistenceError::NotFound("model"))?;
        meta.verify(blob)?;
        Ok((blob.clone(), *meta))
    }

    fn save_model(&mut self, blob: &[u8], meta: &ModelMeta) -> StoreResult<()> {
        meta.verify(blob)?;
        self.model = Some((blob.to_vec(), *meta));
        Ok(())
    }

    fn clear_model(&mut self) -> StoreResult<()> {
        self.model = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_reports_not_found() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(matches!(store.load_state(), Err(PersistenceError::NotFound("state"))));
        assert!(matches!(store.load_model(), Err(PersistenceError::NotFound("model"))));
    }

    #[test]
    fn test_model_checksum_enforced() {
        let mut store = MemoryStore::new();
        let blob = vec![7u8; 32];
        let mut meta = ModelMeta::for_blob(&blob, 2, 0);
        meta.crc32 ^= 1;
        assert!(matches!(
            store.save_model(&blob, &meta),
            Err(PersistenceError::Integrity(_))
        ));
        assert!(store.load_model().is_err());
    }
}
