// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Directory-backed store, one bincode file per record
//!
//! ```text
//! <data_dir>/
//!   state.bin  interaction_stats.bin  pet_stats.bin
//!   bias.bin   time.bin
//!   model.bin  (metadata + blob)
//! ```
//!
//! Writes go to a `.tmp` sibling first and are renamed into place, so a
//! failed write leaves the previous record intact. The model and its
//! metadata share one record and are replaced together.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use neuropet_sensorimotor::TimeOffset;
use neuropet_serialization::ModelMeta;
use neuropet_state_manager::PetStats;
use neuropet_structures::{InteractionStats, PetState};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{PetStore, StoreResult, StoredBias};
use crate::error::PersistenceError;

const STATE_FILE: &str = "state.bin";
const INTERACTION_STATS_FILE: &str = "interaction_stats.bin";
const PET_STATS_FILE: &str = "pet_stats.bin";
const BIAS_FILE: &str = "bias.bin";
const TIME_FILE: &str = "time.bin";
const MODEL_FILE: &str = "model.bin";

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::info!(target: "neuropet-runtime", "Using data directory {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_bytes(&self, file: &str, what: &'static str) -> StoreResult<Vec<u8>> {
        match fs::read(self.dir.join(file)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PersistenceError::NotFound(what)),
            Err(e) => Err(e.into()),
        }
    }

    fn write_bytes(&self, file: &str, bytes: &[u8]) -> StoreResult<()> {
        let target = self.dir.join(file);
        let tmp = target.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, file: &str, what: &'static str) -> StoreResult<T> {
        let bytes = self.read_bytes(file, what)?;
        bincode::deserialize(&bytes).map_err(|e| PersistenceError::Corrupt {
            what,
            reason: format!("Deserialize failed: {}", e),
        })
    }

    fn save<T: Serialize>(&self, file: &str, what: &'static str, value: &T) -> StoreResult<()> {
        let encoded = bincode::serialize(value).map_err(|e| PersistenceError::Corrupt {
            what,
            reason: format!("Serialize failed: {}", e),
        })?;
        self.write_bytes(file, &encoded)
    }

    fn remove(&self, file: &str) -> StoreResult<()> {
        match fs::remove_file(self.dir.join(file)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PetStore for FileStore {
    fn load_state(&self) -> StoreResult<PetState> {
        // out-of-range values from an older build are pulled back into [0, 1]
        self.load::<PetState>(STATE_FILE, "state").map(PetState::clamped)
    }

    fn save_state(&mut self, state: &PetState) -> StoreResult<()> {
        self.save(STATE_FILE, "state", state)
    }

    fn load_interaction_stats(&self) -> StoreResult<InteractionStats> {
        self.load(INTERACTION_STATS_FILE, "interaction stats")
    }

    fn save_interaction_stats(&mut self, stats: &InteractionStats) -> StoreResult<()> {
        self.save(INTERACTION_STATS_FILE, "interaction stats", stats)
    }

    fn load_pet_stats(&self) -> StoreResult<PetStats> {
        self.load(PET_STATS_FILE, "pet stats")
    }

    fn save_pet_stats(&mut self, stats: &PetStats) -> StoreResult<()> {
        self.save(PET_STATS_FILE, "pet stats", stats)
    }

    fn load_bias(&self) -> StoreResult<StoredBias> {
        self.load(BIAS_FILE, "bias")
    }

    fn save_bias(&mut self, bias: &StoredBias) -> StoreResult<()> {
        self.save(BIAS_FILE, "bias", bias)
    }

    fn load_time_offset(&self) -> StoreResult<TimeOffset> {
        self.load(TIME_FILE, "time offset")
    }

    fn save_time_offset(&mut self, offset: &TimeOffset) -> StoreResult<()> {
        self.save(TIME_FILE, "time offset", offset)
    }

    fn load_model(&self) -> StoreResult<(Vec<u8>, ModelMeta)> {
        let (meta, blob): (ModelMeta, Vec<u8>) = self.load(MODEL_FILE, "model")?;
        meta.verify(&blob)?;
        Ok((blob, meta))
    }

    fn save_model(&mut self, blob: &[u8], meta: &ModelMeta) -> StoreResult<()> {
        meta.verify(blob)?;
        self.save(MODEL_FILE, "model", &(meta, blob))?;
        tracing::info!(
            target: "neuropet-runtime",
            "Saved model v{} ({} bytes, crc {:08x})",
            meta.version,
            meta.size,
            meta.crc32
        );
        Ok(())
    }

    fn clear_model(&mut self) -> StoreResult<()> {
        self.remove(MODEL_FILE)
    }
}
