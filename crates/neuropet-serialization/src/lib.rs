// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuropet Serialization
//!
//! Byte- and text-level formats that cross the device boundary:
//!
//! - **[`crc32`]** - IEEE CRC-32 used to verify model uploads and stored blobs
//! - **[`ModelMeta`]** - metadata stored next to a model blob
//! - **[`export_json`]** - read-only projection of the event log into the
//!   JSON record array consumed by the trainer
//!
//! ## Basic Usage
//!
//! ```rust
//! use neuropet_serialization::{crc32, ModelMeta};
//!
//! let blob = vec![0u8; 16];
//! let meta = ModelMeta::for_blob(&blob, 3, 0);
//! assert_eq!(meta.crc32, crc32(&blob));
//! assert!(meta.verify(&blob).is_ok());
//! ```

mod crc;
mod error;
mod export;
mod model_meta;

pub use crc::crc32;
pub use error::{Result, SerializationError};
pub use export::{
    export_json, ExportBrain, ExportFeatures, ExportRecord, ExportState,
};
pub use model_meta::{ModelMeta, FEATURES_VERSION};
