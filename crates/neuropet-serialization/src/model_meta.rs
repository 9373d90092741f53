// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::crc::crc32;
use crate::error::{Result, SerializationError};

/// Feature schema the network input layout corresponds to
pub const FEATURES_VERSION: u32 = 1;

/// Metadata stored alongside a model blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMeta {
    pub version: u32,
    pub features_version: u32,
    /// Blob length in bytes
    pub size: u32,
    pub crc32: u32,
    /// Unix timestamp (seconds)
    pub created_at: u32,
}

impl ModelMeta {
    /// Describe `blob` under the current feature schema
    pub fn for_blob(blob: &[u8], version: u32, created_at: u32) -> Self {
        Self {
            version,
            features_version: FEATURES_VERSION,
            size: blob.len() as u32,
            crc32: crc32(blob),
            created_at,
        }
    }

    /// Check schema, size and checksum against `blob`
    pub fn verify(&self, blob: &[u8]) -> Result<()> {
        if self.features_version != FEATURES_VERSION {
            return Err(SerializationError::FeaturesVersion(
                self.features_version,
                FEATURES_VERSION,
            ));
        }
        if self.size as usize != blob.len() {
            return Err(SerializationError::SizeMismatch {
                expected: self.size as usize,
                actual: blob.len(),
            });
        }
        let actual = crc32(blob);
        if actual != self.crc32 {
            return Err(SerializationError::CrcMismatch {
                expected: self.crc32,
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_detects_corruption() {
        let mut blob = vec![1u8, 2, 3, 4, 5];
        let meta = ModelMeta::for_blob(&blob, 1, 1_700_000_000);
        assert!(meta.verify(&blob).is_ok());

        blob[2] ^= 0xFF;
        assert!(matches!(
            meta.verify(&blob),
            Err(SerializationError::CrcMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_checks_schema_and_size() {
        let blob = vec![0u8; 8];
        let mut meta = ModelMeta::for_blob(&blob, 1, 0);
        meta.features_version = 2;
        assert!(matches!(
            meta.verify(&blob),
            Err(SerializationError::FeaturesVersion(2, 1))
        ));

        let meta = ModelMeta::for_blob(&blob, 1, 0);
        assert!(matches!(
            meta.verify(&blob[..4]),
            Err(SerializationError::SizeMismatch { expected: 8, actual: 4 })
        ));
    }
}
