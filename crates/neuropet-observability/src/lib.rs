// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # neuropet-observability
//!
//! Logging setup shared by every neuropet binary, with per-crate debug flags
//! (`--debug-neuropet-runtime`, `--debug-all`, `NEUROPET_DEBUG=...`).
//!
//! ## Features
//! - `file-logging`: daily-rolling JSON log under a timestamped run folder

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod init;

pub use cli::*;
pub use init::*;

/// Log targets used across the workspace
pub const KNOWN_CRATES: &[&str] = &[
    "neuropet-sensorimotor",
    "neuropet-state-manager",
    "neuropet-inference",
    "neuropet-plasticity",
    "neuropet-serialization",
    "neuropet-runtime",
];
