// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuropet Data Structures
//!
//! Plain data shared by every neuropet crate:
//! - **State**: [`PetState`] (five needs/mood values) and [`InteractionStats`]
//! - **Decision**: [`Features`], [`Action`], [`Output`] and the learned [`ActionBias`]
//! - **Input**: [`ButtonId`], [`Gesture`], [`ButtonEvent`], [`InputEvent`]
//! - **History**: [`LogEntry`] and the fixed-capacity [`EventLog`]
//!
//! All normalized fields are clamped on mutation, never rejected.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod action;
pub mod bias;
pub mod error;
pub mod event_log;
pub mod features;
pub mod input;
pub mod interaction;
pub mod pet_state;

pub use action::{Action, Output, ACTION_COUNT};
pub use bias::{ActionBias, BIAS_LIMIT};
pub use error::{Result, StructureError};
pub use event_log::{EventLog, LogEntry, DEFAULT_LOG_CAPACITY};
pub use features::{Features, FEATURE_COUNT};
pub use input::{ButtonEvent, ButtonId, Gesture, InputEvent, BUTTON_COUNT};
pub use interaction::InteractionStats;
pub use pet_state::{clamp01, PetState};
