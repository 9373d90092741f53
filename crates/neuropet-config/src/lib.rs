// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuropet Configuration
//!
//! Type-safe configuration for the pet runtime with support for:
//! - TOML file parsing (`neuropet_configuration.toml`)
//! - Environment variable overrides (`NEUROPET_*`)
//! - CLI argument overrides
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neuropet_config::load_config;
//!
//! let config = load_config(None, None).expect("Failed to load config");
//! println!("Tick every {} ms", config.cadence.tick_interval_ms);
//! ```
//!
//! Every section defaults field-by-field, so an empty file is a valid
//! configuration describing the stock device.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{
    apply_cli_overrides, apply_environment_overrides, find_config_file, load_config,
    CONFIG_FILE_NAME,
};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config: NeuropetConfig = toml::from_str("").unwrap();
        assert_eq!(config.buttons.debounce_ms, 50);
        assert_eq!(config.event_log.capacity, 100);
        assert!(validate_config(&config).is_ok());
    }
}
